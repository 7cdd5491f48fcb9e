use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use devnest_markdown_engine::{DEFAULT_SNIPPET_CHARS, render, render_snippet};
use pulldown_cmark::{Parser, html};
mod common;

fn bench_render_post(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_post");

    for size in [1, 10, 100] {
        let content = common::generate_post(size);
        group.bench_with_input(BenchmarkId::new("devnest", size), &content, |b, content| {
            b.iter(|| render(std::hint::black_box(content)));
        });
    }

    group.finish();
}

fn bench_pulldown_cmark_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_post");
    group.sample_size(10);

    let content = common::generate_post(100);
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let mut out = String::new();
            html::push_html(&mut out, parser);
            std::hint::black_box(out);
        });
    });

    group.finish();
}

fn bench_comment_previews(c: &mut Criterion) {
    let comments = common::generate_comment_thread(50);
    c.bench_function("comment_previews", |b| {
        b.iter(|| {
            for body in &comments {
                std::hint::black_box(render_snippet(body, DEFAULT_SNIPPET_CHARS));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_render_post,
    bench_pulldown_cmark_baseline,
    bench_comment_previews
);
criterion_main!(benches);
