use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use devnest_markdown_engine::parsing::inline::format_raw;
mod common;

/// Formatting time should grow linearly with the length of a delimiter run.
fn bench_adversarial_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline_adversarial");
    group.sample_size(10);

    for len in [1_000, 10_000] {
        for (name, line) in common::generate_adversarial_line(len) {
            group.bench_with_input(BenchmarkId::new(name, len), &line, |b, line| {
                b.iter(|| format_raw(std::hint::black_box(line)));
            });
        }
    }

    group.finish();
}

fn bench_typical_line(c: &mut Criterion) {
    let line = "Some **bold** and *italic* with `code`, a [link](https://example.com/x_y) and ![img](https://img.example/a.png).";
    c.bench_function("inline_typical", |b| {
        b.iter(|| format_raw(std::hint::black_box(line)));
    });
}

criterion_group!(benches, bench_adversarial_runs, bench_typical_line);
criterion_main!(benches);
