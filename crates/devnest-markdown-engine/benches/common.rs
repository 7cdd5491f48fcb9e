// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_post(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\nA second line with a [link](https://example.com/a_b) and ~~old~~ text.\n\n- Bullet point\n- Another item\n\n1. First\n2. Second\n\n> A quote with _emphasis_\n> continued\n\n```rust\nfn example() {\n    println!(\"Hello <world>\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_comment_thread(comments: usize) -> Vec<String> {
    (0..comments)
        .map(|i| {
            format!(
                "Comment {i} says **thanks** for the post.\n\n![screenshot {i}](https://img.example/{i}.png)\n\n> quoting _someone_ else"
            )
        })
        .collect()
}

/// Inputs that stress the inline passes: long delimiter runs and many
/// candidates that fail on markup or a link destination.
#[allow(dead_code)]
pub fn generate_adversarial_line(len: usize) -> Vec<(&'static str, String)> {
    vec![
        ("stars", "*".repeat(len)),
        ("underscores", "_".repeat(len)),
        ("backticks", "`".repeat(len)),
        ("alternating", "*_".repeat(len / 2)),
        ("bracket_run", format!("{}a*](http://x)*", "[".repeat(len))),
        ("code_crossing", format!("{}*", "*`".repeat(len / 2))),
        ("guarded_urls", "[a](http://x/_) _".repeat(len / 16)),
    ]
}
