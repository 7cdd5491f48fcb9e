use std::sync::LazyLock;

use regex::Regex;

/// Every element the renderer may emit, with the only attributes it may carry.
static VOCABULARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"<(?:",
        r"/?(?:p|h[1-6]|blockquote|ul|ol|li|pre|code|strong|em|del)",
        r"|/a",
        r#"|code class="language-[^"<>]*""#,
        r"|br /|hr /",
        r#"|img src="https?:[^"<>\s]*" alt="[^"<>]*" /"#,
        r#"|a href="https?:[^"<>\s]*" target="_blank" rel="noopener noreferrer""#,
        r")>",
    ))
    .expect("Invalid vocabulary regex")
});

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:amp|lt|gt|quot|#x27|#39);").expect("Invalid entity regex")
});

/// Panics if `html` contains markup outside the fixed vocabulary, or a
/// metacharacter that is not part of an emitted tag or a known entity.
pub fn check(html: &str) {
    let text = VOCABULARY.replace_all(html, "");
    for c in ['<', '>', '"', '\''] {
        assert!(
            !text.contains(c),
            "unescaped {c:?} outside the tag vocabulary in {html:?}"
        );
    }
    let text = ENTITY.replace_all(&text, "");
    assert!(
        !text.contains('&'),
        "bare '&' outside a known entity in {html:?}"
    );
}
