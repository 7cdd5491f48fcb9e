/// Bold and italic delimiters and patterns.
///
/// Bold runs before italic, so `**` pairs are consumed first and the single
/// delimiter patterns only ever see what is left over. A bold body may hold
/// single delimiters (`**a *b* c**`) but must not start with one, which keeps
/// `***x***` as italic around bold.
pub struct Emphasis;

impl Emphasis {
    pub const STRONG_TAG: &'static str = "strong";
    pub const EM_TAG: &'static str = "em";

    pub const BOLD_STARS: &'static str = r"\*\*(?P<body>[^*](?:[^*]|\*[^*])*?)\*\*";
    pub const BOLD_UNDERSCORES: &'static str = r"__(?P<body>[^_](?:[^_]|_[^_])*?)__";
    /// The body may not start with whitespace, so `* item` stays literal.
    pub const ITALIC_STAR: &'static str = r"\*(?P<body>[^*\s][^*]*?)\*";
    pub const ITALIC_UNDERSCORE: &'static str = r"_(?P<body>[^_\s][^_]*?)_";
}

/// `~~text~~`.
pub struct Strikethrough;

impl Strikethrough {
    pub const TAG: &'static str = "del";
    pub const PATTERN: &'static str = r"~~(?P<body>[^~]+)~~";
}
