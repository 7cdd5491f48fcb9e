/// Links and images share the destination rule: only `http:` and `https:`
/// URLs are ever emitted. Anything else is left as literal text. A URL never
/// spans `U+FFFC`, the placeholder the passes put in place of markup.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"\[(?P<body>[^\]]+)\]\((?P<url>https?:[^)\s\x{FFFC}]+)\)";
    /// The `](url)` tail of a link or image, guarded until the link passes run.
    pub const DESTINATION: &'static str = r"\]\((?P<url>https?:[^)\s\x{FFFC}]+)\)";
    pub const TARGET: &'static str = "_blank";
    pub const REL: &'static str = "noopener noreferrer";
}

/// `![alt](url)`; the alt text is emitted with its markup stripped.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r"!\[(?P<body>[^\]]*)\]\((?P<url>https?:[^)\s\x{FFFC}]+)\)";
}
