/// A fence-open line, with the language token if one was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceOpen<'a> {
    pub language: Option<&'a str>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Recognises a fence-open line (already trimmed).
    ///
    /// The language is the first whitespace-delimited token after the fence.
    pub fn open(trimmed: &str) -> Option<FenceOpen<'_>> {
        let info = trimmed.strip_prefix(Self::BACKTICKS)?;
        Some(FenceOpen {
            language: info.split_whitespace().next(),
        })
    }

    /// True when a trimmed line inside a code block closes it.
    pub fn closes(trimmed: &str) -> bool {
        trimmed == Self::BACKTICKS
    }
}
