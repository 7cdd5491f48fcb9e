/// ATX heading: 1 to 6 `#` characters, required whitespace, then text.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns `(level, text)` for a trimmed heading line.
    pub fn parse(trimmed: &str) -> Option<(u8, &str)> {
        let hashes = trimmed.chars().take_while(|&c| c == Self::MARKER).count();
        let level = u8::try_from(hashes).ok()?;
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &trimmed[hashes..];
        let text = rest.trim_start();
        if text.len() == rest.len() {
            // No whitespace after the markers (`#tag`, or a bare `#`).
            return None;
        }
        Some((level, text))
    }
}
