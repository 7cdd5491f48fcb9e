use crate::parsing::blocks::types::ListKind;

/// List item markers. Items are flat; indentation is not significant.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    pub const ORDERED_DELIMITER: char = '.';

    /// Returns the list kind and item text for a trimmed list line.
    pub fn parse(trimmed: &str) -> Option<(ListKind, &str)> {
        Self::unordered(trimmed)
            .map(|text| (ListKind::Unordered, text))
            .or_else(|| Self::ordered(trimmed).map(|text| (ListKind::Ordered, text)))
    }

    /// `- item`, `* item`, `+ item`.
    pub fn unordered(trimmed: &str) -> Option<&str> {
        let rest = trimmed.strip_prefix(Self::BULLETS)?;
        Self::after_required_space(rest)
    }

    /// `1. item`. The number itself is dropped.
    pub fn ordered(trimmed: &str) -> Option<&str> {
        let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let rest = trimmed[digits..].strip_prefix(Self::ORDERED_DELIMITER)?;
        Self::after_required_space(rest)
    }

    fn after_required_space(rest: &str) -> Option<&str> {
        let text = rest.trim_start();
        (text.len() < rest.len()).then_some(text)
    }
}
