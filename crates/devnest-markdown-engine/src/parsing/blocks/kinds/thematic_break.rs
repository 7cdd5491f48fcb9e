/// Horizontal rule: three or more of the same `-`, `*` or `_` character.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    pub const MIN_LEN: usize = 3;

    pub fn matches(trimmed: &str) -> bool {
        let mut chars = trimmed.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        Self::MARKERS.contains(&first)
            && trimmed.len() >= Self::MIN_LEN
            && chars.all(|c| c == first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("---", true)]
    #[case("***", true)]
    #[case("___", true)]
    #[case("----------", true)]
    #[case("--", false)]
    #[case("-*-", false)]
    #[case("- - -", false)]
    #[case("--- x", false)]
    #[case("", false)]
    fn recognises_rules(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(ThematicBreak::matches(line), expected);
    }
}
