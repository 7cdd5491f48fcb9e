/// Line break emitted between the lines of a paragraph or blockquote.
pub struct SoftBreak;

impl SoftBreak {
    pub const TAG: &'static str = "<br />";
}
