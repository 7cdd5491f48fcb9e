use crate::{escape::escape_html, parsing::inline::kinds::SoftBreak};

use super::types::Block;

impl Block {
    /// Writes this block as a markup fragment.
    pub fn to_html(&self) -> String {
        match self {
            Block::Paragraph(html) => format!("<p>{html}</p>"),
            Block::Heading { level, html } => format!("<h{level}>{html}</h{level}>"),
            Block::Blockquote(lines) => {
                format!("<blockquote>{}</blockquote>", lines.join(SoftBreak::TAG))
            }
            Block::List { kind, items } => {
                let tag = kind.tag();
                let items: String = items.iter().map(|i| format!("<li>{i}</li>")).collect();
                format!("<{tag}>{items}</{tag}>")
            }
            Block::CodeBlock { language, lines } => {
                let class = language
                    .as_deref()
                    .map(|l| format!(r#" class="language-{}""#, escape_html(l)))
                    .unwrap_or_default();
                let body: Vec<String> = lines.iter().map(|l| escape_html(l)).collect();
                format!("<pre><code{class}>{}</code></pre>", body.join("\n"))
            }
            Block::HorizontalRule => "<hr />".to_owned(),
        }
    }
}
