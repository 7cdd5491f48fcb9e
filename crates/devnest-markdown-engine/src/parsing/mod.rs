pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod span;

use blocks::{Block, BlockBuilder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

impl ParsedDoc {
    /// Writes every block and joins the fragments with `\n`.
    pub fn to_html(&self) -> String {
        self.blocks
            .iter()
            .map(Block::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Normalizes line endings, then drives the block state machine one line at a
/// time.
pub fn parse_document(source: &str) -> ParsedDoc {
    let source = source.replace("\r\n", "\n");
    let mut builder = BlockBuilder::new();
    let mut lines = 0usize;

    for line in source.split('\n') {
        builder.push(line);
        lines += 1;
    }

    let blocks = builder.finish();
    log::debug!("parsed {lines} lines into {} blocks", blocks.len());
    ParsedDoc { blocks }
}
