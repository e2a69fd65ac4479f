pub mod blocks;
pub mod headings;
pub mod inline;
pub mod lines;
pub mod slug;

#[cfg(test)]
mod tests;

use blocks::{Block, build_blocks};
use headings::{DocumentOutline, index_headings};
use lines::article_lines;

/// An article after both passes: the heading outline and the body blocks.
#[derive(Debug)]
pub struct ParsedDoc {
    pub outline: DocumentOutline,
    pub blocks: Vec<Block>,
}

/// Parses article text: heading index first, then block classification,
/// both over the same trimmed lines.
///
/// Every call starts from fresh state, so nothing carries over between
/// documents.
pub fn parse_document(text: &str) -> ParsedDoc {
    let lines = article_lines(text);
    let outline = index_headings(&lines);
    let blocks = build_blocks(&lines);

    log::debug!(
        "parsed {} lines into {} blocks",
        lines.len(),
        blocks.len()
    );
    ParsedDoc { outline, blocks }
}
