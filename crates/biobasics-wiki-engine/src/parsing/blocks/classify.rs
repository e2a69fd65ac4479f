use super::kinds::{Heading, ImageSyntax, ListItem, Rule, TableRow};

/// Block-level shape of a single trimmed line.
///
/// This is phase 1 of block parsing: each line is classified on its own,
/// without reference to the open block or the lines around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    Rule,
    /// Starts with `#`; carries the whole line.
    Heading(&'a str),
    /// Starts with `![`; carries the whole line.
    Image(&'a str),
    /// `- item`; carries the item text.
    ListItem(&'a str),
    /// `| a | b |`; carries the whole line.
    TableRow(&'a str),
    /// Anything else becomes a paragraph.
    Text(&'a str),
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line; earlier checks win over later ones.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let line = line.trim();

        if line.is_empty() {
            LineClass::Blank
        } else if Rule::is_rule(line) {
            LineClass::Rule
        } else if Heading::opens(line) {
            LineClass::Heading(line)
        } else if ImageSyntax::opens(line) {
            LineClass::Image(line)
        } else if let Some(text) = ListItem::text(line) {
            LineClass::ListItem(text)
        } else if TableRow::is_row(line) {
            LineClass::TableRow(line)
        } else {
            LineClass::Text(line)
        }
    }
}
