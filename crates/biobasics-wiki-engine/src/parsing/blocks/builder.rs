use crate::parsing::{headings::HeadingText, inline::render_inline};

use super::{
    classify::LineClass,
    kinds::{Heading, ImageSyntax, TableRow},
    types::{Block, Header, Image, Table},
};

/// The block currently open while scanning.
///
/// A table is only entered on its first row, which is consumed as the
/// header straight away, so `InTable` always has its header.
#[derive(Debug, Default)]
enum ParserState {
    #[default]
    None,
    InList {
        items: Vec<String>,
    },
    InTable {
        table: Table,
        header_arity: usize,
    },
}

/// How many lines a single [`BlockBuilder::push`] consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consumed {
    /// Only the pushed line.
    Line,
    /// The pushed line and the lookahead line (image caption, table
    /// separator).
    LineAndNext,
}

impl Consumed {
    pub fn count(self) -> usize {
        match self {
            Self::Line => 1,
            Self::LineAndNext => 2,
        }
    }
}

/// Line-by-line state machine that turns classified lines into [`Block`]s.
///
/// Owns its state for exactly one document; create a new builder per
/// conversion.
pub struct BlockBuilder {
    state: ParserState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            state: ParserState::None,
            out: vec![],
        }
    }

    /// Feeds one classified line. `next` is the raw line after it, used for
    /// caption and separator lookahead.
    pub fn push(&mut self, c: LineClass<'_>, next: Option<&str>) -> Consumed {
        match c {
            LineClass::Blank => {
                // Blank lines end a list but not a table.
                if matches!(self.state, ParserState::InList { .. }) {
                    self.close_open_block();
                }
                Consumed::Line
            }
            LineClass::Rule => {
                self.close_open_block();
                self.out.push(Block::Rule);
                Consumed::Line
            }
            LineClass::Heading(line) => {
                self.close_open_block();
                self.out.push(header_block(line));
                Consumed::Line
            }
            LineClass::Image(line) => self.push_image(line, next),
            LineClass::ListItem(text) => {
                self.push_list_item(text);
                Consumed::Line
            }
            LineClass::TableRow(line) => self.push_table_row(line, next),
            LineClass::Text(line) => {
                self.close_open_block();
                self.out.push(Block::Paragraph(render_inline(line)));
                Consumed::Line
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.close_open_block();
        self.out
    }

    fn push_image(&mut self, line: &str, next: Option<&str>) -> Consumed {
        self.close_open_block();

        let Some((position, alt, url)) = ImageSyntax::parse(line) else {
            self.out.push(Block::Literal(line.to_string()));
            return Consumed::Line;
        };

        let caption = next.and_then(ImageSyntax::caption).map(str::to_string);
        let consumed = if caption.is_some() {
            Consumed::LineAndNext
        } else {
            Consumed::Line
        };

        self.out.push(Block::Image(Image {
            position,
            url: url.to_string(),
            alt: alt.to_string(),
            caption,
        }));
        consumed
    }

    fn push_list_item(&mut self, text: &str) {
        let item = render_inline(text);
        match &mut self.state {
            ParserState::InList { items } => items.push(item),
            _ => {
                self.close_open_block();
                self.state = ParserState::InList { items: vec![item] };
            }
        }
    }

    fn push_table_row(&mut self, line: &str, next: Option<&str>) -> Consumed {
        let cells: Vec<String> = TableRow::cells(line)
            .into_iter()
            .map(render_inline)
            .collect();

        match &mut self.state {
            ParserState::InTable {
                table,
                header_arity,
            } => {
                if cells.len() != *header_arity {
                    log::debug!(
                        "ragged table row: {} cells under a {}-column header",
                        cells.len(),
                        header_arity
                    );
                }
                table.rows.push(cells);
            }
            _ => {
                self.close_open_block();
                self.state = ParserState::InTable {
                    header_arity: cells.len(),
                    table: Table {
                        header: cells,
                        rows: vec![],
                    },
                };
            }
        }

        if next.is_some_and(TableRow::is_separator) {
            Consumed::LineAndNext
        } else {
            Consumed::Line
        }
    }

    fn close_open_block(&mut self) {
        match std::mem::take(&mut self.state) {
            ParserState::None => {}
            ParserState::InList { items } => self.out.push(Block::List(items)),
            ParserState::InTable { table, .. } => self.out.push(Block::Table(table)),
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn header_block(line: &str) -> Block {
    let Some((level, raw)) = Heading::parse(line) else {
        return Block::Literal(line.to_string());
    };
    let heading = HeadingText::from_raw(raw);
    Block::Header(Header {
        level,
        text: render_inline(raw),
        is_sources: level == 2 && heading.is_sources(),
        anchor: heading.anchor,
    })
}
