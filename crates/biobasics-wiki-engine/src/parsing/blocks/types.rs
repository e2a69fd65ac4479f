use super::kinds::ImagePosition;

/// One rendered unit of article body content.
///
/// Text fields hold inline-rendered HTML unless noted otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Header(Header),
    Image(Image),
    /// Bullet list items, in order.
    List(Vec<String>),
    Table(Table),
    Rule,
    Paragraph(String),
    /// A line that opened like a header or image but did not parse; emitted
    /// verbatim.
    Literal(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub level: u8,
    pub text: String,
    /// Slug of the heading's plain text; matches its TOC entry.
    pub anchor: String,
    /// Level-2 sources section, styled differently.
    pub is_sources: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub position: ImagePosition,
    /// Raw image URL from the source line.
    pub url: String,
    /// Raw alt text from the source line.
    pub alt: String,
    /// Caption line with its stars removed, as written.
    pub caption: Option<String>,
}

/// A pipe table. The first row seen is always the header.
///
/// Rows are not reconciled against the header arity: ragged rows keep
/// however many cells they were written with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
