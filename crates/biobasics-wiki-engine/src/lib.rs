pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::{DocumentMeta, MarkdownFile, PageOptions, RelatedArticle};
pub use parsing::{ParsedDoc, headings::TocEntry, parse_document};
pub use render::WikiConverter;

/// Converts one article with the default page options.
pub fn convert(markdown: &str, meta: &DocumentMeta) -> String {
    WikiConverter::default().convert(markdown, meta)
}
