//! # Heading Index
//!
//! First pass over an article: collects the document title and the table of
//! contents before any block is rendered.
//!
//! Heading ids in the rendered body and TOC links must match exactly, so
//! both passes derive them through [`HeadingText::from_raw`] and nothing
//! else.

use serde::Serialize;

use super::{blocks::kinds::Heading, inline::plain_text, slug::slugify};

/// Readable text and anchor of one heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingText {
    /// Heading text with inline markup removed.
    pub plain: String,
    /// Slug of `plain`, used as the heading's `id`.
    pub anchor: String,
}

impl HeadingText {
    pub fn from_raw(raw: &str) -> Self {
        let plain = plain_text(raw);
        let anchor = slugify(&plain);
        Self { plain, anchor }
    }

    /// Whether this heading is a sources/references section.
    pub fn is_sources(&self) -> bool {
        self.plain.contains(Heading::SOURCES)
    }
}

/// One table-of-contents link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Heading level, 2 or 3.
    pub level: u8,
    pub text: String,
    pub anchor: String,
}

/// Result of the heading pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentOutline {
    /// Plain text of the first level-1 heading.
    pub title: Option<String>,
    pub toc: Vec<TocEntry>,
}

/// Scans every line for headings and builds the document outline.
///
/// Only level-2 and level-3 headings are listed, minus any whose text
/// contains "Sources". Level-1 headings after the first, and levels 4–6,
/// still render in the body but are not indexed.
pub fn index_headings<S: AsRef<str>>(lines: &[S]) -> DocumentOutline {
    let mut outline = DocumentOutline::default();

    for line in lines {
        let Some((level, raw)) = Heading::parse(line.as_ref().trim()) else {
            continue;
        };
        let heading = HeadingText::from_raw(raw);

        match level {
            1 if outline.title.is_none() => outline.title = Some(heading.plain),
            2 | 3 if !heading.is_sources() => outline.toc.push(TocEntry {
                level,
                text: heading.plain,
                anchor: heading.anchor,
            }),
            _ => {}
        }
    }

    log::debug!(
        "indexed {} toc entries, title: {:?}",
        outline.toc.len(),
        outline.title
    );
    outline
}
