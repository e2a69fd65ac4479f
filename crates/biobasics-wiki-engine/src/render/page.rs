use std::fmt::{self, Display, Formatter};

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{
    blocks::render_body,
    meta::MetaPanel,
    sidebar::Sidebar,
    template::{BACK_TO_TOP, DISCUSSION, FONTS_HREF, SCRIPT, STYLES},
};
use crate::models::{DocumentMeta, PageOptions};
use crate::parsing::{ParsedDoc, headings::DocumentOutline, parse_document};

/// Converts wiki articles into complete HTML pages.
///
/// Holds only site-wide options; every conversion parses from scratch, so
/// one converter can be shared freely across threads and documents.
#[derive(Debug, Clone, Default)]
pub struct WikiConverter {
    options: PageOptions,
}

impl WikiConverter {
    pub fn new(options: PageOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    /// Converts article text and its metadata into a full page.
    ///
    /// Never fails: malformed markup degrades to paragraphs or literal
    /// lines, and empty input still yields a valid page.
    pub fn convert(&self, markdown: &str, meta: &DocumentMeta) -> String {
        let doc = parse_document(markdown);
        self.compose(&doc, meta)
    }

    /// Wraps an already parsed article in the page chrome.
    pub fn compose(&self, doc: &ParsedDoc, meta: &DocumentMeta) -> String {
        let page = Page {
            title: page_title(&doc.outline, meta, &self.options),
            body: render_body(&doc.blocks),
            doc,
            meta,
            options: &self.options,
        };
        page.to_string()
    }
}

/// The page `<title>`: the first level-1 heading, else a non-empty metadata
/// title, else the site name.
pub fn page_title<'a>(
    outline: &'a DocumentOutline,
    meta: &'a DocumentMeta,
    options: &'a PageOptions,
) -> &'a str {
    outline
        .title
        .as_deref()
        .or_else(|| Some(meta.title.trim()).filter(|t| !t.is_empty()))
        .unwrap_or(&options.site_name)
}

struct Page<'a> {
    title: &'a str,
    body: String,
    doc: &'a ParsedDoc,
    meta: &'a DocumentMeta,
    options: &'a PageOptions,
}

impl Display for Page<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link href="{fonts}" rel="stylesheet">
<style>
{STYLES}</style>
</head>
<body>
<div class="page">
"#,
            title = encode_text(self.title),
            fonts = encode_double_quoted_attribute(FONTS_HREF),
        )?;

        writeln!(
            f,
            "{}",
            Sidebar {
                toc: &self.doc.outline.toc,
                related: &self.meta.related_articles,
                options: self.options,
            }
        )?;

        f.write_str("<main class=\"container clearfix\">\n")?;
        writeln!(
            f,
            "{}",
            MetaPanel {
                meta: self.meta,
                options: self.options,
            }
        )?;
        f.write_str("<article class=\"article-body\">\n")?;
        if !self.body.is_empty() {
            writeln!(f, "{}", self.body)?;
        }
        f.write_str("</article>\n")?;
        writeln!(f, "{DISCUSSION}")?;
        f.write_str("</main>\n</div>\n")?;
        writeln!(f, "{BACK_TO_TOP}")?;
        write!(f, "<script>\n{SCRIPT}</script>\n</body>\n</html>\n")
    }
}
