use std::fmt::{self, Display, Formatter};

use html_escape::{encode_double_quoted_attribute, encode_text};
use percent_encoding::utf8_percent_encode;

use super::URL_COMPONENT;
use crate::models::{PageOptions, RelatedArticle};
use crate::parsing::headings::TocEntry;

/// A top-level TOC entry and the level-3 entries listed under it.
#[derive(Debug, PartialEq, Eq)]
pub struct TocSection<'a> {
    pub entry: &'a TocEntry,
    pub children: Vec<&'a TocEntry>,
}

/// Groups a flat TOC by level.
///
/// Level-3 entries nest under the closest preceding level-2 entry. Level-3
/// entries that come before any level-2 entry stay at the top level.
pub fn nest_toc(toc: &[TocEntry]) -> Vec<TocSection<'_>> {
    let mut sections: Vec<TocSection<'_>> = Vec::new();
    let mut under_level_two = false;

    for entry in toc {
        if entry.level > 2
            && under_level_two
            && let Some(section) = sections.last_mut()
        {
            section.children.push(entry);
            continue;
        }
        under_level_two = entry.level == 2;
        sections.push(TocSection {
            entry,
            children: Vec::new(),
        });
    }

    sections
}

/// The navigation column: table of contents and related articles.
///
/// Panels with nothing to list are left out.
pub struct Sidebar<'a> {
    pub toc: &'a [TocEntry],
    pub related: &'a [RelatedArticle],
    pub options: &'a PageOptions,
}

impl Display for Sidebar<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("<aside class=\"sidebar\">")?;

        if !self.toc.is_empty() {
            f.write_str(
                "\n<nav class=\"sidebar-panel toc\">\n<h4>Contents</h4>\n<ul class=\"toc-list\">",
            )?;
            for section in nest_toc(self.toc) {
                write!(f, "\n<li class=\"toc-level-{}\">", section.entry.level)?;
                write_toc_link(f, section.entry)?;
                if !section.children.is_empty() {
                    f.write_str("\n<ul class=\"toc-sublist\">")?;
                    for child in section.children {
                        write!(f, "\n<li class=\"toc-level-{}\">", child.level)?;
                        write_toc_link(f, child)?;
                        f.write_str("</li>")?;
                    }
                    f.write_str("\n</ul>")?;
                }
                f.write_str("</li>")?;
            }
            f.write_str("\n</ul>\n</nav>")?;
        }

        if !self.related.is_empty() {
            f.write_str(
                "\n<section class=\"sidebar-panel related\">\n<h4>Related Articles</h4>\n<ul class=\"related-list\">",
            )?;
            for article in self.related {
                write!(
                    f,
                    "\n<li><a href=\"{}\">{}</a><span class=\"related-category\">{}</span></li>",
                    encode_double_quoted_attribute(&related_href(article, self.options)),
                    encode_text(&article.title),
                    encode_text(&article.category),
                )?;
            }
            f.write_str("\n</ul>\n</section>")?;
        }

        f.write_str("\n</aside>")
    }
}

fn write_toc_link(f: &mut Formatter<'_>, entry: &TocEntry) -> fmt::Result {
    write!(
        f,
        "<a href=\"#{}\">{}</a>",
        entry.anchor,
        encode_text(&entry.text)
    )
}

/// `article_url_prefix` followed by `category/slug`, each segment
/// percent-encoded.
pub fn related_href(article: &RelatedArticle, options: &PageOptions) -> String {
    format!(
        "{}{}/{}",
        options.article_url_prefix,
        utf8_percent_encode(&article.category, URL_COMPONENT),
        utf8_percent_encode(&article.slug, URL_COMPONENT),
    )
}
