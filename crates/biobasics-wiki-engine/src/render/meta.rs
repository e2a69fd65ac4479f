use std::fmt::{self, Display, Formatter};

use html_escape::{encode_double_quoted_attribute, encode_text};
use percent_encoding::utf8_percent_encode;

use super::URL_COMPONENT;
use crate::models::{DocumentMeta, PageOptions};

/// Formats a count with `,` between each group of three digits.
///
/// ```
/// use biobasics_wiki_engine::render::format_thousands;
///
/// assert_eq!(format_thousands(1234567), "1,234,567");
/// assert_eq!(format_thousands(999), "999");
/// ```
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// The strip above the article: view count, last viewed time and tags.
pub struct MetaPanel<'a> {
    pub meta: &'a DocumentMeta,
    pub options: &'a PageOptions,
}

impl Display for MetaPanel<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let views = self.meta.view_count;
        write!(
            f,
            "<div class=\"article-meta\">\n<span class=\"meta-views\">{} {}</span>",
            format_thousands(views),
            if views == 1 { "view" } else { "views" }
        )?;

        if let Some(last_viewed) = &self.meta.last_viewed_at {
            write!(
                f,
                "\n<span class=\"meta-last-viewed\">Last viewed {}</span>",
                encode_text(last_viewed)
            )?;
        }

        if !self.meta.tags.is_empty() {
            f.write_str("\n<div class=\"meta-tags\">")?;
            for tag in &self.meta.tags {
                write!(
                    f,
                    "<a class=\"tag-chip\" href=\"{}\">{}</a>",
                    encode_double_quoted_attribute(&tag_href(tag, self.options)),
                    encode_text(tag)
                )?;
            }
            f.write_str("</div>")?;
        }

        f.write_str("\n</div>")
    }
}

/// `tag_url_prefix` followed by the percent-encoded tag.
pub fn tag_href(tag: &str, options: &PageOptions) -> String {
    format!(
        "{}{}",
        options.tag_url_prefix,
        utf8_percent_encode(tag, URL_COMPONENT)
    )
}
