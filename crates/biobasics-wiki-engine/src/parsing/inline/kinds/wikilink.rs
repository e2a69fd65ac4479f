use std::sync::LazyLock;

use html_escape::encode_double_quoted_attribute;
use regex::Regex;

static WIKI_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("wiki-link pattern is valid"));

/// Internal wiki link `[[term]]`.
///
/// The bracketed term is used verbatim as both the visible text and the
/// fragment. It is not slugged, so `[[Heart Attack]]` links to
/// `#Heart Attack`, not to the `heart-attack` heading anchor. Only the
/// fragment is attribute-escaped.
pub struct WikiLink;

impl WikiLink {
    pub const CLASS: &'static str = "wiki-link";

    pub fn pattern() -> &'static Regex {
        &WIKI_LINK_RE
    }

    pub fn to_html(term: &str) -> String {
        let fragment = encode_double_quoted_attribute(term);
        format!(
            r##"<a href="#{fragment}" class="{}">{term}</a>"##,
            Self::CLASS
        )
    }
}
