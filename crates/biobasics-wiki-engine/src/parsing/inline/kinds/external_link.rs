use std::sync::LazyLock;

use html_escape::encode_double_quoted_attribute;
use regex::Regex;

static EXTERNAL_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^\)]+)\)").expect("external-link pattern is valid")
});

/// External link `[text](url)`.
///
/// Opens in a new browsing context without giving the target a reference
/// back to this page.
pub struct ExternalLink;

impl ExternalLink {
    pub const CLASS: &'static str = "external-link";

    pub fn pattern() -> &'static Regex {
        &EXTERNAL_LINK_RE
    }

    pub fn to_html(text: &str, url: &str) -> String {
        let href = encode_double_quoted_attribute(url);
        format!(
            r#"<a href="{href}" class="{}" target="_blank" rel="noopener">{text}</a>"#,
            Self::CLASS
        )
    }
}
