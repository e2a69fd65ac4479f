use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading pattern is valid"));

/// ATX-style heading line: 1–6 `#`, whitespace, then the heading text.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    /// Level-2 headings containing this text get the sources styling and
    /// are left out of the table of contents.
    pub const SOURCES: &'static str = "Sources";
    pub const SOURCES_CLASS: &'static str = "sources-header";

    /// Whether the line claims to be a heading. It may still fail to parse.
    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Splits a trimmed heading line into its level and raw (marked-up) text.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let caps = HEADING_RE.captures(line)?;
        let level = caps.get(1)?.as_str().len() as u8;
        let text = caps.get(2)?.as_str();
        Some((level, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Heart Attacks", Some((1, "Heart Attacks")))]
    #[case("### Risk **factors**", Some((3, "Risk **factors**")))]
    #[case("######  Deep", Some((6, "Deep")))]
    #[case("####### Too deep", None)]
    #[case("#hashtag", None)]
    #[case("#", None)]
    fn parse_heading_lines(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(Heading::parse(line), expected);
    }
}
