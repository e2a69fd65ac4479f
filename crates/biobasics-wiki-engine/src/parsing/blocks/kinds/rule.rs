/// Horizontal rule line, exactly `---`.
pub struct Rule;

impl Rule {
    pub const MARKER: &'static str = "---";

    pub fn is_rule(line: &str) -> bool {
        line == Self::MARKER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_marker_is_a_rule() {
        assert!(Rule::is_rule("---"));
        assert!(!Rule::is_rule("----"));
        assert!(!Rule::is_rule("--- x"));
    }
}
