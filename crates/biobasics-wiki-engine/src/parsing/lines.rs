/// Splits article text into trimmed lines.
///
/// The whole text is trimmed first, so leading and trailing blank lines
/// never reach the classifier. Both `\n` and `\r\n` endings are accepted.
pub fn article_lines(text: &str) -> Vec<&str> {
    let text = text.trim();
    if text.is_empty() {
        return vec![];
    }
    text.lines().map(str::trim).collect()
}
