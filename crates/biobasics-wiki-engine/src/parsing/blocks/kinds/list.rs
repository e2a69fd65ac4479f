/// Bullet list item line `- text`.
pub struct ListItem;

impl ListItem {
    pub const MARKER: &'static str = "- ";

    /// The item text after the marker, or `None` for a non-item line.
    pub fn text(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER).map(str::trim)
    }
}
