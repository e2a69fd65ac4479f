/// Pipe-delimited table row `| a | b |`.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';
    pub const SEPARATOR_PREFIX: &'static str = "|--";

    /// A row starts with a pipe and has at least one more pipe after it.
    pub fn is_row(line: &str) -> bool {
        line.strip_prefix(Self::PIPE)
            .is_some_and(|rest| rest.contains(Self::PIPE))
    }

    /// Header/body separator line such as `|---|---|`.
    pub fn is_separator(line: &str) -> bool {
        line.trim().starts_with(Self::SEPARATOR_PREFIX)
    }

    /// Splits a row on `|`, dropping the first and last pieces.
    ///
    /// The pieces outside the boundary pipes are dropped unconditionally, so
    /// a row without a closing pipe loses its last cell.
    pub fn cells(line: &str) -> Vec<&str> {
        let pieces: Vec<&str> = line.split(Self::PIPE).collect();
        if pieces.len() < 2 {
            return Vec::new();
        }
        pieces[1..pieces.len() - 1]
            .iter()
            .map(|cell| cell.trim())
            .collect()
    }
}
