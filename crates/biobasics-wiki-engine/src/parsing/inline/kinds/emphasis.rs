/// Strong emphasis `**text**`.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [u8; 2] = b"**";
    pub const OPEN_TAG: &'static str = "<strong>";
    pub const CLOSE_TAG: &'static str = "</strong>";
}

/// Emphasis `*text*`, where neither star touches another star.
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: u8 = b'*';
    pub const OPEN_TAG: &'static str = "<em>";
    pub const CLOSE_TAG: &'static str = "</em>";
}
