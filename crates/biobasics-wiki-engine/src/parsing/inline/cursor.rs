/// A byte cursor over a single line of inline markup.
///
/// Delimiters in the dialect are all ASCII, so byte positions that land on a
/// delimiter are always valid `str` slice boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks `n` bytes ahead of the current position.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// The byte immediately before the current position.
    pub fn prev(&self) -> Option<u8> {
        self.i.checked_sub(1).and_then(|p| self.s.as_bytes().get(p).copied())
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat)
    }

    /// Advances past one whole character and returns it as a slice.
    pub fn bump_char(&mut self) -> &'a str {
        let rest = &self.s[self.i..];
        let len = rest.chars().next().map_or(0, char::len_utf8);
        self.i += len;
        &rest[..len]
    }

    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Length of an HTML tag (`<name ...>` or `</name>`) starting at the
    /// current position.
    ///
    /// Tags are opaque to the emphasis passes. A `<` that is not followed by
    /// a letter (optionally after `/`), or that meets another `<` before its
    /// `>`, is plain text, so comparisons like `BP < 120` stay markup.
    pub fn tag_len(&self) -> Option<usize> {
        if self.peek() != Some(b'<') {
            return None;
        }
        let name = match self.peek_at(1)? {
            b'/' => self.peek_at(2)?,
            b => b,
        };
        if !name.is_ascii_alphabetic() {
            return None;
        }
        let rest = &self.s[self.i + 1..];
        let end = rest.find(['<', '>'])?;
        (rest.as_bytes()[end] == b'>').then_some(end + 2)
    }

    /// Byte index of the next `needle` at or after `from`, skipping tags.
    pub fn find_outside_tags(&self, from: usize, needle: u8) -> Option<usize> {
        let mut probe = Cursor {
            s: self.s,
            i: from,
        };
        while !probe.eof() {
            if let Some(len) = probe.tag_len() {
                probe.bump_n(len);
                continue;
            }
            if probe.peek() == Some(needle) {
                return Some(probe.pos());
            }
            probe.bump_char();
        }
        None
    }
}
