use std::sync::LazyLock;

use regex::Regex;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[([^\]]+)\]\(([^\)]+)\)").expect("image pattern is valid"));

/// Where an image floats within the article body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImagePosition {
    Left,
    Right,
    #[default]
    Center,
}

impl ImagePosition {
    /// Parses a position label; anything unrecognised falls back to centre.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "left" => Self::Left,
            "right" => Self::Right,
            _ => Self::Center,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

/// Positioned image line `![position|alt](url)` and its optional caption
/// line `*caption*` directly below it.
pub struct ImageSyntax;

impl ImageSyntax {
    pub const OPEN: &'static str = "![";
    pub const POSITION_SEPARATOR: char = '|';
    pub const CAPTION_MARKER: char = '*';

    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::OPEN)
    }

    /// Parses `![position|alt](url)` into `(position, alt, url)`.
    ///
    /// Without a `|` the whole bracket content is the alt text and the image
    /// is centred. Trailing text after the closing `)` is ignored.
    pub fn parse(line: &str) -> Option<(ImagePosition, &str, &str)> {
        let caps = IMAGE_RE.captures(line)?;
        let label = caps.get(1)?.as_str();
        let url = caps.get(2)?.as_str();

        let (position, alt) = match label.split_once(Self::POSITION_SEPARATOR) {
            Some((position, alt)) => (ImagePosition::from_label(position), alt.trim()),
            None => (ImagePosition::Center, label.trim()),
        };
        Some((position, alt, url))
    }

    /// Returns the caption text if `line` is an italic-only caption line.
    ///
    /// All surrounding stars are removed and the rest is kept as written;
    /// captions are not inline-rendered.
    pub fn caption(line: &str) -> Option<&str> {
        let line = line.trim();
        if line.starts_with(Self::CAPTION_MARKER) && !line.starts_with("**") {
            Some(line.trim_matches(Self::CAPTION_MARKER).trim())
        } else {
            None
        }
    }
}
