use relative_path::{RelativePath, RelativePathBuf};

/// A wiki article source file, addressed relative to the wiki root.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl MarkdownFile {
    pub const META_SUFFIX: &'static str = ".meta.toml";

    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
        }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name without the `.md` extension.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Where the converted page goes, mirroring the source layout.
    pub fn html_path(&self) -> RelativePathBuf {
        self.relative_path.with_extension("html")
    }

    /// The metadata sidecar next to the article: `heart.md` → `heart.meta.toml`.
    pub fn meta_path(&self) -> RelativePathBuf {
        let file_name = format!("{}{}", self.display_name, Self::META_SUFFIX);
        match self.relative_path.parent() {
            Some(parent) => parent.join(file_name),
            None => RelativePathBuf::from(file_name),
        }
    }

    fn extract_display_name(path: &RelativePath) -> String {
        path.file_name()
            .map(|name| name.strip_suffix(".md").unwrap_or(name))
            .unwrap_or("Untitled")
            .to_string()
    }
}

impl From<RelativePathBuf> for MarkdownFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for MarkdownFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
