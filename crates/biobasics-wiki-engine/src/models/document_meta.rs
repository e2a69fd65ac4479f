use serde::{Deserialize, Serialize};

/// Per-article data supplied by the wiki, not derived from the markdown.
///
/// Usually read from a `<article>.meta.toml` sidecar. `title` is required
/// there; every other field may be left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub title: String,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub last_viewed_at: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub related_articles: Vec<RelatedArticle>,
}

/// A link to another wiki article shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedArticle {
    pub title: String,
    pub slug: String,
    pub category: String,
}

impl DocumentMeta {
    /// Metadata with only a title, for articles without a sidecar.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
