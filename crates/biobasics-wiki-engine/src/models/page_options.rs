/// Site-wide settings that shape the composed page but not the article body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Page title when the article has neither a level-1 heading nor a
    /// metadata title.
    pub site_name: String,
    /// Prefix of a tag chip link; the percent-encoded tag is appended.
    pub tag_url_prefix: String,
    /// Prefix of a related-article link; `category/slug` is appended.
    pub article_url_prefix: String,
}

impl PageOptions {
    pub const DEFAULT_SITE_NAME: &'static str = "BioBasics Medical Wiki";
    pub const DEFAULT_TAG_URL_PREFIX: &'static str = "/wiki?tag=";
    pub const DEFAULT_ARTICLE_URL_PREFIX: &'static str = "/wiki/";
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            site_name: Self::DEFAULT_SITE_NAME.to_string(),
            tag_url_prefix: Self::DEFAULT_TAG_URL_PREFIX.to_string(),
            article_url_prefix: Self::DEFAULT_ARTICLE_URL_PREFIX.to_string(),
        }
    }
}
