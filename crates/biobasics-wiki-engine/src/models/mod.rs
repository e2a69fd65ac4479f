pub mod document_meta;
pub mod markdown_file;
pub mod page_options;

pub use document_meta::{DocumentMeta, RelatedArticle};
pub use markdown_file::MarkdownFile;
pub use page_options::PageOptions;
