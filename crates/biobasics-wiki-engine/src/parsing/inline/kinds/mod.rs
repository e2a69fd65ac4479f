//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and output markup.
//!
//! ## Types
//!
//! - **`WikiLink`**: `[[term]]`, rendered as an in-page link to `#term`
//! - **`ExternalLink`**: `[text](url)`, opened in a new browsing context
//! - **`Strong`** / **`Emphasis`**: `**text**` and `*text*`
//!
//! ## Design Principle
//!
//! All delimiter constants and patterns live here, not scattered in the
//! renderer. The renderer only decides the order the passes run in.

pub mod emphasis;
pub mod external_link;
pub mod wikilink;

pub use emphasis::{Emphasis, Strong};
pub use external_link::ExternalLink;
pub use wikilink::WikiLink;
