//! # HTML Rendering
//!
//! Turns a [`ParsedDoc`](crate::parsing::ParsedDoc) plus its metadata into
//! a complete page. Each piece is a [`std::fmt::Display`] wrapper so the
//! page is written in one pass into a single buffer.
//!
//! Inline text inside blocks is already HTML by the time it gets here and is
//! written as-is. Everything that comes from metadata or raw source
//! attributes (image URLs, alt text, tags, titles) is escaped.

pub mod blocks;
pub mod meta;
pub mod page;
pub mod sidebar;
mod template;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

pub use blocks::{BlockHtml, render_body};
pub use meta::{MetaPanel, format_thousands};
pub use page::{WikiConverter, page_title};
pub use sidebar::{Sidebar, TocSection, nest_toc};

/// Characters left unescaped in a URL component (RFC 3986 unreserved).
pub(crate) const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');
