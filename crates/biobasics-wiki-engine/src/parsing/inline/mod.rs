//! # Inline Rendering
//!
//! Converts the inline markup of one line (or one table cell) into HTML.
//!
//! ## Pass Order
//!
//! The passes run in a fixed order, each over the whole line:
//!
//! 1. wiki-links `[[term]]`
//! 2. external links `[text](url)`
//! 3. strong `**text**`
//! 4. emphasis `*text*`
//!
//! Links go first so the stars inside their targets are already locked away
//! in tag attributes; strong goes before emphasis so `**x**` never reads as
//! two nested emphasis spans.
//!
//! ## Raw Zones
//!
//! HTML tags (`<...>`) are opaque to the strong/emphasis passes. That keeps
//! link targets intact and makes rendering a line twice a no-op.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiters, patterns and output markup per construct
//! - **`cursor`**: byte cursor used by the strong/emphasis scanners
//! - **`render`**: `render_inline()` and `plain_text()` entry points

pub mod cursor;
pub mod kinds;
pub mod render;

pub use render::{plain_text, render_inline};
