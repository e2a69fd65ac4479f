//! Block-specific types that own their line syntax.
//!
//! The classifier and builder ask these types whether a line matches; they
//! never hardcode `#`, `![`, `- `, `|` or `---` themselves.

pub mod heading;
pub mod image;
pub mod list;
pub mod rule;
pub mod table;

pub use heading::Heading;
pub use image::{ImagePosition, ImageSyntax};
pub use list::ListItem;
pub use rule::Rule;
pub use table::TableRow;
