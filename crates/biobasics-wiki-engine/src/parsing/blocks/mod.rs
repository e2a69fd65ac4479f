//! # Block Parsing
//!
//! Two-phase block parsing over a flat line sequence.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line is classified
//!    into a `LineClass` (blank, rule, heading, image, list item, table row,
//!    text) from local facts only
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` threads the open
//!    block (`none`, in-list, in-table) through a single forward scan and
//!    emits `Block`s as blocks open and close
//!
//! ## Modules
//!
//! - **`types`**: `Block` and its payload structs
//! - **`kinds`**: line syntax per block kind (Heading, ImageSyntax, ListItem,
//!   TableRow, Rule)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` per line
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - No nesting: at most one list or table is open at a time
//! - The only lookahead is one line, for image captions and table separators
//! - Malformed input degrades to paragraphs or literal lines, never errors

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::{BlockBuilder, Consumed};
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{Block, Header, Image, Table};

/// Runs the classifier and block builder over a line sequence.
pub fn build_blocks<S: AsRef<str>>(lines: &[S]) -> Vec<Block> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    let mut i = 0;
    while i < lines.len() {
        let lc = classifier.classify(lines[i].as_ref());
        let next = lines.get(i + 1).map(AsRef::as_ref);
        i += builder.push(lc, next).count();
    }

    builder.finish()
}
