//! # Parsing
//!
//! Line-level and inline scanning primitives used by the section extractor
//! and the link renderer. Nothing here builds a document tree: headings are
//! recognised one line at a time and wikilinks by a flat scan.
//!
//! ## Modules
//!
//! - **`span`**: `Span` byte ranges into the scanned text
//! - **`lines`**: `lines_with_spans()` zero-copy line iteration
//! - **`heading`**: `AtxHeading` line recognition
//! - **`wikilink`**: `scan_wikilinks()` and the `[[`/`]]`/`|` delimiters

pub mod heading;
pub mod lines;
pub mod span;
pub mod wikilink;

pub use heading::AtxHeading;
pub use lines::{LineRef, lines_with_spans};
pub use span::Span;
pub use wikilink::{WikiLink, WikiLinkMatch, scan_wikilinks};
