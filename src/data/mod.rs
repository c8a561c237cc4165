//! Index data export for page templates.
//!
//! The index is written as plain JSON files that templates can read at
//! render time:
//!
//! | File | Contents |
//! |------|----------|
//! | `quick-start.json` | Quick start pages, ascending by `order` |
//! | `concepts.json` | Concept pages, in loader order |
//! | `navigation.json` | Previous/next links of every quick start page |
//!
//! Without an output directory the three files are printed as a single JSON
//! object keyed by file name.

mod export;
mod types;

pub use export::{data_bundle, write_data_files};
