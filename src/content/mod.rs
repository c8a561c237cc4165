//! Markdown-backed page collections and the lookup index over them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   folder id    ┌────────────────┐   Vec<Document<P>>   ┌──────────────┐
//! │ ContentConfig│ ─────────────► │ DocumentLoader │ ───────────────────► │ ContentIndex │
//! │ (docdex.toml)│  ~/pages/start │ Fs / Memory    │  front matter typed  │ (immutable)  │
//! └──────────────┘                └────────────────┘                      └──────────────┘
//! ```
//!
//! The index is built once and then only borrowed; every query is a read.

pub(crate) mod document;
mod error;
mod frontmatter;
mod index;
mod loader;
pub(crate) mod pages;

pub use index::ContentIndex;
pub use loader::FsLoader;
pub use pages::{ConceptPage, QuickStartPage};
