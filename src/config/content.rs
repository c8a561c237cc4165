//! `[content]` section configuration.
//!
//! Locates the two page collections on disk.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[content]` section in docdex.toml - where pages live.
///
/// # Example
/// ```toml
/// [content]
/// root = "src"                       # what `~` in folder ids points at
/// pages = "pages"                    # hrefs are computed relative to this
/// quick_start = "~/pages/start"
/// concepts = "~/pages/concepts"
/// extensions = ["md"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Source root, relative to the site root.
    #[serde(default = "defaults::content::root")]
    #[educe(Default = defaults::content::root())]
    pub root: PathBuf,

    /// Pages directory, relative to the source root.
    #[serde(default = "defaults::content::pages")]
    #[educe(Default = defaults::content::pages())]
    pub pages: PathBuf,

    /// Folder id of the quick start collection.
    #[serde(default = "defaults::content::quick_start")]
    #[educe(Default = defaults::content::quick_start())]
    pub quick_start: String,

    /// Folder id of the concept collection.
    #[serde(default = "defaults::content::concepts")]
    #[educe(Default = defaults::content::concepts())]
    pub concepts: String,

    /// File extensions treated as pages.
    #[serde(default = "defaults::content::extensions")]
    #[educe(Default = defaults::content::extensions())]
    pub extensions: Vec<String>,
}
