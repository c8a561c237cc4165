//! Document loaders.
//!
//! The index never touches the filesystem itself; it asks a [`DocumentLoader`]
//! for the documents of a logical folder such as `~/pages/start`.
//!
//! - [`FsLoader`] walks a folder on disk and parses every markdown file.
//! - `MemoryLoader` serves fixture files to tests.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::de::DeserializeOwned;
use walkdir::WalkDir;

use super::document::{Document, href_for};
use super::error::{ContentError, Result};
use super::frontmatter;
use crate::log;

/// Capability that turns a logical folder id into its ordered documents.
pub trait DocumentLoader {
    fn load_documents<P>(&self, folder: &str) -> Result<Vec<Document<P>>>
    where
        P: DeserializeOwned + Send;
}

/// Resolve a folder id against the source root.
///
/// `~` is the source root alias used by folder ids, not the home directory:
/// `~/pages/start` → `<root>/pages/start`. Relative ids are also taken from
/// the root; absolute paths are used as is.
pub fn resolve_folder(root: &Path, folder: &str) -> PathBuf {
    match folder.strip_prefix('~') {
        Some(rest) if rest.is_empty() => root.to_path_buf(),
        Some(rest) if rest.starts_with('/') => root.join(rest.trim_start_matches('/')),
        _ if Path::new(folder).is_absolute() => PathBuf::from(folder),
        _ => root.join(folder),
    }
}

// ============================================================================
// Filesystem Loader
// ============================================================================

/// Loads markdown documents from disk.
#[derive(Debug, Clone)]
pub struct FsLoader {
    /// Source root that `~` resolves to
    root: PathBuf,
    /// Directory hrefs are computed against
    pages: PathBuf,
    /// Accepted file extensions, without the dot
    extensions: Vec<String>,
}

impl FsLoader {
    pub fn new(root: impl Into<PathBuf>, pages: impl Into<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            root: root.into(),
            pages: pages.into(),
            extensions,
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Collect matching files below `dir`, sorted for a stable loader order.
    fn collect_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir) {
            let entry = entry.map_err(|err| ContentError::Io(dir.to_path_buf(), err.into()))?;
            if entry.file_type().is_file() && self.accepts(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }

    fn load_file<P: DeserializeOwned>(&self, path: &Path) -> Result<Document<P>> {
        let text = fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
        let (props, body) = frontmatter::parse(&text).map_err(|err| err.in_file(path))?;
        Ok(Document::new(path, href_for(self.href_base(path), path), props, body))
    }

    /// Pages directory when the file lives under it, source root otherwise.
    fn href_base(&self, path: &Path) -> &Path {
        if path.starts_with(&self.pages) {
            &self.pages
        } else {
            &self.root
        }
    }
}

impl DocumentLoader for FsLoader {
    fn load_documents<P>(&self, folder: &str) -> Result<Vec<Document<P>>>
    where
        P: DeserializeOwned + Send,
    {
        let dir = resolve_folder(&self.root, folder);
        if !dir.is_dir() {
            return Err(ContentError::MissingFolder(dir));
        }

        let files = self.collect_files(&dir)?;
        let documents = files
            .par_iter()
            .map(|path| self.load_file(path))
            .collect::<Result<Vec<_>>>()?;

        log!("load"; "{} documents from {}", documents.len(), dir.display());
        Ok(documents)
    }
}

// ============================================================================
// In-memory Loader
// ============================================================================

/// Serves raw page text from memory, keyed by folder id.
///
/// Documents come back in insertion order, which lets tests control the
/// loader order exactly.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryLoader {
    folders: std::collections::HashMap<String, Vec<(PathBuf, String)>>,
}

#[cfg(test)]
impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to a folder, creating the folder on first use.
    pub fn with_file(mut self, folder: &str, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.folders
            .entry(folder.to_owned())
            .or_default()
            .push((path.into(), text.into()));
        self
    }

    /// Register a folder with no files.
    pub fn with_folder(mut self, folder: &str) -> Self {
        self.folders.entry(folder.to_owned()).or_default();
        self
    }
}

#[cfg(test)]
impl DocumentLoader for MemoryLoader {
    fn load_documents<P>(&self, folder: &str) -> Result<Vec<Document<P>>>
    where
        P: DeserializeOwned + Send,
    {
        let files = self
            .folders
            .get(folder)
            .ok_or_else(|| ContentError::MissingFolder(PathBuf::from(folder)))?;

        files
            .iter()
            .map(|(path, text)| {
                let (props, body) = frontmatter::parse(text).map_err(|err| err.in_file(path))?;
                Ok(Document::new(path, href_for(Path::new(""), path), props, body))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::pages::{ConceptProps, QuickStartProps};
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, text: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    fn page(title: &str, order: i64) -> String {
        format!("---\ntitle: {title}\norder: {order}\n---\n# {title}\n")
    }

    #[test]
    fn test_resolve_folder_alias() {
        let root = Path::new("/site/src");
        assert_eq!(resolve_folder(root, "~/pages/start"), PathBuf::from("/site/src/pages/start"));
        assert_eq!(resolve_folder(root, "~"), PathBuf::from("/site/src"));
        assert_eq!(resolve_folder(root, "pages/concepts"), PathBuf::from("/site/src/pages/concepts"));
        assert_eq!(resolve_folder(root, "/abs/dir"), PathBuf::from("/abs/dir"));
    }

    #[test]
    fn test_resolve_folder_tilde_prefixed_name() {
        // `~drafts` is a plain relative name, not the alias
        let root = Path::new("/site/src");
        assert_eq!(resolve_folder(root, "~drafts"), PathBuf::from("/site/src/~drafts"));
    }

    #[test]
    fn test_fs_loader_sorted_paths_and_extensions() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path();
        write(src, "pages/start/b-setup.md", &page("Setup", 2));
        write(src, "pages/start/a-intro.md", &page("Intro", 1));
        write(src, "pages/start/nested/run.md", &page("Run", 3));
        write(src, "pages/start/notes.txt", "ignored");

        let loader = FsLoader::new(src, src.join("pages"), vec!["md".into()]);
        let docs = loader.load_documents::<QuickStartProps>("~/pages/start").unwrap();

        let titles: Vec<_> = docs.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, ["Intro", "Setup", "Run"]);
        assert_eq!(docs[0].href, "/start/a-intro");
        assert_eq!(docs[2].href, "/start/nested/run");
        assert_eq!(docs[0].body, "# Intro\n");
    }

    #[test]
    fn test_fs_loader_href_outside_pages_dir() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path();
        write(src, "reference/ownership.md", "---\ntitle: Ownership\nid: ownership\n---\n");

        let loader = FsLoader::new(src, src.join("pages"), vec!["md".into()]);
        let docs = loader.load_documents::<ConceptProps>("~/reference").unwrap();
        assert_eq!(docs[0].href, "/reference/ownership");
    }

    #[test]
    fn test_fs_loader_extension_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "docs/a.MD", &page("A", 1));

        let loader = FsLoader::new(tmp.path(), tmp.path(), vec!["md".into()]);
        let docs = loader.load_documents::<QuickStartProps>("docs").unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn test_fs_loader_missing_folder() {
        let tmp = TempDir::new().unwrap();
        let loader = FsLoader::new(tmp.path(), tmp.path(), vec!["md".into()]);
        let err = loader.load_documents::<QuickStartProps>("~/pages/start").unwrap_err();
        assert!(matches!(err, ContentError::MissingFolder(_)));
    }

    #[test]
    fn test_fs_loader_reports_bad_file() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "concepts/broken.md", "---\ntitle: Broken\n");

        let loader = FsLoader::new(tmp.path(), tmp.path(), vec!["md".into()]);
        let err = loader.load_documents::<ConceptProps>("concepts").unwrap_err();
        match err {
            ContentError::Parse { path, .. } => assert!(path.ends_with("concepts/broken.md")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_memory_loader_keeps_insertion_order() {
        let loader = MemoryLoader::new()
            .with_file("~/pages/start", "start/run.md", page("Run", 3))
            .with_file("~/pages/start", "start/intro.md", page("Intro", 1));

        let docs = loader.load_documents::<QuickStartProps>("~/pages/start").unwrap();
        assert_eq!(docs[0].title, "Run");
        assert_eq!(docs[1].href, "/start/intro");
    }

    #[test]
    fn test_memory_loader_empty_and_missing_folder() {
        let loader = MemoryLoader::new().with_folder("~/pages/concepts");
        assert!(loader.load_documents::<ConceptProps>("~/pages/concepts").unwrap().is_empty());
        assert!(loader.load_documents::<ConceptProps>("~/pages/start").is_err());
    }
}
