//! Typed documents produced by a loader.

use std::ops::Deref;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

/// Front matter shapes that carry a page title.
pub trait PageProps {
    fn title(&self) -> &str;
}

/// A content file: typed front matter plus the raw markdown body.
///
/// Front matter fields are reachable directly through `Deref`, so
/// `page.order` reads the same as `page.props.order`.
#[derive(Debug, Clone, Serialize)]
pub struct Document<P> {
    /// Source file path as seen by the loader
    pub source: PathBuf,

    /// Site URL path (e.g., "/start/intro")
    pub href: String,

    /// Typed front matter
    pub props: P,

    /// Markdown body after the front matter block
    #[serde(skip)]
    pub body: String,
}

impl<P> Document<P> {
    pub fn new(source: impl Into<PathBuf>, href: impl Into<String>, props: P, body: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            href: href.into(),
            props,
            body: body.into(),
        }
    }
}

impl<P: PageProps> Document<P> {
    pub fn title(&self) -> &str {
        self.props.title()
    }
}

impl<P> Deref for Document<P> {
    type Target = P;

    fn deref(&self) -> &P {
        &self.props
    }
}

/// Derive the URL path of a content file.
///
/// # Path Mapping Examples
///
/// | root | path | href |
/// |------|------|------|
/// | `src/pages` | `src/pages/start/intro.md` | `/start/intro` |
/// | `src/pages` | `src/pages/start/index.md` | `/start` |
/// | `src/pages` | `src/pages/index.md` | `/` |
pub fn href_for(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let stem = relative.with_extension("");

    let mut parts: Vec<String> = stem
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.last().is_some_and(|last| last == "index") {
        parts.pop();
    }

    format!("/{}", parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Titled(&'static str);

    impl PageProps for Titled {
        fn title(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_href_for_nested_page() {
        let href = href_for(Path::new("src/pages"), Path::new("src/pages/start/intro.md"));
        assert_eq!(href, "/start/intro");
    }

    #[test]
    fn test_href_for_index_page() {
        let root = Path::new("src/pages");
        assert_eq!(href_for(root, Path::new("src/pages/start/index.md")), "/start");
        assert_eq!(href_for(root, Path::new("src/pages/index.md")), "/");
    }

    #[test]
    fn test_href_for_path_outside_root() {
        assert_eq!(href_for(Path::new("other"), Path::new("concepts/owner.md")), "/concepts/owner");
    }

    #[test]
    fn test_deref_and_title() {
        let doc = Document::new("a.md", "/a", Titled("Intro"), "");
        assert_eq!(doc.title(), "Intro");
        assert_eq!(doc.0, "Intro");
    }
}
