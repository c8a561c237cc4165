//! Content loading and lookup errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading documents or resolving lookups.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no concept page with id `{id}`")]
    MissingConcept { id: String },

    #[error("content folder `{0}` not found")]
    MissingFolder(PathBuf),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("front matter opened with `{0}` is never closed")]
    UnclosedFrontMatter(&'static str),

    #[error("YAML front matter parsing error")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML front matter parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse `{path}`")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<ContentError>,
    },
}

impl ContentError {
    /// Attach the offending file path to a parse failure.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Self::Parse {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

pub type Result<T, E = ContentError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_missing_concept_display() {
        let err = ContentError::MissingConcept { id: "ownership".into() };
        assert_eq!(format!("{err}"), "no concept page with id `ownership`");
    }

    #[test]
    fn test_io_error_display() {
        let err = ContentError::Io(
            PathBuf::from("pages/start/intro.md"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        let display = format!("{err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("intro.md"));
    }

    #[test]
    fn test_in_file_keeps_source() {
        let err = ContentError::UnclosedFrontMatter("---").in_file("a.md");
        assert_eq!(format!("{err}"), "failed to parse `a.md`");
        let source = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert!(source.contains("never closed"));
    }
}
