//! Site configuration management for `docdex.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[content]` | Source root, collection folders, extensions   |
//! | `[export]`  | JSON data export (output directory, format)    |
//!
//! # Example
//!
//! ```toml
//! [content]
//! root = "src"
//! quick_start = "~/pages/start"
//! concepts = "~/pages/concepts"
//!
//! [export]
//! output = "public/_data"
//! ```
//!
//! Every field has a default, and a site without `docdex.toml` runs on
//! defaults alone.

mod content;
pub mod defaults;
mod error;
mod export;

pub use content::ContentConfig;
use error::ConfigError;
use export::ExportConfig;

use crate::cli::{Cli, Commands};
use crate::content::FsLoader;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing docdex.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site root directory (set from CLI)
    #[serde(skip)]
    #[educe(Default = PathBuf::from("./"))]
    pub root: PathBuf,

    /// Page collection settings
    #[serde(default)]
    pub content: ContentConfig,

    /// JSON export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load `docdex.toml` from the CLI site root, falling back to defaults
    /// when the file doesn't exist.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Update configuration with CLI arguments and resolve all paths
    /// against the site root.
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli.root.clone().unwrap_or_else(|| self.root.clone());
        let root = Self::normalize_path(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));

        Self::update_option(&mut self.content.root, cli.source.as_ref());
        self.content.root = Self::resolve(&root, &self.content.root);
        self.content.pages = Self::resolve(&self.content.root, &self.content.pages);

        if let Commands::Export { output, pretty } = &cli.command {
            if let Some(output) = output {
                self.export.output = Some(output.clone());
            }
            Self::update_option(&mut self.export.pretty, pretty.as_ref());
        }
        if let Some(output) = &self.export.output {
            self.export.output = Some(Self::resolve(&root, output));
        }

        self.root = root;
    }

    /// Filesystem loader for the configured source root.
    pub fn loader(&self) -> FsLoader {
        FsLoader::new(
            &self.content.root,
            &self.content.pages,
            self.content.extensions.clone(),
        )
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Expand `~` to the home directory and join relative paths onto `base`.
    fn resolve(base: &Path, path: &Path) -> PathBuf {
        let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
        if expanded.is_relative() {
            Self::normalize_path(&base.join(expanded))
        } else {
            Self::normalize_path(&expanded)
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before any content is loaded
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            bail!(ConfigError::Validation(format!(
                "site root `{}` is not a directory",
                self.root.display()
            )));
        }

        if !self.content.root.is_dir() {
            bail!(ConfigError::Validation(format!(
                "[content.root] `{}` is not a directory",
                self.content.root.display()
            )));
        }

        if self.content.extensions.is_empty() {
            bail!(ConfigError::Validation(
                "[content.extensions] must have at least one element".into()
            ));
        }

        if let Some(ext) = self.content.extensions.iter().find(|e| e.is_empty() || e.starts_with('.')) {
            bail!(ConfigError::Validation(format!(
                "[content.extensions] entry `{ext}` must be a bare extension like `md`"
            )));
        }

        for (field, folder) in [
            ("[content.quick_start]", &self.content.quick_start),
            ("[content.concepts]", &self.content.concepts),
        ] {
            if folder.trim().is_empty() {
                bail!(ConfigError::Validation(format!("{field} must not be empty")));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
