//! `[export]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[export]` section in docdex.toml - JSON data files for templates.
///
/// # Example
/// ```toml
/// [export]
/// output = "public/_data"
/// pretty = false
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Directory the JSON files are written to; stdout when unset.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::Path;

    #[test]
    fn test_export_config_defaults() {
        let config = SiteConfig::default();
        assert!(config.export.pretty);
        assert!(config.export.output.is_none());
    }

    #[test]
    fn test_export_config() {
        let config = r#"
            [export]
            output = "public/_data"
            pretty = false
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.export.output.as_deref(), Some(Path::new("public/_data")));
        assert!(!config.export.pretty);
    }
}
