//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    pub fn root() -> PathBuf {
        "src".into()
    }

    pub fn pages() -> PathBuf {
        "pages".into()
    }

    pub fn quick_start() -> String {
        "~/pages/start".into()
    }

    pub fn concepts() -> String {
        "~/pages/concepts".into()
    }

    pub fn extensions() -> Vec<String> {
        vec!["md".into()]
    }
}
