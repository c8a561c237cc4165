//! Front matter shapes of the two page collections.

use serde::{Deserialize, Serialize};

use super::document::{Document, PageProps};

/// Front matter of a page in the ordered onboarding sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickStartProps {
    pub title: String,

    /// Position in the sequence; compared numerically.
    pub order: i64,
}

/// Front matter of a reference page addressable by a stable id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptProps {
    pub title: String,

    pub id: String,

    /// External links for further reading
    #[serde(rename = "readMore", default, skip_serializing_if = "Vec::is_empty")]
    pub read_more: Vec<String>,

    /// Ids of related concept pages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<String>,
}

impl PageProps for QuickStartProps {
    fn title(&self) -> &str {
        &self.title
    }
}

impl PageProps for ConceptProps {
    fn title(&self) -> &str {
        &self.title
    }
}

pub type QuickStartPage = Document<QuickStartProps>;
pub type ConceptPage = Document<ConceptProps>;
