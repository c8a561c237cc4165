//! Data types for exported JSON files.
//!
//! These types are serialized to JSON and read by page templates.

use serde::Serialize;

use crate::content::{ConceptPage, QuickStartPage};

/// A quick start page, exposed in `quick-start.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickStartEntry {
    /// Page URL path (e.g., "/start/intro")
    pub href: String,

    pub title: String,

    pub order: i64,
}

/// A concept page, exposed in `concepts.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptEntry {
    pub href: String,

    pub title: String,

    pub id: String,

    /// Further reading links
    #[serde(rename = "readMore", skip_serializing_if = "Vec::is_empty")]
    pub read_more: Vec<String>,

    /// Related concept ids
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<String>,
}

/// Minimal reference to a neighbouring page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLink {
    pub href: String,
    pub title: String,
}

/// Footer navigation of one quick start page, exposed in `navigation.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationEntry {
    pub order: i64,

    pub href: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PageLink>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
}

impl From<&QuickStartPage> for QuickStartEntry {
    fn from(page: &QuickStartPage) -> Self {
        Self {
            href: page.href.clone(),
            title: page.title.clone(),
            order: page.order,
        }
    }
}

impl From<&ConceptPage> for ConceptEntry {
    fn from(page: &ConceptPage) -> Self {
        Self {
            href: page.href.clone(),
            title: page.title.clone(),
            id: page.id.clone(),
            read_more: page.read_more.clone(),
            related: page.related.clone(),
        }
    }
}

impl From<&QuickStartPage> for PageLink {
    fn from(page: &QuickStartPage) -> Self {
        Self {
            href: page.href.clone(),
            title: page.title.clone(),
        }
    }
}
