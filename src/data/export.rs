//! JSON rendering and writing of the index views.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use super::types::{ConceptEntry, NavigationEntry, QuickStartEntry};
use crate::content::ContentIndex;
use crate::log;

pub const QUICK_START_FILE: &str = "quick-start.json";
pub const CONCEPTS_FILE: &str = "concepts.json";
pub const NAVIGATION_FILE: &str = "navigation.json";

pub fn quick_start_entries(index: &ContentIndex) -> Vec<QuickStartEntry> {
    index.sorted_quick_start_pages().map(QuickStartEntry::from).collect()
}

pub fn concept_entries(index: &ContentIndex) -> Vec<ConceptEntry> {
    index.concept_pages().iter().map(ConceptEntry::from).collect()
}

/// One entry per quick start page, in reading order.
pub fn navigation_entries(index: &ContentIndex) -> Vec<NavigationEntry> {
    index
        .sorted_quick_start_pages()
        .map(|page| {
            let nav = index.pagination(page.order);
            NavigationEntry {
                order: page.order,
                href: page.href.clone(),
                previous: nav.previous.map(Into::into),
                next: nav.next.map(Into::into),
            }
        })
        .collect()
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Render every data file as `(file name, json)`.
pub fn data_files(index: &ContentIndex, pretty: bool) -> Result<Vec<(&'static str, String)>> {
    Ok(vec![
        (QUICK_START_FILE, to_json(&quick_start_entries(index), pretty)?),
        (CONCEPTS_FILE, to_json(&concept_entries(index), pretty)?),
        (NAVIGATION_FILE, to_json(&navigation_entries(index), pretty)?),
    ])
}

/// Render all data files as one JSON object keyed by file name.
pub fn data_bundle(index: &ContentIndex, pretty: bool) -> Result<String> {
    let mut bundle = serde_json::Map::new();
    bundle.insert(QUICK_START_FILE.into(), serde_json::to_value(quick_start_entries(index))?);
    bundle.insert(CONCEPTS_FILE.into(), serde_json::to_value(concept_entries(index))?);
    bundle.insert(NAVIGATION_FILE.into(), serde_json::to_value(navigation_entries(index))?);
    Ok(to_json(&bundle, pretty)?)
}

/// Write every data file into `dir`, creating it if needed.
pub fn write_data_files(index: &ContentIndex, dir: &Path, pretty: bool) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("[Export] Failed to create {}", dir.display()))?;

    data_files(index, pretty)?
        .into_iter()
        .map(|(name, json)| {
            let path = dir.join(name);
            fs::write(&path, json).with_context(|| format!("[Export] Failed to write {}", path.display()))?;
            log!("export"; "{}", path.display());
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::document::Document;
    use crate::content::pages::{ConceptProps, QuickStartProps};
    use serde_json::Value;
    use tempfile::TempDir;

    fn index() -> ContentIndex {
        let qs = |title: &str, order| {
            Document::new(
                format!("{title}.md"),
                format!("/start/{}", title.to_lowercase()),
                QuickStartProps { title: title.into(), order },
                "",
            )
        };
        let concept = Document::new(
            "owner.md",
            "/concepts/owner",
            ConceptProps {
                title: "Ownership".into(),
                id: "ownership".into(),
                read_more: vec!["https://example.com/ownership".into()],
                related: vec![],
            },
            "",
        );
        ContentIndex::new(vec![qs("Run", 3), qs("Intro", 1), qs("Setup", 2)], vec![concept])
    }

    #[test]
    fn test_quick_start_entries_sorted() {
        let orders: Vec<_> = quick_start_entries(&index()).iter().map(|e| e.order).collect();
        assert_eq!(orders, [1, 2, 3]);
    }

    #[test]
    fn test_navigation_entries() {
        let nav = navigation_entries(&index());
        assert_eq!(nav.len(), 3);
        assert!(nav[0].previous.is_none());
        assert_eq!(nav[0].next.as_ref().map(|l| l.title.as_str()), Some("Setup"));
        assert_eq!(nav[1].previous.as_ref().map(|l| l.href.as_str()), Some("/start/intro"));
        assert!(nav[2].next.is_none());
    }

    #[test]
    fn test_concepts_json_uses_camel_case() {
        let files = data_files(&index(), false).unwrap();
        let (name, json) = &files[1];
        assert_eq!(*name, CONCEPTS_FILE);

        let value: Value = serde_json::from_str(json).unwrap();
        assert_eq!(value[0]["id"], "ownership");
        assert_eq!(value[0]["readMore"][0], "https://example.com/ownership");
        assert!(value[0].get("related").is_none());
    }

    #[test]
    fn test_navigation_json_skips_missing_neighbours() {
        let files = data_files(&index(), true).unwrap();
        let value: Value = serde_json::from_str(&files[2].1).unwrap();
        assert!(value[0].get("previous").is_none());
        assert_eq!(value[0]["next"]["href"], "/start/setup");
    }

    #[test]
    fn test_data_bundle_is_one_json_document() {
        for pretty in [false, true] {
            let value: Value = serde_json::from_str(&data_bundle(&index(), pretty).unwrap()).unwrap();
            assert_eq!(value[QUICK_START_FILE][0]["title"], "Intro");
            assert_eq!(value[CONCEPTS_FILE][0]["id"], "ownership");
            assert_eq!(value[NAVIGATION_FILE][2]["previous"]["title"], "Setup");
        }
    }

    #[test]
    fn test_write_data_files() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("public/_data");
        let written = write_data_files(&index(), &out, true).unwrap();

        assert_eq!(written.len(), 3);
        let json = fs::read_to_string(out.join(QUICK_START_FILE)).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["title"], "Intro");
        assert_eq!(value[2]["order"], 3);
    }
}
