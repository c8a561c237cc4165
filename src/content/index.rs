//! The content index: ordered and id-addressed views over the two page
//! collections.
//!
//! # Lookups
//!
//! | Query | Over | Miss |
//! |-------|------|------|
//! | `sorted_quick_start_pages()` | quick start, by `order` | - |
//! | `previous(order)` / `next(order)` | quick start, loader order | `None` |
//! | `related_concept_pages(ids)` | concepts, loader order | `MissingConcept` |
//!
//! Scans run over the collections in loader order, so when two pages share an
//! `order` or an `id` the first one loaded wins.

use super::error::{ContentError, Result};
use super::loader::DocumentLoader;
use super::pages::{ConceptPage, QuickStartPage};
use crate::config::ContentConfig;
use crate::log;

/// Neighbours of a quick start page.
#[derive(Debug, Clone, Copy)]
pub struct Pagination<'a> {
    pub previous: Option<&'a QuickStartPage>,
    pub next: Option<&'a QuickStartPage>,
}

/// Immutable index built once from the loaded collections.
#[derive(Debug, Clone)]
pub struct ContentIndex {
    /// Quick start pages in loader order
    quick_start: Vec<QuickStartPage>,
    /// Positions into `quick_start`, ascending by `order`
    sorted: Vec<usize>,
    /// Concept pages in loader order
    concepts: Vec<ConceptPage>,
}

impl ContentIndex {
    pub fn new(quick_start: Vec<QuickStartPage>, concepts: Vec<ConceptPage>) -> Self {
        let mut sorted: Vec<usize> = (0..quick_start.len()).collect();
        // `sort_by_key` is stable, ties keep loader order
        sorted.sort_by_key(|&i| quick_start[i].order);

        Self {
            quick_start,
            sorted,
            concepts,
        }
    }

    /// Load both collections through `loader` and build the index.
    pub fn load<L: DocumentLoader>(loader: &L, config: &ContentConfig) -> Result<Self> {
        let quick_start = loader.load_documents(&config.quick_start)?;
        let concepts = loader.load_documents(&config.concepts)?;
        log!("index"; "{} quick start pages, {} concept pages", quick_start.len(), concepts.len());
        Ok(Self::new(quick_start, concepts))
    }

    /// Quick start pages ascending by numeric `order`.
    pub fn sorted_quick_start_pages(&self) -> impl ExactSizeIterator<Item = &QuickStartPage> + '_ {
        self.sorted.iter().map(|&i| &self.quick_start[i])
    }

    /// Concept pages in the order the loader returned them.
    pub fn concept_pages(&self) -> &[ConceptPage] {
        &self.concepts
    }

    /// The page with exactly this `order`.
    pub fn quick_start_page(&self, order: i64) -> Option<&QuickStartPage> {
        self.quick_start.iter().find(|p| p.order == order)
    }

    /// The page whose `order` is `order - 1`.
    pub fn previous(&self, order: i64) -> Option<&QuickStartPage> {
        order.checked_sub(1).and_then(|o| self.quick_start_page(o))
    }

    /// The page whose `order` is `order + 1`.
    pub fn next(&self, order: i64) -> Option<&QuickStartPage> {
        order.checked_add(1).and_then(|o| self.quick_start_page(o))
    }

    pub fn pagination(&self, order: i64) -> Pagination<'_> {
        Pagination {
            previous: self.previous(order),
            next: self.next(order),
        }
    }

    /// The first concept page with this id.
    pub fn concept(&self, id: &str) -> Option<&ConceptPage> {
        self.concepts.iter().find(|p| p.id == id)
    }

    /// Resolve ids to concept pages, keeping the input order.
    ///
    /// Fails on the first id without a page instead of returning a partial
    /// list.
    pub fn related_concept_pages<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<&ConceptPage>> {
        ids.iter()
            .map(|id| {
                let id = id.as_ref();
                self.concept(id).ok_or_else(|| ContentError::MissingConcept { id: id.to_owned() })
            })
            .collect()
    }

    /// Resolve the `related` list of a concept page.
    pub fn related_of(&self, page: &ConceptPage) -> Result<Vec<&ConceptPage>> {
        self.related_concept_pages(page.related.as_slice())
    }
}
