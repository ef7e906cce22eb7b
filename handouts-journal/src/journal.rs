use crate::page::{Page, SORT_STEP};
use handouts_types::{JournalId, PageId};
use serde::{Deserialize, Serialize};

/// An ordered collection of pages with a human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    /// Unique identifier for this journal.
    pub id: JournalId,

    /// Display name.
    pub name: String,

    pages: Vec<Page>,
}

impl Journal {
    /// Creates an empty journal with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: JournalId::new(),
            name: name.into(),
            pages: Vec::new(),
        }
    }

    /// The journal's pages, in insertion order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Looks up a page by id.
    #[must_use]
    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Whether a page with the given id exists.
    #[must_use]
    pub fn contains(&self, id: PageId) -> bool {
        self.page(id).is_some()
    }

    /// Inserts a page.
    pub fn insert(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Removes a page by id, returning it if it was present.
    pub fn remove(&mut self, id: PageId) -> Option<Page> {
        let index = self.pages.iter().position(|p| p.id == id)?;
        Some(self.pages.remove(index))
    }

    /// The highest sort key currently in the journal, or 0 when empty.
    #[must_use]
    pub fn max_sort(&self) -> i64 {
        self.pages.iter().map(|p| p.sort).max().unwrap_or(0)
    }

    /// The sort key a newly inserted page should get so it displays after
    /// every existing page.
    #[must_use]
    pub fn next_sort(&self) -> i64 {
        self.max_sort() + SORT_STEP
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the journal has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
