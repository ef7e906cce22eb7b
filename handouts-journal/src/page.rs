use handouts_types::PageId;
use serde::{Deserialize, Serialize};

/// Gap between consecutive sort keys assigned to newly shared pages.
///
/// A freshly inserted page always sorts at `max(existing) + SORT_STEP`, so
/// new pages land after everything already in the journal regardless of any
/// gaps left by manual reordering or deletions.
pub const SORT_STEP: i64 = 10_000;

/// A single page inside a journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Unique identifier for this page.
    pub id: PageId,

    /// Display name shown in the journal's table of contents.
    pub name: String,

    /// The page's rendered content.
    pub text: String,

    /// Sort key controlling display order within the journal.
    pub sort: i64,

    /// When this page was created by the publication engine, the id of the
    /// source page it was cloned from. At most one page per source id
    /// carries this within a journal; the engine checks before creating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_from: Option<PageId>,
}

impl Page {
    /// Creates a new authored page with a fresh id and no provenance.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>, sort: i64) -> Self {
        Self {
            id: PageId::new(),
            name: name.into(),
            text: text.into(),
            sort,
            shared_from: None,
        }
    }

    /// Clones this page's content into a new page tagged as shared from
    /// this one. The clone gets a fresh id; `sort` is the caller's to
    /// compute against the target journal.
    #[must_use]
    pub fn clone_as_shared(&self, sort: i64) -> Self {
        Self {
            id: PageId::new(),
            name: self.name.clone(),
            text: self.text.clone(),
            sort,
            shared_from: Some(self.id),
        }
    }

    /// Whether this page's content equals another's, ignoring identity,
    /// ordering, and provenance.
    #[must_use]
    pub fn content_eq(&self, other: &Self) -> bool {
        self.name == other.name && self.text == other.text
    }
}
