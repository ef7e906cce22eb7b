use crate::journal::Journal;
use handouts_types::JournalId;
use std::collections::HashMap;

/// The set of journals a process can resolve by id.
///
/// Stands in for the host application's document store. The publication
/// engine takes this as an explicit parameter; each connected session keeps
/// its own directory reflecting what that session is allowed to see, which
/// is why resolving an id can legitimately fail on some sessions.
#[derive(Debug, Default, Clone)]
pub struct JournalDirectory {
    journals: HashMap<JournalId, Journal>,
}

impl JournalDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a journal, returning its id.
    pub fn insert(&mut self, journal: Journal) -> JournalId {
        let id = journal.id;
        self.journals.insert(id, journal);
        id
    }

    /// Resolves a journal by id.
    #[must_use]
    pub fn journal(&self, id: JournalId) -> Option<&Journal> {
        self.journals.get(&id)
    }

    /// Resolves a journal mutably by id.
    #[must_use]
    pub fn journal_mut(&mut self, id: JournalId) -> Option<&mut Journal> {
        self.journals.get_mut(&id)
    }

    /// Iterates over all journals.
    pub fn iter(&self) -> impl Iterator<Item = &Journal> {
        self.journals.values()
    }

    /// Number of journals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.journals.len()
    }

    /// Whether the directory holds no journals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.journals.is_empty()
    }
}
