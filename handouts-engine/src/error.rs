//! Error types for the publication engine.

use handouts_types::{JournalId, PageId};
use std::fmt;
use thiserror::Error;

/// Result type for publication operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// Errors that can occur while publishing a page.
///
/// All of these are terminal for the invocation; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    /// A journal the operation requires could not be resolved. Checked
    /// before any mutation, so a failing publish leaves every journal
    /// untouched. Surfaced to the initiating user. `id` is `None` when the
    /// journal was never configured at all.
    #[error("{role} journal not found")]
    MissingJournal {
        role: JournalRole,
        id: Option<JournalId>,
    },

    /// The source page vanished between selection and cloning, e.g. raced
    /// by a concurrent delete. Surfaced to the initiating user.
    #[error("source page no longer exists: {0}")]
    SourceUnavailable(PageId),

    /// The share action fired without an identifiable page in view. A
    /// UI-state mismatch rather than a user error; callers abort silently.
    #[error("no page is currently in view")]
    MissingPageContext,
}

/// Which journal a [`PublishError::MissingJournal`] refers to, so the two
/// failure toasts can be distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalRole {
    /// The shared destination journal.
    Players,
    /// The archive journal required by the duplicate policy.
    Archive,
}

impl fmt::Display for JournalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Players => write!(f, "players"),
            Self::Archive => write!(f, "archive"),
        }
    }
}
