//! Sharing configuration.
//!
//! Settings are owned and persisted by the host application; the engine
//! consumes a read-only snapshot passed in explicitly.

use handouts_types::{JournalId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What happens to the source page after it is shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SharingPolicy {
    /// The source page stays where it is.
    #[default]
    Keep,
    /// The source page is additionally cloned into the archive journal,
    /// then removed from its source journal.
    Duplicate,
    /// The source page is removed from its source journal, nothing archived.
    Delete,
}

/// Which journals are eligible sources for sharing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceScope {
    /// Every journal except the players journal itself.
    All,
    /// A single designated GM journal.
    Journal(JournalId),
}

impl SourceScope {
    /// Whether `journal` may act as a share source under this scope.
    /// `players` is the configured destination, never a valid source.
    #[must_use]
    pub fn allows(&self, journal: JournalId, players: JournalId) -> bool {
        match self {
            Self::All => journal != players,
            Self::Journal(id) => journal == *id,
        }
    }
}

/// Snapshot of the sharing configuration.
///
/// `gm_journal` and `players_journal` being unset is not an error: it just
/// means sharing has not been set up, and the trigger stays inactive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareSettings {
    /// Which journals pages may be shared from.
    pub gm_journal: Option<SourceScope>,

    /// The shared journal pages are published into.
    pub players_journal: Option<JournalId>,

    /// What happens to the source page after sharing.
    pub policy: SharingPolicy,

    /// Archive journal for the duplicate policy.
    pub archive_journal: Option<JournalId>,

    /// Whether the initiating session also opens the page locally, on top
    /// of the broadcast every other session receives.
    pub open_for_gm: bool,

    /// Users whose sessions never auto-open shared pages.
    pub blacklist: HashSet<UserId>,
}

impl ShareSettings {
    /// Whether both journal ids are configured, i.e. sharing is set up.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.gm_journal.is_some() && self.players_journal.is_some()
    }
}
