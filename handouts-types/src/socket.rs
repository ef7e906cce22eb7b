//! Socket message envelope for the shared broadcast channel.
//!
//! One message kind exists today: `open-page`, which tells every connected
//! session to display a given journal focused on a given page. The envelope
//! is tagged by its `event` field so that future message kinds can share the
//! channel; receivers drop tags they do not recognize.

use crate::{JournalId, PageId};
use serde::{Deserialize, Serialize};

/// A message broadcast to all connected sessions.
///
/// Serializes to `{"event":"open-page","journalId":...,"pageId":...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum SocketMessage {
    /// Instructs sessions to open `journal_id` focused on `page_id` in
    /// single-page view mode.
    #[serde(rename_all = "camelCase")]
    OpenPage {
        journal_id: JournalId,
        page_id: PageId,
    },
}

impl SocketMessage {
    /// Creates an open-page message.
    #[must_use]
    pub fn open_page(journal_id: JournalId, page_id: PageId) -> Self {
        Self::OpenPage {
            journal_id,
            page_id,
        }
    }

    /// Encodes the message for the wire.
    pub fn encode(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a message from the wire.
    ///
    /// Fails on malformed JSON and on unknown `event` tags; receivers treat
    /// either as a no-op rather than an error.
    pub fn decode(raw: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
