//! Session fan-out over the shared socket channel.
//!
//! The hub side is fire-and-forget: `announce` encodes an open-page message
//! and sends it to whoever is currently subscribed, with no acknowledgment
//! and no retry. The receiving side is a fixed per-session handler that
//! resolves the journal against the session's own directory and asks the
//! local presentation layer to render it. A journal that does not resolve
//! locally is dropped silently; a viewer with different permissions simply
//! never sees it.

use handouts_journal::JournalDirectory;
use handouts_types::{JournalId, PageId, SocketMessage, UserId};
use std::collections::HashSet;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Buffered messages per subscriber before the slowest one starts lagging.
pub const SOCKET_CAPACITY: usize = 64;

/// Seam to the host's presentation layer: open a journal focused on one
/// page, in single-page view mode.
pub trait PageViewer: Send {
    fn open_page(&mut self, journal: JournalId, page: PageId);
}

/// Sender half of the shared broadcast channel.
///
/// Cheap to clone; all clones feed the same subscribers. The channel
/// carries encoded wire strings, so a handler sees exactly what a real
/// transport would deliver.
#[derive(Debug, Clone)]
pub struct SocketHub {
    tx: broadcast::Sender<String>,
}

impl SocketHub {
    /// Creates a hub with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(SOCKET_CAPACITY)
    }

    /// Creates a hub with an explicit per-subscriber buffer capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Broadcasts an open-page instruction to every connected session.
    ///
    /// Fire-and-forget: returns immediately, delivers best-effort. Having
    /// zero subscribers is not a failure.
    pub fn announce(&self, journal: JournalId, page: PageId) {
        let message = SocketMessage::open_page(journal, page);
        match message.encode() {
            Ok(raw) => {
                let receivers = self.tx.send(raw).unwrap_or(0);
                debug!(%journal, %page, receivers, "announced open-page");
            }
            Err(e) => warn!(%journal, %page, "failed to encode announcement: {e}"),
        }
    }

    /// Sends an already-encoded frame as-is.
    ///
    /// The channel is shared per deployment, so frames with event kinds
    /// this version does not define can legitimately appear on it; session
    /// handlers ignore what they do not recognize.
    pub fn send_raw(&self, frame: impl Into<String>) {
        let _ = self.tx.send(frame.into());
    }

    /// Subscribes a new receiver to the channel.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }
}

impl Default for SocketHub {
    fn default() -> Self {
        Self::new()
    }
}

/// One connected client's receiving end.
///
/// Holds the session's own view of the journal directory (what this user is
/// allowed to resolve), the shared blacklist, and the local viewer.
pub struct Session {
    user: UserId,
    directory: JournalDirectory,
    blacklist: HashSet<UserId>,
    rx: broadcast::Receiver<String>,
    viewer: Box<dyn PageViewer>,
}

impl Session {
    /// Connects a session to the hub.
    pub fn connect(
        hub: &SocketHub,
        user: UserId,
        directory: JournalDirectory,
        blacklist: HashSet<UserId>,
        viewer: Box<dyn PageViewer>,
    ) -> Self {
        Self {
            user,
            directory,
            blacklist,
            rx: hub.subscribe(),
            viewer,
        }
    }

    /// This session's user.
    #[must_use]
    pub fn user(&self) -> UserId {
        self.user
    }

    /// The session's local journal directory.
    #[must_use]
    pub fn directory(&self) -> &JournalDirectory {
        &self.directory
    }

    /// Mutable access to the local directory, for host-driven sync.
    pub fn directory_mut(&mut self) -> &mut JournalDirectory {
        &mut self.directory
    }

    /// Waits for the next broadcast and handles it. Returns `false` once
    /// the channel is closed. A lagged receiver skips ahead rather than
    /// erroring; missed frames are never replayed.
    pub async fn recv(&mut self) -> bool {
        loop {
            match self.rx.recv().await {
                Ok(raw) => {
                    self.handle_raw(&raw);
                    return true;
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!(user = %self.user, skipped, "session lagged, skipping");
                }
                Err(broadcast::error::RecvError::Closed) => return false,
            }
        }
    }

    /// Handles every broadcast currently queued, returning how many were
    /// consumed. Useful where an async receive loop is not running.
    pub fn drain(&mut self) -> usize {
        let mut handled = 0;
        loop {
            match self.rx.try_recv() {
                Ok(raw) => {
                    self.handle_raw(&raw);
                    handled += 1;
                }
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    debug!(user = %self.user, skipped, "session lagged, skipping");
                }
                Err(_) => return handled,
            }
        }
    }

    /// The fixed receipt handler. Anything that cannot be acted on is
    /// dropped without error: unknown or malformed events, journals this
    /// session cannot resolve, and blacklisted users.
    fn handle_raw(&mut self, raw: &str) {
        let Ok(message) = SocketMessage::decode(raw) else {
            debug!(user = %self.user, "ignoring unrecognized socket message");
            return;
        };

        let SocketMessage::OpenPage { journal_id, page_id } = message;

        if self.blacklist.contains(&self.user) {
            debug!(user = %self.user, "user is blacklisted, not opening page");
            return;
        }
        if self.directory.journal(journal_id).is_none() {
            debug!(user = %self.user, journal = %journal_id, "journal not visible here");
            return;
        }

        self.viewer.open_page(journal_id, page_id);
    }
}

/// Test doubles for the presentation seam.
pub mod mock {
    use super::PageViewer;
    use handouts_types::{JournalId, PageId};
    use std::sync::{Arc, Mutex};

    /// A viewer that records every open-page instruction it receives.
    /// Clones share the same log, so a test can keep a handle while the
    /// session owns the boxed viewer.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingViewer {
        opened: Arc<Mutex<Vec<(JournalId, PageId)>>>,
    }

    impl RecordingViewer {
        /// Creates an empty recording viewer.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Everything opened so far, in order.
        #[must_use]
        pub fn opened(&self) -> Vec<(JournalId, PageId)> {
            self.opened.lock().unwrap().clone()
        }

        /// Number of open-page instructions received.
        #[must_use]
        pub fn open_count(&self) -> usize {
            self.opened.lock().unwrap().len()
        }
    }

    impl PageViewer for RecordingViewer {
        fn open_page(&mut self, journal: JournalId, page: PageId) {
            self.opened.lock().unwrap().push((journal, page));
        }
    }
}
