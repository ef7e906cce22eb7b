//! The user-facing share action.
//!
//! The host application surfaces a single per-page trigger (a header button
//! in practice); this controller owns the decision of when that trigger is
//! available and what happens when it fires. Kept as explicit methods so
//! the core is callable without any particular UI event system.

use crate::broadcast::{PageViewer, SocketHub};
use crate::error::{PublishError, PublishResult};
use crate::publisher::{publish, PublishRequest};
use crate::settings::ShareSettings;
use handouts_journal::{JournalDirectory, Page};
use handouts_types::{JournalId, PageId};
use tracing::debug;

/// Wires the sharing settings, the publication engine, and the socket hub
/// together behind the share trigger.
pub struct ShareController {
    settings: ShareSettings,
    hub: SocketHub,
}

impl ShareController {
    /// Creates a controller from a settings snapshot and the session hub.
    #[must_use]
    pub fn new(settings: ShareSettings, hub: SocketHub) -> Self {
        Self { settings, hub }
    }

    /// The settings snapshot this controller was built with.
    #[must_use]
    pub fn settings(&self) -> &ShareSettings {
        &self.settings
    }

    /// Whether the share trigger should be offered on a page of `viewed`.
    ///
    /// Only for the privileged role, only once both journals are
    /// configured, and only when `viewed` is an eligible source under the
    /// configured scope. Unconfigured is inactive, not an error.
    #[must_use]
    pub fn share_available(&self, is_gm: bool, viewed: JournalId) -> bool {
        if !is_gm {
            return false;
        }
        let (Some(scope), Some(players)) = (self.settings.gm_journal, self.settings.players_journal)
        else {
            return false;
        };
        scope.allows(viewed, players)
    }

    /// Shares the page currently in view.
    ///
    /// Publishes per the configured policy, then — only after the players
    /// journal mutation has succeeded — announces the page to every
    /// connected session. The initiator's own view opens locally iff the
    /// `open_for_gm` setting says so; that is independent of the broadcast,
    /// which the initiating session receives like any other.
    ///
    /// A repeated share of an already-published page returns the existing
    /// copy and still announces it.
    pub fn share_page(
        &self,
        directory: &mut JournalDirectory,
        source_journal: JournalId,
        page_in_view: Option<PageId>,
        viewer: &mut dyn PageViewer,
    ) -> PublishResult<Page> {
        // The trigger is hidden while unconfigured; reaching here without a
        // players journal is the same UI-state mismatch as having no page.
        let Some(players_journal) = self.settings.players_journal else {
            debug!("share fired without a configured players journal");
            return Err(PublishError::MissingPageContext);
        };
        let source_page = page_in_view.ok_or(PublishError::MissingPageContext)?;

        let request = PublishRequest {
            source_journal,
            source_page,
            players_journal,
            policy: self.settings.policy,
            archive_journal: self.settings.archive_journal,
        };
        let page = publish(directory, &request)?;

        self.hub.announce(players_journal, page.id);

        if self.settings.open_for_gm {
            viewer.open_page(players_journal, page.id);
        }

        Ok(page)
    }
}
