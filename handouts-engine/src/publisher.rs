//! The publication decision tree.

use crate::error::{JournalRole, PublishError, PublishResult};
use crate::settings::SharingPolicy;
use crate::tracker::find_published;
use handouts_journal::{JournalDirectory, Page};
use handouts_types::{JournalId, PageId};
use tracing::{debug, info};

/// Everything a single publish invocation needs, resolved from settings by
/// the caller.
#[derive(Debug, Clone, Copy)]
pub struct PublishRequest {
    /// Journal currently holding the page to share.
    pub source_journal: JournalId,
    /// The page to share.
    pub source_page: PageId,
    /// The shared journal the page is published into.
    pub players_journal: JournalId,
    /// What happens to the source page after sharing.
    pub policy: SharingPolicy,
    /// Where the duplicate policy archives the source page. Ignored by the
    /// other policies.
    pub archive_journal: Option<JournalId>,
}

/// Publishes a page into the players journal, applying the sharing policy.
///
/// Idempotent with respect to content: if the page was already published
/// into this journal, the existing copy is returned and nothing mutates.
/// Otherwise the page content is cloned verbatim, stamped with its source
/// page id, sorted after every existing page, and inserted. The duplicate
/// policy then clones a second, independently sorted copy into the archive
/// journal and removes the source page; the delete policy removes the
/// source page with no archive copy; keep leaves the source untouched.
///
/// Journal resolution happens before any mutation, so a `MissingJournal`
/// failure leaves zero partial state. The archive clone always lands before
/// the source removal: a page is never deleted while it is the only copy.
pub fn publish(directory: &mut JournalDirectory, request: &PublishRequest) -> PublishResult<Page> {
    // Preconditions, before anything mutates.
    let players = directory.journal(request.players_journal).ok_or(
        PublishError::MissingJournal {
            role: JournalRole::Players,
            id: Some(request.players_journal),
        },
    )?;

    if request.policy == SharingPolicy::Duplicate {
        let resolved = request
            .archive_journal
            .and_then(|id| directory.journal(id));
        if resolved.is_none() {
            return Err(PublishError::MissingJournal {
                role: JournalRole::Archive,
                id: request.archive_journal,
            });
        }
    }

    // Idempotency: a prior publication is the durable record of "already
    // shared". Return it untouched, policy side effects included.
    if let Some(existing) = find_published(request.source_page, players) {
        debug!(
            page = %request.source_page,
            published = %existing.id,
            "page already published, returning existing copy"
        );
        return Ok(existing.clone());
    }

    // Snapshot the source content before any mutation.
    let snapshot = directory
        .journal(request.source_journal)
        .and_then(|j| j.page(request.source_page))
        .cloned()
        .ok_or(PublishError::SourceUnavailable(request.source_page))?;

    let Some(players) = directory.journal_mut(request.players_journal) else {
        return Err(PublishError::MissingJournal {
            role: JournalRole::Players,
            id: Some(request.players_journal),
        });
    };
    let shared = snapshot.clone_as_shared(players.next_sort());
    players.insert(shared.clone());

    match request.policy {
        SharingPolicy::Keep => {}
        SharingPolicy::Duplicate => {
            // Clone into the archive first; only then is it safe to remove
            // the source page.
            let archive_id = request.archive_journal.ok_or(PublishError::MissingJournal {
                role: JournalRole::Archive,
                id: None,
            })?;
            let Some(archive) = directory.journal_mut(archive_id) else {
                return Err(PublishError::MissingJournal {
                    role: JournalRole::Archive,
                    id: Some(archive_id),
                });
            };
            archive.insert(snapshot.clone_as_shared(archive.next_sort()));
            remove_source(directory, request);
        }
        SharingPolicy::Delete => remove_source(directory, request),
    }

    info!(
        page = %request.source_page,
        published = %shared.id,
        journal = %request.players_journal,
        policy = ?request.policy,
        "published page"
    );
    Ok(shared)
}

/// Removes the source page after its clones are in place. The page having
/// already disappeared is fine here; the share still happened.
fn remove_source(directory: &mut JournalDirectory, request: &PublishRequest) {
    let removed = directory
        .journal_mut(request.source_journal)
        .and_then(|j| j.remove(request.source_page));
    if removed.is_none() {
        debug!(page = %request.source_page, "source page already gone, nothing to remove");
    }
}
