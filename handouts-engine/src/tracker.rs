//! Cross-session page identity tracking.

use handouts_journal::{Journal, Page};
use handouts_types::PageId;

/// Finds the page in `destination` that was published from `source`, if any.
///
/// Matches on the provenance reference stamped at publication time. At most
/// one page per source id carries it (the publisher checks here before
/// creating), so the first match is the only one. An empty journal simply
/// yields `None`.
#[must_use]
pub fn find_published(source: PageId, destination: &Journal) -> Option<&Page> {
    destination
        .pages()
        .iter()
        .find(|p| p.shared_from == Some(source))
}
