//! Journal and page model for Handouts.
//!
//! Defines the document types the publication engine operates on:
//! - [`Page`] — an ordered, content-bearing unit with an optional
//!   provenance reference to the page it was shared from
//! - [`Journal`] — an ordered collection of pages
//! - [`JournalDirectory`] — the in-memory registry of journals a process
//!   can resolve, passed explicitly instead of read from a global
//!
//! The host application owns real document storage; this model is the
//! engine's working view of it.

mod directory;
mod journal;
mod page;

pub use directory::JournalDirectory;
pub use journal::Journal;
pub use page::{Page, SORT_STEP};
