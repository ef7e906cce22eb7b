//! Core type definitions for Handouts.
//!
//! This crate defines the fundamental types shared by the journal model and
//! the publication engine:
//! - Page, journal, and user identifiers (UUID v7)
//! - The socket message envelope broadcast to connected sessions
//!
//! Everything that touches documents themselves (pages, journals, the
//! publication decision tree) lives in `handouts-journal` and
//! `handouts-engine`, not here.

mod ids;
mod socket;

pub use ids::{JournalId, PageId, UserId};
pub use socket::SocketMessage;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
