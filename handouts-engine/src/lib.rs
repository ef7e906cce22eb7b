//! Publication engine for Handouts.
//!
//! Lets a privileged user ("GM") publish individual pages from a private
//! journal into a shared one that other participants can see, then tells
//! every connected session to open the shared page.
//!
//! # Components
//!
//! - **Tracker**: decides whether a source page was already published into
//!   a destination journal, by its provenance reference
//! - **Publisher**: the decision tree — idempotency check, verbatim clone,
//!   sort-key computation, and the keep/duplicate/delete sharing policy
//! - **Broadcast**: the socket hub that fans an open-page instruction out
//!   to every connected session, and the per-session receipt handler
//! - **Controller**: the user-facing share action, wiring settings,
//!   publisher, and hub together
//!
//! # Example
//!
//! ```
//! use handouts_engine::{publish, PublishRequest, SharingPolicy};
//! use handouts_journal::{Journal, JournalDirectory, Page};
//!
//! let mut directory = JournalDirectory::new();
//! let mut gm = Journal::new("GM");
//! let page = Page::new("Chapter 1", "Once upon a time", 10_000);
//! let page_id = page.id;
//! gm.insert(page);
//! let gm_id = directory.insert(gm);
//! let players_id = directory.insert(Journal::new("Players"));
//!
//! let request = PublishRequest {
//!     source_journal: gm_id,
//!     source_page: page_id,
//!     players_journal: players_id,
//!     policy: SharingPolicy::Keep,
//!     archive_journal: None,
//! };
//! let shared = publish(&mut directory, &request).unwrap();
//! assert_eq!(shared.shared_from, Some(page_id));
//! ```

mod broadcast;
mod controller;
mod error;
mod publisher;
mod settings;
mod tracker;

pub use broadcast::{mock, PageViewer, Session, SocketHub, SOCKET_CAPACITY};
pub use controller::ShareController;
pub use error::{JournalRole, PublishError, PublishResult};
pub use publisher::{publish, PublishRequest};
pub use settings::{ShareSettings, SharingPolicy, SourceScope};
pub use tracker::find_published;
