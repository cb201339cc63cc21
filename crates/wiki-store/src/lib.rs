//! Persistent record backend for wiki page versions.
//!
//! Page versions live in a document collection, one JSON document per
//! version. The backend is an external collaborator; this crate fixes the
//! narrow interface the page store needs from it:
//!
//! - atomic create-if-absent keyed by `(wiki, ref, version)`
//! - equality queries with field projection and an optional sort
//! - bulk deletion by filter
//! - a creation timestamp attached to every inserted document through its
//!   [`RecordId`](wiki_types::RecordId)
//!
//! # Sessions
//!
//! A backend hands out one [`SessionGuard`] per operation. Dropping the guard
//! disconnects the session, so it is released on success, on error and when
//! the owning future is cancelled.
//!
//! # Storage Backends
//!
//! - [`InMemoryBackend`] -- collection store for tests and embedding
//!
//! # Design Rules
//!
//! 1. A uniqueness violation on insert is an outcome ([`Insert::Conflict`]),
//!    never an error.
//! 2. Documents are never updated in place.
//! 3. The natural retrieval order of a collection is insertion order.
//! 4. All backend failures are propagated as [`StoreError`].

pub mod document;
pub mod error;
pub mod memory;
pub mod session;
pub mod traits;

pub use document::{fields, Direction, Document, Filter, Projection, Sort};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryBackend;
pub use session::SessionGuard;
pub use traits::{Insert, Namespace, PageBackend, PageSession};
