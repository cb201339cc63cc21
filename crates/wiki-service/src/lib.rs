//! Versioned wiki page store.
//!
//! Stores immutable, numbered versions of wiki pages on top of a
//! [`PageBackend`](wiki_store::PageBackend). Four operations make up the
//! whole surface:
//!
//! | Operation | Result |
//! |---|---|
//! | [`WikiService::load`] | content of a version, or the version-0 sentinel |
//! | [`WikiService::store`] | `success = false` when the version is taken |
//! | [`WikiService::list_versions`] | `(version, author)` pairs, unsorted |
//! | [`WikiService::delete`] | always `success = true` |
//!
//! # Concurrency
//!
//! A write of version `last + 1` is a single create-if-absent on the
//! `(wiki, ref, version)` key. The backend's uniqueness check decides which
//! of several racing writers wins; there are no locks or transactions here.
//! A losing writer gets `success = false` and nothing is retried. Anything
//! built on top of this crate must drive the retry itself:
//!
//! 1. load the latest version to learn the current `last`,
//! 2. store with that `last`,
//! 3. on `success = false`, go back to 1 (or give up).
//!
//! # Errors
//!
//! Backend failures of any kind are logged with their context and surface as
//! the opaque [`ServiceError::Internal`].

pub mod config;
pub mod convert;
pub mod error;
pub mod service;

pub use config::{ConfigError, ServiceConfig, DEFAULT_COLLECTION, WIKI_KEY};
pub use error::{ServiceError, ServiceResult};
pub use service::WikiService;
