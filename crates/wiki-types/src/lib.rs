//! Foundation types for the versioned wiki page store.
//!
//! Every page of a wiki is an append-only sequence of immutable versions keyed
//! by `(wiki, ref, version)`. This crate defines that vocabulary and the
//! caller-facing values returned by the store. Every other wiki crate depends
//! on `wiki-types`.
//!
//! # Key Types
//!
//! - [`WikiId`], [`UserId`] — opaque numeric identifiers
//! - [`PageRef`] — a page reference within a wiki
//! - [`Version`] — per-page version number, `0` meaning "latest" or "absent"
//! - [`RecordId`] — backend-assigned, time-ordered record identifier that
//!   carries the creation timestamp
//! - [`PageKey`] — the `(wiki, ref, version)` uniqueness key
//! - [`Content`], [`VersionEntry`], [`Versions`], [`Response`] — operation
//!   results

pub mod error;
pub mod ids;
pub mod page;
pub mod record;

pub use error::TypeError;
pub use ids::{PageRef, UserId, Version, WikiId};
pub use page::{Content, PageKey, Response, VersionEntry, Versions};
pub use record::RecordId;
