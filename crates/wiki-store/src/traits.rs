use async_trait::async_trait;
use wiki_types::{PageKey, RecordId, UserId};

use crate::document::{Document, Filter, Projection, Sort};
use crate::error::StoreResult;
use crate::session::SessionGuard;

/// Database and collection a session operates on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Namespace {
    pub database: String,
    pub collection: String,
}

impl Namespace {
    pub fn new(database: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            collection: collection.into(),
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.database, self.collection)
    }
}

/// Outcome of a create-if-absent request.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insert {
    /// The document was stored under a fresh record id.
    Created(RecordId),
    /// A document with the same key already exists. Nothing was written.
    Conflict,
}

impl Insert {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Source of backend sessions.
///
/// Implementations own whatever pooling they need. The page store opens one
/// session per operation and never keeps it beyond that operation.
#[async_trait]
pub trait PageBackend: Send + Sync {
    /// Open a session on the given namespace.
    async fn connect(&self, namespace: &Namespace) -> StoreResult<SessionGuard>;
}

/// One backend session bound to a single collection.
///
/// All implementations must satisfy these invariants:
/// - `create_if_absent` is atomic: for a given key at most one call ever
///   returns [`Insert::Created`], however many callers race.
/// - The record id of a created document embeds its creation time.
/// - `find_all` returns documents in the collection's natural order and
///   imposes no sort of its own.
#[async_trait]
pub trait PageSession: Send + Sync {
    /// Store a new page version under `key` unless a document with that key
    /// exists. The stored document's key fields are taken from `key`.
    async fn create_if_absent(&self, key: &PageKey, user_id: UserId, text: &str)
        -> StoreResult<Insert>;

    /// First matching document under `sort`, or in natural order without one.
    ///
    /// Returns `Ok(None)` when nothing matches.
    async fn find_one(
        &self,
        filter: &Filter,
        projection: Projection,
        sort: Option<Sort>,
    ) -> StoreResult<Option<Document>>;

    /// Every matching document, fully materialized.
    async fn find_all(&self, filter: &Filter, projection: Projection) -> StoreResult<Vec<Document>>;

    /// Delete every matching document and return how many were removed.
    async fn delete_all(&self, filter: &Filter) -> StoreResult<u64>;

    /// Release the session. Called exactly once, by [`SessionGuard`].
    fn disconnect(&mut self) -> StoreResult<()>;
}
