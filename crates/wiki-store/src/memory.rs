//! In-memory backend for tests and embedding.
//!
//! [`InMemoryBackend`] keeps every collection in a `HashMap` behind a
//! `RwLock`. Each collection holds its documents in insertion order plus a
//! unique index over [`PageKey`]. The index check and the insert happen under
//! one write lock, which makes create-if-absent atomic.
//!
//! The backend can be switched offline and given an artificial latency so
//! that failure, timeout and cancellation paths can be exercised.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use wiki_types::{PageKey, RecordId, UserId};

use crate::document::{fields, page_document, Document, Filter, Projection, Sort};
use crate::error::{StoreError, StoreResult};
use crate::session::SessionGuard;
use crate::traits::{Insert, Namespace, PageBackend, PageSession};

#[derive(Debug, Default)]
struct Collection {
    documents: Vec<Document>,
    index: HashSet<PageKey>,
}

#[derive(Debug, Default)]
struct Shared {
    collections: RwLock<HashMap<Namespace, Collection>>,
    offline: AtomicBool,
    latency_ms: AtomicU64,
    open_sessions: AtomicUsize,
    total_sessions: AtomicU64,
}

impl Shared {
    fn ensure_online(&self) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }

    async fn delay(&self) {
        let ms = self.latency_ms.load(Ordering::SeqCst);
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

/// An in-memory implementation of [`PageBackend`].
///
/// Cloning yields another handle on the same data. Data is lost when the last
/// handle is dropped.
#[derive(Clone, Debug, Default)]
pub struct InMemoryBackend {
    shared: Arc<Shared>,
}

impl InMemoryBackend {
    /// Create a new empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the backend becoming unreachable (`false`) or recovering.
    pub fn set_available(&self, available: bool) {
        self.shared.offline.store(!available, Ordering::SeqCst);
    }

    /// Delay every session call by `latency`.
    pub fn set_latency(&self, latency: Duration) {
        self.shared
            .latency_ms
            .store(u64::try_from(latency.as_millis()).unwrap_or(u64::MAX), Ordering::SeqCst);
    }

    /// Current artificial latency.
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.shared.latency_ms.load(Ordering::SeqCst))
    }

    /// Sessions currently connected.
    pub fn open_sessions(&self) -> usize {
        self.shared.open_sessions.load(Ordering::SeqCst)
    }

    /// Sessions connected since the backend was created.
    pub fn total_sessions(&self) -> u64 {
        self.shared.total_sessions.load(Ordering::SeqCst)
    }

    /// Number of documents in a collection.
    pub fn len(&self, namespace: &Namespace) -> StoreResult<usize> {
        let collections = self.shared.collections.read().map_err(lock_poisoned)?;
        Ok(collections.get(namespace).map_or(0, |c| c.documents.len()))
    }

    /// Store a document verbatim, bypassing the unique index and id
    /// assignment. Lets tests plant records the page store cannot decode.
    pub fn insert_raw(&self, namespace: &Namespace, document: Document) -> StoreResult<()> {
        let mut collections = self.shared.collections.write().map_err(lock_poisoned)?;
        collections
            .entry(namespace.clone())
            .or_default()
            .documents
            .push(document);
        Ok(())
    }
}

#[async_trait]
impl PageBackend for InMemoryBackend {
    async fn connect(&self, namespace: &Namespace) -> StoreResult<SessionGuard> {
        self.shared.delay().await;
        if self.shared.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Connection(format!("{namespace}: backend unreachable")));
        }
        self.shared.open_sessions.fetch_add(1, Ordering::SeqCst);
        self.shared.total_sessions.fetch_add(1, Ordering::SeqCst);
        Ok(SessionGuard::new(Box::new(InMemorySession {
            shared: Arc::clone(&self.shared),
            namespace: namespace.clone(),
            closed: false,
        })))
    }
}

struct InMemorySession {
    shared: Arc<Shared>,
    namespace: Namespace,
    closed: bool,
}

impl InMemorySession {
    async fn begin(&self) -> StoreResult<()> {
        if self.closed {
            return Err(StoreError::Closed);
        }
        self.shared.delay().await;
        self.shared.ensure_online()
    }
}

#[async_trait]
impl PageSession for InMemorySession {
    async fn create_if_absent(
        &self,
        key: &PageKey,
        user_id: UserId,
        text: &str,
    ) -> StoreResult<Insert> {
        self.begin().await?;
        let mut collections = self.shared.collections.write().map_err(lock_poisoned)?;
        let collection = collections.entry(self.namespace.clone()).or_default();
        if collection.index.contains(key) {
            return Ok(Insert::Conflict);
        }
        let id = RecordId::new();
        let mut document = page_document(key, user_id, text);
        document.insert(fields::ID.into(), Value::String(id.to_string()));
        collection.index.insert(key.clone());
        collection.documents.push(document);
        Ok(Insert::Created(id))
    }

    async fn find_one(
        &self,
        filter: &Filter,
        projection: Projection,
        sort: Option<Sort>,
    ) -> StoreResult<Option<Document>> {
        self.begin().await?;
        let collections = self.shared.collections.read().map_err(lock_poisoned)?;
        let Some(collection) = collections.get(&self.namespace) else {
            return Ok(None);
        };
        let mut matching = collection.documents.iter().filter(|d| filter.matches(d));
        let found = match sort {
            // min_by keeps the first of equal elements, preserving natural order on ties.
            Some(sort) => matching.min_by(|a, b| sort.compare(a, b)),
            None => matching.next(),
        };
        Ok(found.map(|d| projection.apply(d)))
    }

    async fn find_all(&self, filter: &Filter, projection: Projection) -> StoreResult<Vec<Document>> {
        self.begin().await?;
        let collections = self.shared.collections.read().map_err(lock_poisoned)?;
        Ok(collections
            .get(&self.namespace)
            .map(|c| {
                c.documents
                    .iter()
                    .filter(|d| filter.matches(d))
                    .map(|d| projection.apply(d))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn delete_all(&self, filter: &Filter) -> StoreResult<u64> {
        self.begin().await?;
        let mut collections = self.shared.collections.write().map_err(lock_poisoned)?;
        let Some(collection) = collections.get_mut(&self.namespace) else {
            return Ok(0);
        };
        let (removed, kept): (Vec<Document>, Vec<Document>) = collection
            .documents
            .drain(..)
            .partition(|d| filter.matches(d));
        collection.documents = kept;
        for doc in &removed {
            if let Some(key) = index_key(doc) {
                collection.index.remove(&key);
            }
        }
        Ok(removed.len() as u64)
    }

    fn disconnect(&mut self) -> StoreResult<()> {
        if self.closed {
            return Err(StoreError::Closed);
        }
        self.closed = true;
        self.shared.open_sessions.fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Rebuild the unique-index key of a stored document.
fn index_key(doc: &Document) -> Option<PageKey> {
    let wiki_id = doc.get(fields::WIKI_ID)?.as_u64()?;
    let page_ref = doc.get(fields::REF)?.as_str()?;
    let version = doc.get(fields::VERSION)?.as_u64()?;
    Some(PageKey::new(wiki_id.into(), page_ref, version.into()))
}

fn lock_poisoned<E: std::fmt::Display>(e: E) -> StoreError {
    StoreError::Backend(format!("lock poisoned: {e}"))
}
