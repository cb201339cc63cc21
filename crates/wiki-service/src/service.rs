use std::future::Future;
use std::sync::Arc;

use wiki_store::{
    fields, Filter, Insert, Namespace, PageBackend, Projection, SessionGuard, Sort, StoreError,
    StoreResult,
};
use wiki_types::{Content, PageKey, PageRef, Response, UserId, Version, Versions, WikiId};

use crate::config::ServiceConfig;
use crate::convert::{to_content, to_version_entry};
use crate::error::{ServiceError, ServiceResult};

/// Key fields are known to the caller and never returned by a load.
const CONTENT_FIELDS: Projection =
    Projection::Exclude(&[fields::WIKI_ID, fields::REF, fields::USER_ID]);

const VERSION_FIELDS: Projection = Projection::Include(&[fields::VERSION, fields::USER_ID]);

const LATEST_FIRST: Sort = Sort::descending(fields::VERSION);

/// The versioned page store.
///
/// Holds only a backend handle and immutable configuration. Every operation
/// opens its own backend session, makes a single backend call and releases
/// the session before returning, so a `WikiService` can be shared freely
/// between tasks.
pub struct WikiService<B: PageBackend + ?Sized> {
    backend: Arc<B>,
    config: ServiceConfig,
    namespace: Namespace,
}

impl<B: PageBackend + ?Sized> WikiService<B> {
    pub fn new(backend: Arc<B>, config: ServiceConfig) -> Self {
        let namespace = config.namespace();
        Self {
            backend,
            config,
            namespace,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Load one version of a page.
    ///
    /// `Version::LATEST` selects the highest stored version. A page or version
    /// that does not exist yields [`Content::sentinel`], not an error.
    pub async fn load(
        &self,
        wiki_id: WikiId,
        page_ref: &PageRef,
        version: Version,
    ) -> ServiceResult<Content> {
        self.try_load(wiki_id, page_ref, version)
            .await
            .map_err(|e| internal("load", wiki_id, page_ref, Some(version), e))
    }

    async fn try_load(
        &self,
        wiki_id: WikiId,
        page_ref: &PageRef,
        version: Version,
    ) -> StoreResult<Content> {
        let (filter, sort) = if version.is_latest() {
            (Filter::page(wiki_id, page_ref), Some(LATEST_FIRST))
        } else {
            (Filter::version(wiki_id, page_ref, version), None)
        };

        let session = self.session().await?;
        let found = self
            .bounded(session.find_one(&filter, CONTENT_FIELDS, sort))
            .await?;
        match found {
            Some(doc) => to_content(&doc),
            None => {
                tracing::debug!(%wiki_id, %page_ref, %version, "no matching page version");
                Ok(Content::sentinel())
            }
        }
    }

    /// Create version `last + 1` of a page.
    ///
    /// Succeeds only if no other writer created that version first. On
    /// `success == false` nothing was written; the caller should load the
    /// latest version and retry with the refreshed `last`.
    pub async fn store(
        &self,
        wiki_id: WikiId,
        page_ref: &PageRef,
        user_id: UserId,
        text: &str,
        last: Version,
    ) -> ServiceResult<Response> {
        self.try_store(wiki_id, page_ref, user_id, text, last)
            .await
            .map_err(|e| internal("store", wiki_id, page_ref, Some(last), e))
    }

    async fn try_store(
        &self,
        wiki_id: WikiId,
        page_ref: &PageRef,
        user_id: UserId,
        text: &str,
        last: Version,
    ) -> StoreResult<Response> {
        let Some(candidate) = last.next() else {
            tracing::debug!(%wiki_id, %page_ref, %last, "no version number left to allocate");
            return Ok(Response::rejected());
        };
        let key = PageKey::new(wiki_id, page_ref.clone(), candidate);

        // The backend's unique index on the key is the only synchronization
        // between writers.
        let session = self.session().await?;
        match self.bounded(session.create_if_absent(&key, user_id, text)).await? {
            Insert::Created(id) => {
                tracing::debug!(%wiki_id, %page_ref, version = %candidate, record = %id, "page version created");
                Ok(Response::success())
            }
            Insert::Conflict => {
                tracing::debug!(%wiki_id, %page_ref, version = %candidate, "page version already exists");
                Ok(Response::rejected())
            }
        }
    }

    /// Every stored version of a page with its author.
    ///
    /// Entries come in the backend's natural order, not sorted by version.
    pub async fn list_versions(&self, wiki_id: WikiId, page_ref: &PageRef) -> ServiceResult<Versions> {
        self.try_list_versions(wiki_id, page_ref)
            .await
            .map_err(|e| internal("list_versions", wiki_id, page_ref, None, e))
    }

    async fn try_list_versions(&self, wiki_id: WikiId, page_ref: &PageRef) -> StoreResult<Versions> {
        let filter = Filter::page(wiki_id, page_ref);
        let session = self.session().await?;
        let docs = self.bounded(session.find_all(&filter, VERSION_FIELDS)).await?;
        docs.iter().map(to_version_entry).collect()
    }

    /// Remove one exact version of a page.
    ///
    /// Reports success whether or not the version existed.
    pub async fn delete(
        &self,
        wiki_id: WikiId,
        page_ref: &PageRef,
        version: Version,
    ) -> ServiceResult<Response> {
        self.try_delete(wiki_id, page_ref, version)
            .await
            .map_err(|e| internal("delete", wiki_id, page_ref, Some(version), e))
    }

    async fn try_delete(
        &self,
        wiki_id: WikiId,
        page_ref: &PageRef,
        version: Version,
    ) -> StoreResult<Response> {
        let filter = Filter::version(wiki_id, page_ref, version);
        let session = self.session().await?;
        let removed = self.bounded(session.delete_all(&filter)).await?;
        tracing::debug!(%wiki_id, %page_ref, %version, removed, "page version deleted");
        Ok(Response::success())
    }

    async fn session(&self) -> StoreResult<SessionGuard> {
        self.bounded(self.backend.connect(&self.namespace)).await
    }

    async fn bounded<T, F>(&self, call: F) -> StoreResult<T>
    where
        F: Future<Output = StoreResult<T>>,
    {
        let limit = self.config.operation_timeout();
        tokio::time::timeout(limit, call)
            .await
            .map_err(|_| StoreError::Timeout(limit))?
    }
}

impl<B: PageBackend + ?Sized> std::fmt::Debug for WikiService<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WikiService")
            .field("namespace", &self.namespace)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Log a backend failure with its context and collapse it.
fn internal(
    operation: &'static str,
    wiki_id: WikiId,
    page_ref: &PageRef,
    version: Option<Version>,
    error: StoreError,
) -> ServiceError {
    tracing::error!(
        operation,
        %wiki_id,
        %page_ref,
        version = ?version,
        error = %error,
        "backend call failed"
    );
    ServiceError::Internal
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use serde_json::Value;
    use wiki_store::document::page_document;
    use wiki_store::InMemoryBackend;

    fn service() -> (WikiService<InMemoryBackend>, InMemoryBackend) {
        let backend = InMemoryBackend::new();
        let svc = WikiService::new(Arc::new(backend.clone()), ServiceConfig::default());
        (svc, backend)
    }

    fn home() -> PageRef {
        PageRef::from("home")
    }

    fn numbers(versions: &Versions) -> Vec<u64> {
        let mut n: Vec<u64> = versions.list.iter().map(|e| e.number.get()).collect();
        n.sort_unstable();
        n
    }

    // ---- Walkthrough: store, conflict, retry, list, delete ----
    #[tokio::test]
    async fn edit_history_walkthrough() {
        let (svc, _) = service();
        let wiki = WikiId(1);

        let r = svc.store(wiki, &home(), UserId(7), "A", Version(0)).await.unwrap();
        assert!(r.success);

        let c = svc.load(wiki, &home(), Version::LATEST).await.unwrap();
        assert_eq!(c.version, Version(1));
        assert_eq!(c.text, "A");

        let r = svc.store(wiki, &home(), UserId(8), "B", Version(0)).await.unwrap();
        assert!(!r.success);
        assert_eq!(svc.list_versions(wiki, &home()).await.unwrap().len(), 1);

        let r = svc.store(wiki, &home(), UserId(8), "B", Version(1)).await.unwrap();
        assert!(r.success);

        let history = svc.list_versions(wiki, &home()).await.unwrap().sorted();
        assert_eq!(history.list.len(), 2);
        assert_eq!((history.list[0].number, history.list[0].user_id), (Version(1), UserId(7)));
        assert_eq!((history.list[1].number, history.list[1].user_id), (Version(2), UserId(8)));

        let r = svc.delete(wiki, &home(), Version(1)).await.unwrap();
        assert!(r.success);
        let c = svc.load(wiki, &home(), Version(1)).await.unwrap();
        assert_eq!(c, Content::sentinel());

        let c = svc.load(wiki, &home(), Version::LATEST).await.unwrap();
        assert_eq!((c.version, c.text.as_str()), (Version(2), "B"));
    }

    #[tokio::test]
    async fn load_missing_page_is_sentinel() {
        let (svc, _) = service();
        let c = svc.load(WikiId(3), &home(), Version::LATEST).await.unwrap();
        assert_eq!(c.version, Version(0));
        assert!(!c.exists());
    }

    #[tokio::test]
    async fn load_missing_version_is_sentinel() {
        let (svc, _) = service();
        svc.store(WikiId(1), &home(), UserId(1), "x", Version(0)).await.unwrap();
        let c = svc.load(WikiId(1), &home(), Version(9)).await.unwrap();
        assert_eq!(c, Content::sentinel());
    }

    #[tokio::test]
    async fn load_exact_version() {
        let (svc, _) = service();
        for (last, text) in ["one", "two", "three"].into_iter().enumerate() {
            let r = svc
                .store(WikiId(1), &home(), UserId(1), text, Version(last as u64))
                .await
                .unwrap();
            assert!(r.success);
        }
        let c = svc.load(WikiId(1), &home(), Version(2)).await.unwrap();
        assert_eq!((c.version, c.text.as_str()), (Version(2), "two"));
        let c = svc.load(WikiId(1), &home(), Version::LATEST).await.unwrap();
        assert_eq!((c.version, c.text.as_str()), (Version(3), "three"));
    }

    #[tokio::test]
    async fn load_reports_creation_time() {
        let (svc, _) = service();
        let before = unix_now();
        svc.store(WikiId(1), &home(), UserId(1), "x", Version(0)).await.unwrap();
        let after = unix_now();

        let c = svc.load(WikiId(1), &home(), Version::LATEST).await.unwrap();
        assert!(c.created_at >= before && c.created_at <= after);
    }

    fn unix_now() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64
    }

    #[tokio::test]
    async fn pages_and_wikis_are_independent() {
        let (svc, _) = service();
        let about = PageRef::from("about");
        assert!(svc.store(WikiId(1), &home(), UserId(1), "h", Version(0)).await.unwrap().success);
        assert!(svc.store(WikiId(1), &about, UserId(1), "a", Version(0)).await.unwrap().success);
        assert!(svc.store(WikiId(2), &home(), UserId(1), "h2", Version(0)).await.unwrap().success);

        assert_eq!(numbers(&svc.list_versions(WikiId(1), &home()).await.unwrap()), vec![1]);
        let c = svc.load(WikiId(2), &home(), Version::LATEST).await.unwrap();
        assert_eq!(c.text, "h2");
    }

    #[tokio::test]
    async fn store_with_stale_last_never_writes() {
        let (svc, backend) = service();
        svc.store(WikiId(1), &home(), UserId(1), "a", Version(0)).await.unwrap();
        svc.store(WikiId(1), &home(), UserId(1), "b", Version(1)).await.unwrap();

        let r = svc.store(WikiId(1), &home(), UserId(2), "late", Version(1)).await.unwrap();
        assert!(!r.success);
        assert_eq!(backend.len(&svc.config().namespace()).unwrap(), 2);
        let c = svc.load(WikiId(1), &home(), Version::LATEST).await.unwrap();
        assert_eq!(c.text, "b");
    }

    #[tokio::test]
    async fn store_at_version_ceiling_is_rejected() {
        let (svc, backend) = service();
        let r = svc
            .store(WikiId(1), &home(), UserId(1), "x", Version(u64::MAX))
            .await
            .unwrap();
        assert!(!r.success);
        assert_eq!(backend.total_sessions(), 0);
    }

    #[tokio::test]
    async fn delete_missing_version_succeeds() {
        let (svc, _) = service();
        assert!(svc.delete(WikiId(1), &home(), Version(4)).await.unwrap().success);
        assert!(svc.delete(WikiId(1), &home(), Version(4)).await.unwrap().success);
    }

    #[tokio::test]
    async fn delete_touches_only_named_version() {
        let (svc, _) = service();
        for last in 0..3 {
            svc.store(WikiId(1), &home(), UserId(1), "t", Version(last)).await.unwrap();
        }
        svc.delete(WikiId(1), &home(), Version(2)).await.unwrap();
        assert_eq!(numbers(&svc.list_versions(WikiId(1), &home()).await.unwrap()), vec![1, 3]);
    }

    #[tokio::test]
    async fn empty_history_for_unknown_page() {
        let (svc, _) = service();
        assert!(svc.list_versions(WikiId(1), &home()).await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_writers_single_winner() {
        let (svc, _) = service();
        let svc = Arc::new(svc);
        svc.store(WikiId(1), &home(), UserId(0), "base", Version(0)).await.unwrap();

        let mut handles = Vec::new();
        for user in 1..=16u64 {
            let svc = Arc::clone(&svc);
            handles.push(tokio::spawn(async move {
                svc.store(WikiId(1), &home(), UserId(user), "edit", Version(1)).await.unwrap()
            }));
        }
        let mut wins = 0;
        for handle in handles {
            if handle.await.unwrap().success {
                wins += 1;
            }
        }
        assert_eq!(wins, 1);
        assert_eq!(numbers(&svc.list_versions(WikiId(1), &home()).await.unwrap()), vec![1, 2]);
        let c = svc.load(WikiId(1), &home(), Version::LATEST).await.unwrap();
        assert_eq!(c.version, Version(2));
    }

    #[tokio::test]
    async fn sessions_released_after_every_operation() {
        let (svc, backend) = service();
        svc.store(WikiId(1), &home(), UserId(1), "a", Version(0)).await.unwrap();
        svc.store(WikiId(1), &home(), UserId(1), "a", Version(0)).await.unwrap();
        svc.load(WikiId(1), &home(), Version::LATEST).await.unwrap();
        svc.list_versions(WikiId(1), &home()).await.unwrap();
        svc.delete(WikiId(1), &home(), Version(1)).await.unwrap();
        assert_eq!(backend.total_sessions(), 5);
        assert_eq!(backend.open_sessions(), 0);
    }

    #[tokio::test]
    async fn unreachable_backend_is_internal_error() {
        let (svc, backend) = service();
        backend.set_available(false);

        assert_eq!(
            svc.load(WikiId(1), &home(), Version::LATEST).await.unwrap_err(),
            ServiceError::Internal
        );
        assert_eq!(
            svc.store(WikiId(1), &home(), UserId(1), "x", Version(0)).await.unwrap_err(),
            ServiceError::Internal
        );
        assert_eq!(
            svc.list_versions(WikiId(1), &home()).await.unwrap_err(),
            ServiceError::Internal
        );
        assert_eq!(
            svc.delete(WikiId(1), &home(), Version(1)).await.unwrap_err(),
            ServiceError::Internal
        );
        assert_eq!(backend.open_sessions(), 0);
    }

    #[tokio::test]
    async fn error_text_hides_backend_detail() {
        let (svc, backend) = service();
        backend.set_available(false);
        let err = svc.load(WikiId(1), &home(), Version::LATEST).await.unwrap_err();
        assert_eq!(err.to_string(), "internal service error");
    }

    #[tokio::test]
    async fn undecodable_record_is_internal_error() {
        let (svc, backend) = service();
        let key = PageKey::new(WikiId(1), "home", Version(1));
        let mut doc = page_document(&key, UserId(1), "x");
        doc.insert(fields::VERSION.into(), Value::from("one"));
        backend.insert_raw(&svc.config().namespace(), doc).unwrap();

        let err = svc.list_versions(WikiId(1), &home()).await.unwrap_err();
        assert_eq!(err, ServiceError::Internal);
    }

    #[tokio::test]
    async fn record_without_id_is_internal_error() {
        let (svc, backend) = service();
        let key = PageKey::new(WikiId(1), "home", Version(1));
        backend
            .insert_raw(&svc.config().namespace(), page_document(&key, UserId(1), "x"))
            .unwrap();

        let err = svc.load(WikiId(1), &home(), Version(1)).await.unwrap_err();
        assert_eq!(err, ServiceError::Internal);
    }

    #[tokio::test]
    async fn slow_backend_times_out_and_releases() {
        let backend = InMemoryBackend::new();
        let config = ServiceConfig {
            operation_timeout_ms: 20,
            ..ServiceConfig::default()
        };
        let svc = WikiService::new(Arc::new(backend.clone()), config);
        backend.set_latency(Duration::from_millis(200));

        let err = svc.load(WikiId(1), &home(), Version::LATEST).await.unwrap_err();
        assert_eq!(err, ServiceError::Internal);
        assert_eq!(backend.open_sessions(), 0);
    }

    #[tokio::test]
    async fn cancelled_store_releases_session_and_writes_nothing() {
        let (svc, backend) = service();
        let svc = Arc::new(svc);
        backend.set_latency(Duration::from_millis(200));

        let task = {
            let svc = Arc::clone(&svc);
            tokio::spawn(async move {
                svc.store(WikiId(1), &home(), UserId(1), "x", Version(0)).await
            })
        };
        // Let the connect finish and the insert start waiting.
        tokio::time::sleep(Duration::from_millis(300)).await;
        task.abort();
        assert!(task.await.unwrap_err().is_cancelled());

        assert_eq!(backend.open_sessions(), 0);
        backend.set_latency(Duration::ZERO);
        let c = svc.load(WikiId(1), &home(), Version::LATEST).await.unwrap();
        assert_eq!(c, Content::sentinel());
    }

    #[tokio::test]
    async fn custom_collection_is_used() {
        let backend = InMemoryBackend::new();
        let config = ServiceConfig {
            collection_name: "revisions".into(),
            ..ServiceConfig::default()
        };
        let svc = WikiService::new(Arc::new(backend.clone()), config);
        svc.store(WikiId(1), &home(), UserId(1), "x", Version(0)).await.unwrap();

        assert_eq!(backend.len(&Namespace::new("puzzleWiki", "revisions")).unwrap(), 1);
        assert_eq!(backend.len(&Namespace::new("puzzleWiki", "pages")).unwrap(), 0);
    }

    #[tokio::test]
    async fn works_behind_trait_object() {
        let backend: Arc<dyn PageBackend> = Arc::new(InMemoryBackend::new());
        let svc = WikiService::new(backend, ServiceConfig::default());
        assert!(svc.store(WikiId(1), &home(), UserId(1), "x", Version(0)).await.unwrap().success);
        assert_eq!(svc.load(WikiId(1), &home(), Version(1)).await.unwrap().text, "x");
    }

    mod logging {
        use super::*;
        use std::collections::HashMap;
        use std::fmt;
        use std::sync::Mutex;

        use tracing::field::{Field, Visit};
        use tracing::subscriber::DefaultGuard;
        use tracing::{Event, Level, Subscriber};
        use tracing_subscriber::layer::{Context, SubscriberExt};
        use tracing_subscriber::Layer;

        #[derive(Debug)]
        struct Captured {
            level: Level,
            fields: HashMap<String, String>,
        }

        /// Layer that keeps every event with its fields rendered as strings.
        #[derive(Clone, Default)]
        struct Capture {
            events: Arc<Mutex<Vec<Captured>>>,
        }

        impl Capture {
            fn install() -> (Self, DefaultGuard) {
                let capture = Self::default();
                let subscriber = tracing_subscriber::registry().with(capture.clone());
                (capture, tracing::subscriber::set_default(subscriber))
            }

            fn at(&self, level: Level) -> Vec<HashMap<String, String>> {
                self.events
                    .lock()
                    .unwrap()
                    .iter()
                    .filter(|e| e.level == level)
                    .map(|e| e.fields.clone())
                    .collect()
            }
        }

        struct Fields<'a>(&'a mut HashMap<String, String>);

        impl Visit for Fields<'_> {
            fn record_str(&mut self, field: &Field, value: &str) {
                self.0.insert(field.name().to_string(), value.to_string());
            }

            fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
                self.0.insert(field.name().to_string(), format!("{value:?}"));
            }
        }

        impl<S: Subscriber> Layer<S> for Capture {
            fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
                let mut fields = HashMap::new();
                event.record(&mut Fields(&mut fields));
                self.events.lock().unwrap().push(Captured {
                    level: *event.metadata().level(),
                    fields,
                });
            }
        }

        #[tokio::test]
        async fn backend_failure_logged_once_at_error() {
            let (capture, _guard) = Capture::install();
            let (svc, backend) = service();
            backend.set_available(false);

            let err = svc.load(WikiId(3), &home(), Version::LATEST).await.unwrap_err();
            assert_eq!(err, ServiceError::Internal);

            let errors = capture.at(Level::ERROR);
            assert_eq!(errors.len(), 1);
            let fields = &errors[0];
            assert_eq!(fields.get("operation").map(String::as_str), Some("load"));
            assert_eq!(fields.get("wiki_id").map(String::as_str), Some("3"));
            assert_eq!(fields.get("page_ref").map(String::as_str), Some("home"));
            assert!(fields.contains_key("error"));
            assert!(capture.at(Level::WARN).is_empty());
        }

        #[tokio::test]
        async fn conflict_and_not_found_stay_below_warn() {
            let (capture, _guard) = Capture::install();
            let (svc, _backend) = service();

            assert!(svc.store(WikiId(1), &home(), UserId(1), "a", Version(0)).await.unwrap().success);
            assert!(!svc.store(WikiId(1), &home(), UserId(2), "b", Version(0)).await.unwrap().success);
            assert!(!svc.store(WikiId(1), &home(), UserId(2), "b", Version(u64::MAX)).await.unwrap().success);
            let missing = svc.load(WikiId(1), &PageRef::from("nowhere"), Version::LATEST).await.unwrap();
            assert!(!missing.exists());
            let missing = svc.load(WikiId(1), &home(), Version(9)).await.unwrap();
            assert!(!missing.exists());

            assert!(capture.at(Level::ERROR).is_empty());
            assert!(capture.at(Level::WARN).is_empty());
            // The conflict is still visible at debug.
            assert!(!capture.at(Level::DEBUG).is_empty());
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn runtime() -> tokio::runtime::Runtime {
            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap()
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            #[test]
            fn sequential_writes_leave_no_gaps(k in 1u64..24, users in proptest::collection::vec(0u64..100, 24)) {
                let rt = runtime();
                let (svc, _) = service();
                rt.block_on(async {
                    for last in 0..k {
                        let user = UserId(users[last as usize]);
                        let r = svc.store(WikiId(1), &home(), user, "t", Version(last)).await.unwrap();
                        prop_assert!(r.success);

                        let c = svc.load(WikiId(1), &home(), Version::LATEST).await.unwrap();
                        prop_assert_eq!(c.version, Version(last + 1));
                    }
                    let history = svc.list_versions(WikiId(1), &home()).await.unwrap();
                    prop_assert_eq!(numbers(&history), (1..=k).collect::<Vec<_>>());
                    Ok(())
                })?;
            }

            #[test]
            fn stale_writes_are_rejected(k in 1u64..12, stale in 0u64..12) {
                prop_assume!(stale < k);
                let rt = runtime();
                let (svc, _) = service();
                rt.block_on(async {
                    for last in 0..k {
                        svc.store(WikiId(1), &home(), UserId(1), "t", Version(last)).await.unwrap();
                    }
                    let r = svc.store(WikiId(1), &home(), UserId(2), "late", Version(stale)).await.unwrap();
                    prop_assert!(!r.success);
                    prop_assert_eq!(svc.list_versions(WikiId(1), &home()).await.unwrap().len() as u64, k);
                    Ok(())
                })?;
            }
        }
    }
}
