//! In-memory storage implementation for document repositories.
//!
//! Documents live in a single `HashMap` keyed by id, guarded by an async-aware
//! read-write lock.

use std::{collections::HashMap, sync::Arc};
use async_trait::async_trait;
use mea::rwlock::RwLock;
use tracing::{debug, instrument};

use docstash_core::{
    backend::{RepositoryBackend, RepositoryBackendBuilder},
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    search::SearchRequest,
};

use crate::evaluator::DocumentEvaluator;

type DocumentMap = HashMap<String, Document>;


/// Thread-safe in-memory document storage backend.
///
/// # Thread Safety
///
/// `InMemoryBackend` is cloneable and uses an `Arc`-wrapped map, so it can be
/// shared across tasks. Clones of the same instance share the same documents.
/// Writes hold the write lock for the whole replacement, and reads clone what
/// they return while holding the read lock, so a reader never sees a torn document.
///
/// # Performance
///
/// Searches scan every stored document; there is no indexing.
///
/// # Example
///
/// ```ignore
/// use docstash_memory::InMemoryBackend;
/// use docstash_core::{backend::RepositoryBackend, document::Document};
///
/// let backend = InMemoryBackend::new();
/// let document = Document::builder().id("X").title("A").build();
/// backend.put_document(document).await?;
///
/// assert!(backend.get_document("X").await?.is_some());
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryBackend {
    /// document_id -> document
    documents: Arc<RwLock<DocumentMap>>,
}

impl InMemoryBackend {
    /// Creates a new, empty in-memory backend.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty backend whose map is pre-sized for `capacity` documents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            documents: Arc::new(RwLock::new(DocumentMap::with_capacity(capacity))),
        }
    }

    /// Creates a builder for constructing an `InMemoryBackend` with custom options.
    ///
    /// ```ignore
    /// let backend = InMemoryBackend::builder().capacity(1024).build().await?;
    /// ```
    pub fn builder() -> InMemoryBackendBuilder {
        InMemoryBackendBuilder::default()
    }
}


#[async_trait]
impl RepositoryBackend for InMemoryBackend {
    #[instrument(skip(self, document))]
    async fn put_document(&self, document: Document) -> DocumentStoreResult<()> {
        // The map key is always the document's own id
        let id = match document.id() {
            Some(id) if document.has_identity() => id.to_string(),
            _ => {
                return Err(DocumentStoreError::InvalidArgument(
                    "document id is null or empty".to_string(),
                ));
            }
        };

        let mut documents = self.documents.write().await;

        if documents.insert(id.clone(), document).is_some() {
            debug!(doc_id = %id, "Replaced existing document in in-memory store");
        } else {
            debug!(doc_id = %id, "Inserted new document into in-memory store");
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        Ok(
            self.documents
                .read()
                .await
                .get(id)
                .cloned()
        )
    }

    #[instrument(skip(self, request))]
    async fn search_documents(
        &self,
        request: &SearchRequest,
    ) -> DocumentStoreResult<Vec<Document>> {
        let documents = self.documents.read().await;

        // No active filter: skip per-document evaluation entirely
        if request.is_unconstrained() {
            return Ok(
                documents
                    .values()
                    .cloned()
                    .collect::<Vec<_>>()
            );
        }

        let matched = DocumentEvaluator::filter_documents(documents.values(), request);
        debug!(scanned = documents.len(), matched = matched.len(), "Scanned in-memory store");

        Ok(matched)
    }

    async fn count_documents(&self) -> DocumentStoreResult<usize> {
        Ok(self.documents.read().await.len())
    }
}


/// Builder for constructing [`InMemoryBackend`] instances.
///
/// # Example
///
/// ```ignore
/// use docstash_memory::InMemoryBackend;
/// use docstash_core::backend::RepositoryBackendBuilder;
///
/// let backend = InMemoryBackend::builder()
///     .capacity(10_000)
///     .build()
///     .await?;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBackendBuilder {
    capacity: usize,
}

impl InMemoryBackendBuilder {
    /// Pre-sizes the document map. Purely a hint; the map grows as needed.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

#[async_trait]
impl RepositoryBackendBuilder for InMemoryBackendBuilder {
    type Backend = InMemoryBackend;

    /// This always succeeds and returns a freshly initialized backend.
    async fn build(self) -> DocumentStoreResult<Self::Backend> {
        Ok(InMemoryBackend::with_capacity(self.capacity))
    }
}
