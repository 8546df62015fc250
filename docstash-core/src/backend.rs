//! Storage backend abstraction for the document repository.
//!
//! The [`RepositoryBackend`] trait is the seam between the identity rules owned by
//! [`DocumentRepository`](crate::repository::DocumentRepository) and whatever keeps
//! the documents. Backends receive documents whose id has already been resolved
//! and key them on that id; they never generate ids themselves.
//!
//! # Traits
//!
//! - [`RepositoryBackend`]: The core trait for storage backends
//! - [`RepositoryBackendBuilder`]: Factory trait for creating backend instances

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{document::Document, error::DocumentStoreResult, search::SearchRequest};

/// Abstract interface for document storage backends.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. Each call must appear atomic: a reader
/// never observes a partially written document and no write is lost.
#[async_trait]
pub trait RepositoryBackend: Send + Sync + Debug {
    /// Stores a document under its own id, replacing any previous value entirely.
    ///
    /// # Errors
    ///
    /// Returns `DocumentStoreError::InvalidArgument` if the document has no id
    /// or a blank one. Backends never generate ids.
    async fn put_document(&self, document: Document) -> DocumentStoreResult<()>;

    /// Retrieves the document stored under `id`, or `None` if there is none.
    async fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>>;

    /// Returns every stored document satisfying all active filters of `request`.
    ///
    /// Order is unspecified.
    async fn search_documents(&self, request: &SearchRequest) -> DocumentStoreResult<Vec<Document>>;

    /// Returns the number of stored documents.
    async fn count_documents(&self) -> DocumentStoreResult<usize>;

    /// Cleanly shuts down the backend, releasing all resources.
    ///
    /// The default implementation is a no-op.
    async fn shutdown(self) -> DocumentStoreResult<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

#[async_trait]
impl<B> RepositoryBackend for &B
where
    B: RepositoryBackend,
{
    async fn put_document(&self, document: Document) -> DocumentStoreResult<()> {
        (*self).put_document(document).await
    }

    async fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        (*self).get_document(id).await
    }

    async fn search_documents(
        &self,
        request: &SearchRequest,
    ) -> DocumentStoreResult<Vec<Document>> {
        (*self).search_documents(request).await
    }

    async fn count_documents(&self) -> DocumentStoreResult<usize> {
        (*self).count_documents().await
    }
}

/// Factory trait for constructing backends from their configuration.
#[async_trait]
pub trait RepositoryBackendBuilder: Send {
    type Backend: RepositoryBackend;

    /// Builds and returns a new backend instance.
    async fn build(self) -> DocumentStoreResult<Self::Backend>;
}
