//! The repository facade: identity rules on top of a storage backend.
//!
//! [`DocumentRepository`] is the only place where document ids are generated.
//! Backends key every document on its own, already resolved id.
//!
//! # Example
//!
//! ```ignore
//! use docstash::{prelude::*, memory::InMemoryBackend};
//!
//! let repository = DocumentRepository::new(InMemoryBackend::new());
//!
//! let mut document = Document::builder().title("Report A").build();
//! repository.upsert(&mut document).await?;
//!
//! // The generated id was written back into `document`.
//! let stored = repository.find_by_id(document.id()).await?;
//! ```

use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{
    backend::RepositoryBackend,
    document::{Document, is_blank},
    error::{DocumentStoreError, DocumentStoreResult},
    search::SearchRequest,
};

/// A document repository bound to a specific backend implementation.
///
/// The repository owns its backend; share it by reference, or construct it
/// over `&B` to let several repositories borrow one backend.
#[derive(Debug)]
pub struct DocumentRepository<B: RepositoryBackend> {
    backend: B,
}

impl<B: RepositoryBackend> DocumentRepository<B> {
    /// Creates a new repository over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns a reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Inserts or fully replaces a document, keyed by its id.
    ///
    /// If the document's id is absent, empty or whitespace-only, a random UUID is
    /// generated and assigned to `document` itself before storing, so the caller
    /// sees the new id. A non-blank id is used verbatim. `created` is never touched.
    ///
    /// Returns the document as stored.
    ///
    /// # Errors
    ///
    /// Only if the backend fails. The in-memory backend never does.
    #[instrument(skip(self, document))]
    pub async fn upsert(&self, document: &mut Document) -> DocumentStoreResult<Document> {
        if !document.has_identity() {
            let generated = Uuid::new_v4().to_string();
            debug!(doc_id = %generated, "Generated id for document without identity");
            document.id = Some(generated);
        }

        debug!(doc_id = ?document.id, "Upserting document");
        self.backend
            .put_document(document.clone())
            .await?;

        Ok(document.clone())
    }

    /// Looks up a document by id.
    ///
    /// Accepts `&str` or `Option<&str>`; `None` stands in for a missing id.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::InvalidArgument`] if the id is `None`, empty or
    /// whitespace-only. An unknown id is not an error and yields `Ok(None)`.
    #[instrument(skip(self, id))]
    pub async fn find_by_id<'a>(
        &self,
        id: impl Into<Option<&'a str>>,
    ) -> DocumentStoreResult<Option<Document>> {
        let id = match id.into() {
            Some(id) if !is_blank(id) => id,
            _ => {
                return Err(DocumentStoreError::InvalidArgument(
                    "id is null or empty".to_string(),
                ));
            }
        };

        debug!(doc_id = %id, "Finding document by id");
        self.backend.get_document(id).await
    }

    /// Returns every stored document matching all active filters of `request`.
    ///
    /// Result order is unspecified. A request with no active filter returns every
    /// document; contradictory bounds simply return nothing.
    #[instrument(skip(self, request))]
    pub async fn search(&self, request: &SearchRequest) -> DocumentStoreResult<Vec<Document>> {
        let active_filters = request
            .active_filters()
            .iter()
            .map(|filter| filter.name())
            .collect::<Vec<_>>();

        let documents = self.backend.search_documents(request).await?;

        debug!(?active_filters, count = documents.len(), "Searched documents");
        Ok(documents)
    }

    /// Returns the number of stored documents.
    pub async fn len(&self) -> DocumentStoreResult<usize> {
        self.backend.count_documents().await
    }

    /// Returns `true` if nothing has been stored yet.
    pub async fn is_empty(&self) -> DocumentStoreResult<bool> {
        Ok(self.len().await? == 0)
    }

    /// Shuts down the repository and its backend.
    pub async fn shutdown(self) -> DocumentStoreResult<()> {
        self.backend.shutdown().await?;
        Ok(())
    }
}
