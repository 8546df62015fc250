//! Convenient re-exports of commonly used types from docstash.
//!
//! ```ignore
//! use docstash::prelude::*;
//! ```

pub use docstash_core::{
    backend::{RepositoryBackend, RepositoryBackendBuilder},
    document::{Author, AuthorBuilder, Document, DocumentBuilder},
    error::{DocumentStoreError, DocumentStoreResult},
    repository::DocumentRepository,
    search::{Filter, SearchRequest, SearchRequestBuilder, SearchVisitor},
};
