//! An embeddable, in-memory document repository.
//!
//! This crate is the primary entry point. It re-exports the core types and the
//! in-memory backend.
//!
//! # Features
//!
//! - **Upsert by identity** - Documents without an id get a generated UUID, written back
//!   into the caller's value
//! - **Full replacement** - Storing under an existing id replaces the whole document
//! - **Composable search** - Five optional filters combined with logical AND
//!
//! # Quick Start
//!
//! ```ignore
//! use docstash::{prelude::*, memory::InMemoryBackend};
//! use chrono::Utc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let repository = DocumentRepository::new(InMemoryBackend::new());
//!
//!     let mut document = Document::builder()
//!         .title("Report A")
//!         .content("budget figures")
//!         .author(Author::builder().id("a1").name("Alice").build())
//!         .created(Utc::now())
//!         .build();
//!
//!     // `document.id` is filled in by the repository
//!     repository.upsert(&mut document).await.unwrap();
//!
//!     let found = repository.find_by_id(document.id()).await.unwrap();
//!     assert_eq!(found, Some(document));
//!
//!     let reports = repository
//!         .search(
//!             &SearchRequest::builder()
//!                 .title_prefixes(["Report"])
//!                 .author_ids(["a1"])
//!                 .build(),
//!         )
//!         .await
//!         .unwrap();
//!
//!     println!("Found reports: {:?}", reports);
//! }
//! ```

pub mod prelude;

pub use docstash_core::{backend, document, error, repository, search};

// Re-export chrono so callers can build timestamps without a direct dependency
pub use chrono;

/// In-memory storage backend implementations.
pub mod memory {
    pub use docstash_memory::{InMemoryBackend, InMemoryBackendBuilder};
}

/// A repository backed by the in-memory store.
pub type InMemoryRepository = repository::DocumentRepository<memory::InMemoryBackend>;
