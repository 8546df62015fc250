//! In-memory storage backend for docstash.
//!
//! This crate provides a thread-safe, in-memory implementation of the `RepositoryBackend` trait.
//! It uses an async-aware read-write lock for concurrent access and is intended for embedding
//! in a single process.
//!
//! # Features
//!
//! - **Thread-safe access** - Concurrent reads and serialized writes through an async-aware RwLock
//! - **Full-replacement upserts** - Storing under an existing id replaces the whole document
//! - **Full-scan search** - Every search request is evaluated against every stored document
//!
//! # Quick Start
//!
//! ```ignore
//! use docstash::{prelude::*, memory::InMemoryBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = InMemoryBackend::builder().build().await?;
//!     let repository = DocumentRepository::new(backend);
//!
//!     let mut document = Document::builder().title("Report A").build();
//!     repository.upsert(&mut document).await?;
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as docstash_memory;

pub mod store;
mod evaluator;

pub use store::{InMemoryBackend, InMemoryBackendBuilder};
