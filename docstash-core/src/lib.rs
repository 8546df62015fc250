//! Core types for an embeddable, in-memory document repository.
//!
//! This crate provides:
//!
//! - **Documents** ([`document`]) - The fixed document and author shapes with fluent builders
//! - **Search requests** ([`search`]) - All-optional filters and the
//!   [`search::SearchVisitor`] that composes them
//! - **Backends** ([`backend`]) - The storage seam implemented by concrete stores
//! - **Repository** ([`repository`]) - Upsert-by-identity, lookup and search over a backend
//! - **Error handling** ([`error`]) - The error and result types
//!
//! # Example
//!
//! ```ignore
//! use docstash_core::{document::Document, repository::DocumentRepository, search::SearchRequest};
//!
//! let repository = DocumentRepository::new(backend);
//!
//! let mut document = Document::builder().title("Report A").build();
//! repository.upsert(&mut document).await?;
//!
//! let reports = repository
//!     .search(&SearchRequest::builder().title_prefixes(["Report"]).build())
//!     .await?;
//! ```

#[allow(unused_extern_crates)]
extern crate self as docstash_core;

pub mod backend;
pub mod document;
pub mod error;
pub mod repository;
pub mod search;
