//! Search request evaluation for in-memory document filtering.
//!
//! Each active filter is checked against a single document; the conjunction is
//! driven by [`SearchVisitor::visit_request`].

use chrono::{DateTime, Utc};
use tracing::trace;

use docstash_core::{
    document::Document,
    search::{SearchRequest, SearchVisitor},
};

pub(crate) struct DocumentEvaluator<'a> {
    document: &'a Document,
}

impl<'a> DocumentEvaluator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    pub fn evaluate(&mut self, request: &SearchRequest) -> bool {
        self.visit_request(request)
    }

    pub fn filter_documents(
        documents: impl IntoIterator<Item = &'a Document>,
        request: &SearchRequest,
    ) -> Vec<Document> {
        documents
            .into_iter()
            .filter(|doc| DocumentEvaluator::new(doc).evaluate(request))
            .cloned()
            .collect::<Vec<_>>()
    }
}

impl<'a> SearchVisitor for DocumentEvaluator<'a> {
    fn visit_title_prefixes(&mut self, prefixes: &[String]) -> bool {
        match self.document.title.as_deref() {
            Some(title) => prefixes
                .iter()
                .any(|prefix| title.starts_with(prefix.as_str())),
            None => false,
        }
    }

    fn visit_contains_contents(&mut self, needles: &[String]) -> bool {
        match self.document.content.as_deref() {
            Some(content) => needles
                .iter()
                .any(|needle| content.contains(needle.as_str())),
            None => false,
        }
    }

    fn visit_author_ids(&mut self, ids: &[String]) -> bool {
        // A document without an author (or author id) never matches an author filter.
        match self.document.author_id() {
            Some(author_id) => ids.iter().any(|id| id == author_id),
            None => {
                trace!(
                    doc_id = ?self.document.id,
                    "Document has no author id, excluded by author filter"
                );
                false
            }
        }
    }

    fn visit_created_from(&mut self, from: &DateTime<Utc>) -> bool {
        self.document
            .created
            .is_some_and(|created| created > *from)
    }

    fn visit_created_to(&mut self, to: &DateTime<Utc>) -> bool {
        self.document
            .created
            .is_some_and(|created| created < *to)
    }
}
