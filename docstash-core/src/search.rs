//! Search request construction and the predicate-composition visitor.
//!
//! A [`SearchRequest`] carries five independent, optional filters. A filter is
//! *active* when it is present and, for list-valued filters, non-empty. Backends
//! match a document when it satisfies every active filter.
//!
//! ```ignore
//! use docstash::prelude::*;
//!
//! let request = SearchRequest::builder()
//!     .title_prefixes(["Report"])
//!     .author_ids(["a1"])
//!     .build();
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A transient, all-optional search query.
///
/// An absent filter and an empty list constrain nothing. Date bounds are
/// exclusive on both ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Matches titles starting with any of these prefixes.
    pub title_prefixes: Option<Vec<String>>,
    /// Matches content containing any of these substrings.
    pub contains_contents: Option<Vec<String>>,
    /// Matches documents whose author id is one of these.
    pub author_ids: Option<Vec<String>>,
    /// Matches documents created strictly after this instant.
    pub created_from: Option<DateTime<Utc>>,
    /// Matches documents created strictly before this instant.
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Creates a request with no filters, which matches every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new request builder for fluent construction.
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::default()
    }

    /// Returns the filters that constrain this request, in evaluation order.
    pub fn active_filters(&self) -> Vec<Filter<'_>> {
        let mut filters = Vec::with_capacity(5);

        if let Some(prefixes) = active(&self.title_prefixes) {
            filters.push(Filter::TitlePrefixes(prefixes));
        }
        if let Some(needles) = active(&self.contains_contents) {
            filters.push(Filter::ContainsContents(needles));
        }
        if let Some(ids) = active(&self.author_ids) {
            filters.push(Filter::AuthorIds(ids));
        }
        if let Some(from) = &self.created_from {
            filters.push(Filter::CreatedFrom(from));
        }
        if let Some(to) = &self.created_to {
            filters.push(Filter::CreatedTo(to));
        }

        filters
    }

    /// Returns `true` if no filter is active.
    pub fn is_unconstrained(&self) -> bool {
        self.active_filters().is_empty()
    }
}

fn active(values: &Option<Vec<String>>) -> Option<&[String]> {
    values
        .as_deref()
        .filter(|values| !values.is_empty())
}

/// A single active filter borrowed from a [`SearchRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<'a> {
    TitlePrefixes(&'a [String]),
    ContainsContents(&'a [String]),
    AuthorIds(&'a [String]),
    CreatedFrom(&'a DateTime<Utc>),
    CreatedTo(&'a DateTime<Utc>),
}

impl Filter<'_> {
    /// Returns the field name this filter constrains.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::TitlePrefixes(_) => "title_prefixes",
            Filter::ContainsContents(_) => "contains_contents",
            Filter::AuthorIds(_) => "author_ids",
            Filter::CreatedFrom(_) => "created_from",
            Filter::CreatedTo(_) => "created_to",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    /// Sets the title prefixes; a title must start with at least one of them.
    pub fn title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.title_prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the content needles; content must contain at least one of them.
    pub fn contains_contents<I, S>(mut self, needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.contains_contents = Some(needles.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the accepted author ids.
    pub fn author_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.author_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the exclusive lower creation bound.
    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.request.created_from = Some(from);
        self
    }

    /// Sets the exclusive upper creation bound.
    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.request.created_to = Some(to);
        self
    }

    /// Builds and returns the final request.
    pub fn build(self) -> SearchRequest {
        self.request
    }
}

/// Evaluates the filters of a [`SearchRequest`] against one candidate.
///
/// Implementers decide how each dimension matches; [`SearchVisitor::visit_request`]
/// combines the active filters with logical AND and stops at the first miss.
pub trait SearchVisitor {
    fn visit_title_prefixes(&mut self, prefixes: &[String]) -> bool;
    fn visit_contains_contents(&mut self, needles: &[String]) -> bool;
    fn visit_author_ids(&mut self, ids: &[String]) -> bool;
    fn visit_created_from(&mut self, from: &DateTime<Utc>) -> bool;
    fn visit_created_to(&mut self, to: &DateTime<Utc>) -> bool;

    fn visit_filter(&mut self, filter: &Filter<'_>) -> bool {
        match filter {
            Filter::TitlePrefixes(prefixes) => self.visit_title_prefixes(prefixes),
            Filter::ContainsContents(needles) => self.visit_contains_contents(needles),
            Filter::AuthorIds(ids) => self.visit_author_ids(ids),
            Filter::CreatedFrom(from) => self.visit_created_from(from),
            Filter::CreatedTo(to) => self.visit_created_to(to),
        }
    }

    fn visit_request(&mut self, request: &SearchRequest) -> bool {
        for filter in request.active_filters() {
            if !self.visit_filter(&filter) {
                return false;
            }
        }

        true
    }
}
