//! The stored document shape and its author.
//!
//! Every field is optional at construction time. The repository only ever
//! looks at `id` when storing; everything else is caller-owned data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value, to_value};

use crate::error::DocumentStoreResult;

/// The author of a [`Document`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl Author {
    /// Creates a new author builder for fluent construction.
    pub fn builder() -> AuthorBuilder {
        AuthorBuilder::default()
    }
}

/// The unit of storage in a repository.
///
/// `id` is the repository key. When it is absent or blank on upsert the
/// repository generates one and writes it back into the caller's value.
/// `created` belongs to the caller and is never generated or rewritten.
///
/// # Example
///
/// ```ignore
/// use docstash::prelude::*;
///
/// let document = Document::builder()
///     .title("Quarterly report")
///     .content("budget figures")
///     .author(Author::builder().id("a1").name("Alice").build())
///     .created(chrono::Utc::now())
///     .build();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    /// Creates a new document builder for fluent construction.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// Returns the document id, if one has been assigned.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the id of the document's author, if both are present.
    pub fn author_id(&self) -> Option<&str> {
        self.author
            .as_ref()
            .and_then(|author| author.id.as_deref())
    }

    /// Returns `true` if the id is present and contains a non-whitespace character.
    pub fn has_identity(&self) -> bool {
        self.id().is_some_and(|id| !is_blank(id))
    }

    /// Converts this document to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> DocumentStoreResult<Value> {
        Ok(to_value(self)?)
    }

    /// Creates a document from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    pub fn from_json(value: Value) -> DocumentStoreResult<Self> {
        Ok(from_value(value)?)
    }
}

/// Empty and whitespace-only ids count as missing.
pub(crate) fn is_blank(id: &str) -> bool {
    id.chars().all(is_blank_char)
}

/// Separators and ASCII control whitespace are blank; no-break spaces are not,
/// so an id made of U+00A0 is a real id.
fn is_blank_char(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        c => c.is_whitespace(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthorBuilder {
    author: Author,
}

impl AuthorBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.author.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.author.name = Some(name.into());
        self
    }

    pub fn build(self) -> Author {
        self.author
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Sets an explicit id. Leave unset to have the repository generate one.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.document.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.document.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.document.content = Some(content.into());
        self
    }

    pub fn author(mut self, author: Author) -> Self {
        self.document.author = Some(author);
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.document.created = Some(created);
        self
    }

    /// Builds and returns the final document.
    pub fn build(self) -> Document {
        self.document
    }
}
