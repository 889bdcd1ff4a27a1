//! Document store adapter.
//!
//! The service layer only sees [`DocumentStore`]: insert one document, or
//! find many with a projection and a cap. SQLite backs it in production.
//!
//! Finds hand back every stored row, including ones that are not JSON
//! objects, so the caller can tell an empty collection from a corrupt one.

#[cfg(test)]
mod memory;
mod sqlite;

#[cfg(test)]
pub use memory::*;
pub use sqlite::*;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::AppError;

/// A stored document: a JSON object.
pub type Document = Map<String, Value>;

/// Key under which a store exposes its own identifier for a document.
pub const INTERNAL_ID: &str = "_id";

/// Named collections known to the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Contacts,
    Testimonials,
    CaseStudies,
    Team,
    Services,
    Resources,
    BlogPosts,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Contacts => "contacts",
            Collection::Testimonials => "testimonials",
            Collection::CaseStudies => "case_studies",
            Collection::Team => "team",
            Collection::Services => "services",
            Collection::Resources => "resources",
            Collection::BlogPosts => "blog_posts",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields to leave out of documents returned by a find.
#[derive(Debug, Clone, Default)]
pub struct Projection {
    excluded: Vec<&'static str>,
}

impl Projection {
    /// Everything except the store's internal identifier.
    pub fn without_internal_id() -> Self {
        Self {
            excluded: vec![INTERNAL_ID],
        }
    }

    pub fn apply(&self, document: &mut Document) {
        for key in &self.excluded {
            document.remove(*key);
        }
    }
}

/// Minimal persistence surface the content service depends on.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist one new document. Never modifies existing documents.
    async fn insert_one(&self, collection: Collection, document: Document) -> Result<(), AppError>;

    /// Fetch up to `limit` stored values in insertion order. The projection
    /// applies to those that are documents.
    async fn find_many(
        &self,
        collection: Collection,
        projection: &Projection,
        limit: usize,
    ) -> Result<Vec<Value>, AppError>;
}

/// Serialize an entity into the document form handed to a store.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, AppError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::Internal(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}
