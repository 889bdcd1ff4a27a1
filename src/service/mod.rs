//! Content service: one orchestration point per entity kind.
//!
//! Writes validate, stamp and insert a single lead. Reads fetch a capped
//! batch, substitute the fallback catalog when the collection is empty, and
//! re-validate every stored document against its schema. Blog posts are
//! further filtered to published ones.

use std::sync::Arc;

use serde_json::Value;

use crate::db::{to_document, DocumentStore, Projection};
use crate::errors::AppError;
use crate::models::{
    BlogPost, CaseStudy, ContactLead, ContactLeadCreate, Entity, Resource, Schema, Service, Stats,
    TeamMember, Testimonial,
};

/// Reads and writes the site's content collections.
#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn DocumentStore>,
}

impl ContentService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a new contact lead.
    pub async fn create_lead(&self, raw: Value) -> Result<ContactLead, AppError> {
        let input = ContactLeadCreate::from_document(raw)?;
        let lead = ContactLead::new(input);

        self.store
            .insert_one(ContactLead::COLLECTION, to_document(&lead)?)
            .await?;

        tracing::info!(lead_id = %lead.id, lead_type = %lead.lead_type, "Contact lead recorded");
        Ok(lead)
    }

    pub async fn list_leads(&self) -> Result<Vec<ContactLead>, AppError> {
        self.list().await
    }

    pub async fn list_testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        self.list().await
    }

    pub async fn list_case_studies(&self) -> Result<Vec<CaseStudy>, AppError> {
        self.list().await
    }

    pub async fn list_team(&self) -> Result<Vec<TeamMember>, AppError> {
        self.list().await
    }

    pub async fn list_services(&self) -> Result<Vec<Service>, AppError> {
        self.list().await
    }

    pub async fn list_resources(&self) -> Result<Vec<Resource>, AppError> {
        self.list().await
    }

    /// Published posts, newest first.
    pub async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        let mut posts: Vec<BlogPost> = self.list().await?;
        posts.retain(|post| post.published);
        BlogPost::sort_newest_first(&mut posts);
        Ok(posts)
    }

    /// A single published post by slug. Drafts are reported as missing.
    pub async fn get_blog_post(&self, slug: &str) -> Result<BlogPost, AppError> {
        self.list_blog_posts()
            .await?
            .into_iter()
            .find(|post| post.slug == slug)
            .ok_or_else(|| AppError::NotFound(format!("Blog post {} not found", slug)))
    }

    /// Headline numbers. Computed fresh, no store access.
    pub fn stats(&self) -> Stats {
        Stats::default()
    }

    async fn list<T: Entity>(&self) -> Result<Vec<T>, AppError> {
        let collection = T::COLLECTION;
        let documents = self
            .store
            .find_many(collection, &Projection::without_internal_id(), T::READ_LIMIT)
            .await?;

        if documents.is_empty() {
            if let Some(records) = T::fallback() {
                tracing::debug!(%collection, "Collection empty, serving fallback records");
                return Ok(records);
            }
        }

        let records = documents
            .into_iter()
            .filter_map(|document| match T::from_document(document) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(%collection, "Skipping malformed document: {}", e);
                    None
                }
            })
            .collect();

        Ok(records)
    }
}
