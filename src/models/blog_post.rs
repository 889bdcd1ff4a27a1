//! Blog post model. Posts are authored elsewhere; this backend only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{Field, FieldKind, Schema};
use super::{timestamp, Entity};
use crate::db::Collection;

/// An article on the site's insights page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BlogPost {
    #[serde(default = "super::new_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub author_role: Option<String>,
    /// Drafts are stored but never served
    #[serde(default)]
    pub published: bool,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    /// Newest first by creation time; undated posts sort last.
    pub fn sort_newest_first(posts: &mut [BlogPost]) {
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }
}

impl Schema for BlogPost {
    const FIELDS: &'static [Field] = &[
        Field::optional("id", FieldKind::Text),
        Field::required("title", FieldKind::Text),
        Field::required("slug", FieldKind::Text),
        Field::optional("excerpt", FieldKind::Text),
        Field::required("content", FieldKind::Text),
        Field::optional("category", FieldKind::Text),
        Field::optional("tags", FieldKind::TextList),
        Field::optional("featured_image", FieldKind::Text),
        Field::optional("author", FieldKind::Text),
        Field::optional("author_role", FieldKind::Text),
        Field::optional("published", FieldKind::Boolean),
        Field::optional("created_at", FieldKind::Timestamp),
        Field::optional("published_at", FieldKind::Timestamp),
        Field::optional("updated_at", FieldKind::Timestamp),
    ];
}

impl Entity for BlogPost {
    const COLLECTION: Collection = Collection::BlogPosts;
}
