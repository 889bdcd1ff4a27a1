//! Resource library model (FAQs, templates, videos, articles).

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{Field, FieldKind, Schema};
use super::Entity;
use crate::catalog;
use crate::db::Collection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Resource {
    #[serde(default = "super::new_id")]
    pub id: String,
    pub title: String,
    /// Free-form tag: faq, template, video, article, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl Schema for Resource {
    const FIELDS: &'static [Field] = &[
        Field::optional("id", FieldKind::Text),
        Field::required("title", FieldKind::Text),
        Field::required("type", FieldKind::Text),
        Field::required("content", FieldKind::Text),
        Field::optional("file_url", FieldKind::Text),
        Field::optional("thumbnail_url", FieldKind::Text),
    ];
}

impl Entity for Resource {
    const COLLECTION: Collection = Collection::Resources;

    fn fallback() -> Option<Vec<Self>> {
        Some(catalog::resources())
    }
}
