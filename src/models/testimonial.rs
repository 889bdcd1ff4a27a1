//! Client testimonial model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{Field, FieldKind, Schema};
use super::Entity;
use crate::catalog;
use crate::db::Collection;

/// A quote from a client, shown on the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Testimonial {
    #[serde(default = "super::new_id")]
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// No range is enforced
    #[serde(default = "default_rating")]
    pub rating: i64,
}

fn default_rating() -> i64 {
    5
}

impl Schema for Testimonial {
    const FIELDS: &'static [Field] = &[
        Field::optional("id", FieldKind::Text),
        Field::required("name", FieldKind::Text),
        Field::required("role", FieldKind::Text),
        Field::required("company", FieldKind::Text),
        Field::required("content", FieldKind::Text),
        Field::optional("avatar_url", FieldKind::Text),
        Field::optional("rating", FieldKind::Integer),
    ];
}

impl Entity for Testimonial {
    const COLLECTION: Collection = Collection::Testimonials;

    fn fallback() -> Option<Vec<Self>> {
        Some(catalog::testimonials())
    }
}
