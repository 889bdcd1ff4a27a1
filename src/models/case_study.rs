//! Case study model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use super::schema::{Field, FieldKind, Schema};
use super::Entity;
use crate::catalog;
use crate::db::Collection;

/// A client engagement write-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CaseStudy {
    #[serde(default = "super::new_id")]
    pub id: String,
    pub title: String,
    pub client: String,
    pub challenge: String,
    pub solution: String,
    pub results: Vec<String>,
    /// Open key/value mapping, shape left to the author
    pub metrics: Map<String, Value>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Schema for CaseStudy {
    const FIELDS: &'static [Field] = &[
        Field::optional("id", FieldKind::Text),
        Field::required("title", FieldKind::Text),
        Field::required("client", FieldKind::Text),
        Field::required("challenge", FieldKind::Text),
        Field::required("solution", FieldKind::Text),
        Field::required("results", FieldKind::TextList),
        Field::required("metrics", FieldKind::Object),
        Field::optional("image_url", FieldKind::Text),
    ];
}

impl Entity for CaseStudy {
    const COLLECTION: Collection = Collection::CaseStudies;

    fn fallback() -> Option<Vec<Self>> {
        Some(catalog::case_studies())
    }
}
