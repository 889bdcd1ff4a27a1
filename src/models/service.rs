//! Service offering model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{Field, FieldKind, Schema};
use super::Entity;
use crate::catalog;
use crate::db::Collection;

/// A consulting service line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Service {
    #[serde(default = "super::new_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// Icon name understood by the frontend, e.g. `map-pin`
    pub icon: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub case_study_snippet: Option<String>,
}

impl Schema for Service {
    const FIELDS: &'static [Field] = &[
        Field::optional("id", FieldKind::Text),
        Field::required("title", FieldKind::Text),
        Field::required("description", FieldKind::Text),
        Field::required("icon", FieldKind::Text),
        Field::required("features", FieldKind::TextList),
        Field::optional("case_study_snippet", FieldKind::Text),
    ];
}

impl Entity for Service {
    const COLLECTION: Collection = Collection::Services;

    fn fallback() -> Option<Vec<Self>> {
        Some(catalog::services())
    }
}
