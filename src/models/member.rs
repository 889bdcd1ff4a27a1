//! Team member model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{Field, FieldKind, Schema};
use super::Entity;
use crate::catalog;
use crate::db::Collection;

/// A consultant listed on the team page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TeamMember {
    #[serde(default = "super::new_id")]
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub expertise: Vec<String>,
}

impl Schema for TeamMember {
    const FIELDS: &'static [Field] = &[
        Field::optional("id", FieldKind::Text),
        Field::required("name", FieldKind::Text),
        Field::required("role", FieldKind::Text),
        Field::required("bio", FieldKind::Text),
        Field::optional("linkedin_url", FieldKind::Text),
        Field::optional("avatar_url", FieldKind::Text),
        Field::required("expertise", FieldKind::TextList),
    ];
}

impl Entity for TeamMember {
    const COLLECTION: Collection = Collection::Team;

    fn fallback() -> Option<Vec<Self>> {
        Some(catalog::team())
    }
}
