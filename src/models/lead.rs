//! Contact lead model. The only entity this backend writes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{Field, FieldKind, Schema};
use super::{timestamp, Entity};
use crate::db::Collection;

/// A contact-form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactLead {
    #[serde(default = "super::new_id")]
    pub id: String,
    pub name: String,
    #[validate(email(message = "value is not a valid email address"))]
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// general, strategy_call, resource_download; other values are kept as-is
    #[serde(default = "default_lead_type")]
    pub lead_type: String,
    #[serde(with = "timestamp", default = "timestamp::now")]
    pub timestamp: DateTime<Utc>,
}

impl ContactLead {
    /// Build a lead from validated input, assigning a fresh id and the current instant.
    pub fn new(input: ContactLeadCreate) -> Self {
        Self {
            id: super::new_id(),
            name: input.name,
            email: input.email,
            company: input.company,
            message: input.message,
            phone: input.phone,
            lead_type: input.lead_type,
            timestamp: timestamp::now(),
        }
    }
}

impl Schema for ContactLead {
    const FIELDS: &'static [Field] = &[
        Field::optional("id", FieldKind::Text),
        Field::required("name", FieldKind::Text),
        Field::required("email", FieldKind::Text),
        Field::optional("company", FieldKind::Text),
        Field::optional("message", FieldKind::Text),
        Field::optional("phone", FieldKind::Text),
        Field::optional("lead_type", FieldKind::Text),
        Field::optional("timestamp", FieldKind::Timestamp),
    ];
}

impl Entity for ContactLead {
    const COLLECTION: Collection = Collection::Contacts;
    const READ_LIMIT: usize = 1000;
}

/// Request body for submitting a contact lead.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactLeadCreate {
    pub name: String,
    #[validate(email(message = "value is not a valid email address"))]
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_lead_type")]
    pub lead_type: String,
}

impl Schema for ContactLeadCreate {
    const FIELDS: &'static [Field] = &[
        Field::required("name", FieldKind::Text),
        Field::required("email", FieldKind::Text),
        Field::optional("company", FieldKind::Text),
        Field::optional("message", FieldKind::Text),
        Field::optional("phone", FieldKind::Text),
        Field::optional("lead_type", FieldKind::Text),
    ];
}

fn default_lead_type() -> String {
    "general".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_applies_defaults_and_drops_extras() {
        let input = ContactLeadCreate::from_document(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "is_admin": true,
            "id": "client-chosen"
        }))
        .unwrap();

        let lead = ContactLead::new(input);
        assert_ne!(lead.id, "client-chosen");
        assert!(!lead.id.is_empty());
        assert_eq!(lead.lead_type, "general");
        assert!(lead.company.is_none());

        let body = serde_json::to_value(&lead).unwrap();
        assert!(body.get("is_admin").is_none());
        assert_eq!(body["company"], serde_json::Value::Null);
    }

    #[test]
    fn test_invalid_email_is_named() {
        let err = ContactLeadCreate::from_document(json!({
            "name": "Ada",
            "email": "not-an-email"
        }))
        .unwrap_err();
        assert_eq!(err.field_names(), vec!["email"]);
        assert_eq!(err.fields[0].message, "value is not a valid email address");
    }

    #[test]
    fn test_stored_lead_reparses_textual_timestamp() {
        let lead = ContactLead::from_document(json!({
            "id": "lead-1",
            "name": "Ada",
            "email": "ada@example.com",
            "lead_type": "strategy_call",
            "timestamp": "2024-05-01T09:00:00.123456+00:00"
        }))
        .unwrap();

        assert_eq!(lead.timestamp.timestamp(), 1_714_554_000);
        assert_eq!(lead.timestamp.timestamp_subsec_micros(), 123_456);
        assert_eq!(lead.lead_type, "strategy_call");
    }

    #[test]
    fn test_stored_lead_with_bad_timestamp_is_rejected() {
        let err = ContactLead::from_document(json!({
            "id": "lead-1",
            "name": "Ada",
            "email": "ada@example.com",
            "timestamp": "last tuesday"
        }))
        .unwrap_err();
        assert_eq!(err.field_names(), vec!["timestamp"]);
    }
}
