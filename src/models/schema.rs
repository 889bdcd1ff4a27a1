//! Field tables and validation shared by every entity kind.
//!
//! Raw input (a request body or a stored document) is checked against the
//! entity's declared fields before serde ever sees it, so that every
//! offending field can be named in a single error.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use validator::Validate;

use super::timestamp;

/// JSON shape a declared field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Boolean,
    TextList,
    Object,
    Timestamp,
}

impl FieldKind {
    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldKind::Text => value.is_string(),
            FieldKind::Integer => value.is_i64() || integral_float(value).is_some(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::TextList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            FieldKind::Object => value.is_object(),
            FieldKind::Timestamp => value.as_str().is_some_and(|s| timestamp::parse(s).is_some()),
        }
    }

    fn expectation(self) -> &'static str {
        match self {
            FieldKind::Text => "expected a string",
            FieldKind::Integer => "expected an integer",
            FieldKind::Boolean => "expected a boolean",
            FieldKind::TextList => "expected a list of strings",
            FieldKind::Object => "expected an object",
            FieldKind::Timestamp => "expected an ISO 8601 timestamp",
        }
    }
}

/// A float with no fractional part, as written by stores that keep every number as a double.
fn integral_float(value: &Value) -> Option<i64> {
    let f = value.as_f64().filter(|_| value.is_f64())?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// One entry in an entity's field table.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Input failed schema constraints. Always names at least one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(fields: Vec<FieldError>) -> Self {
        Self { fields }
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![FieldError::new(field, message)])
    }

    /// Names of the offending fields, in report order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.field.as_str()).collect()
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid input: ")?;
        for (i, err) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{} ({})", err.field, err.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("failed `{}` check", e.code))
                    })
                    .unwrap_or_else(|| "invalid value".to_string());
                FieldError::new(field.to_string(), message)
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        Self { fields }
    }
}

/// An entity kind with a declared field table.
///
/// Unknown keys are dropped, `null` on an optional field means "use the
/// default", and format constraints run through [`Validate`] once the shape
/// is known to be right.
pub trait Schema: DeserializeOwned + Validate + Sized {
    const FIELDS: &'static [Field];

    fn from_document(raw: Value) -> Result<Self, ValidationError> {
        let Value::Object(mut map) = raw else {
            return Err(ValidationError::single("body", "expected a JSON object"));
        };

        map.retain(|key, _| Self::FIELDS.iter().any(|f| f.name == key.as_str()));

        let mut errors = Vec::new();
        let mut omitted = Vec::new();
        for field in Self::FIELDS {
            match map.get(field.name).filter(|v| !v.is_null()) {
                None if field.required => errors.push(FieldError::new(field.name, "field required")),
                None => omitted.push(field.name),
                Some(value) if !field.kind.accepts(value) => {
                    errors.push(FieldError::new(field.name, field.kind.expectation()))
                }
                Some(_) => {}
            }
        }
        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }
        for name in omitted {
            map.remove(name);
        }
        for field in Self::FIELDS.iter().filter(|f| f.kind == FieldKind::Integer) {
            if let Some(value) = map.get_mut(field.name) {
                if let Some(n) = integral_float(value) {
                    *value = Value::from(n);
                }
            }
        }

        let entity: Self = serde_json::from_value(Value::Object(map))
            .map_err(|e| ValidationError::single("body", e.to_string()))?;
        entity.validate()?;
        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactLeadCreate, Testimonial};
    use serde_json::json;

    #[test]
    fn test_missing_required_fields_are_all_named() {
        let err = ContactLeadCreate::from_document(json!({ "company": "Acme" })).unwrap_err();
        assert_eq!(err.field_names(), vec!["name", "email"]);
    }

    #[test]
    fn test_wrong_type_is_reported() {
        let err = Testimonial::from_document(json!({
            "id": "t-1",
            "name": "Dr. Chen",
            "role": "VP",
            "company": "BioGenix",
            "content": "Great",
            "rating": "five"
        }))
        .unwrap_err();
        assert_eq!(err.field_names(), vec!["rating"]);
        assert_eq!(err.fields[0].message, "expected an integer");
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        let err = ContactLeadCreate::from_document(json!(["name", "email"])).unwrap_err();
        assert_eq!(err.field_names(), vec!["body"]);
    }

    #[test]
    fn test_null_optional_uses_default() {
        let input = ContactLeadCreate::from_document(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "lead_type": null,
            "phone": null
        }))
        .unwrap();
        assert_eq!(input.lead_type, "general");
        assert!(input.phone.is_none());
    }

    #[test]
    fn test_null_required_is_missing() {
        let err = ContactLeadCreate::from_document(json!({
            "name": null,
            "email": "ada@example.com"
        }))
        .unwrap_err();
        assert_eq!(err.fields, vec![FieldError::new("name", "field required")]);
    }

    #[test]
    fn test_whole_float_is_accepted_as_integer() {
        let testimonial = Testimonial::from_document(json!({
            "name": "Dr. Chen",
            "role": "VP",
            "company": "BioGenix",
            "content": "Great",
            "rating": 4.0
        }))
        .unwrap();
        assert_eq!(testimonial.rating, 4);
    }

    #[test]
    fn test_fractional_float_is_not_an_integer() {
        let err = Testimonial::from_document(json!({
            "name": "Dr. Chen",
            "role": "VP",
            "company": "BioGenix",
            "content": "Great",
            "rating": 4.5
        }))
        .unwrap_err();
        assert_eq!(err.field_names(), vec!["rating"]);
    }

    #[test]
    fn test_missing_id_is_generated() {
        let first = Testimonial::from_document(json!({
            "name": "Dr. Chen",
            "role": "VP",
            "company": "BioGenix",
            "content": "Great"
        }))
        .unwrap();
        let second = Testimonial::from_document(json!({
            "id": null,
            "name": "Dr. Chen",
            "role": "VP",
            "company": "BioGenix",
            "content": "Great"
        }))
        .unwrap();

        assert!(!first.id.is_empty());
        assert!(!second.id.is_empty());
        assert_ne!(first.id, second.id);
    }
}
