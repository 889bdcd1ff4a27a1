//! Contact lead endpoints.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;

use super::ApiResult;
use crate::errors::AppError;
use crate::models::{ContactLead, ValidationError};
use crate::AppState;

/// POST /api/contacts - Submit a contact lead.
pub async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<ContactLead> {
    // An unreadable body is reported like any other invalid input
    let Json(raw) = payload.map_err(|rejection| {
        AppError::Validation(ValidationError::single("body", rejection.body_text()))
    })?;
    let lead = state.content.create_lead(raw).await?;
    Ok(Json(lead))
}

/// GET /api/contacts - List submitted leads.
pub async fn list_contacts(State(state): State<AppState>) -> ApiResult<Vec<ContactLead>> {
    Ok(Json(state.content.list_leads().await?))
}
