//! REST API module.
//!
//! Handlers are thin: extract, call the content service, wrap the result as JSON.

mod contacts;
mod content;

pub use contacts::*;
pub use content::*;

use axum::Json;
use serde::Serialize;

use crate::errors::AppError;

/// Handler result: a JSON body, or an error rendered through [`AppError`]'s envelope.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Greeting returned by the API root.
#[derive(Debug, Serialize)]
pub struct RootMessage {
    pub message: &'static str,
}

/// GET /api/ - API greeting.
pub async fn root() -> Json<RootMessage> {
    Json(RootMessage {
        message: "Maglinc Pharmaceutical Consulting API",
    })
}
