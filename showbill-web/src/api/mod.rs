//! HTTP API handlers for showbill-web
//!
//! Handlers return the serialized view model the external renderer
//! consumes. Mutation endpoints answer `MutationResponse` (flash message
//! semantics); read endpoints differ deliberately in their failure policy,
//! see each module.

pub mod artists;
pub mod health;
pub mod shows;
pub mod venues;

pub use health::health_routes;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use showbill_common::Error;

/// Search form body: `search_term`, defaulting to empty (match all).
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search_term: String,
}

/// Mutation outcome handed to the renderer: flash message plus an optional
/// follow-up location.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub flash: String,
    /// Id of the created row, present on successful creates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<uuid::Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl MutationResponse {
    pub fn ok(flash: impl Into<String>) -> Self {
        Self {
            success: true,
            flash: flash.into(),
            id: None,
            redirect: None,
        }
    }

    pub fn failed(flash: impl Into<String>) -> Self {
        Self {
            success: false,
            flash: flash.into(),
            id: None,
            redirect: None,
        }
    }

    pub fn with_id(mut self, id: uuid::Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_redirect(mut self, location: impl Into<String>) -> Self {
        self.redirect = Some(location.into());
        self
    }
}

/// Error responses for handlers that propagate failures.
///
/// NotFound renders the dedicated 404 body, InvalidInput a 400; everything
/// else is logged and collapsed into a generic 500.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Error::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            other => {
                tracing::error!("Request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Fallback for unknown routes: the generic 404 page body.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Not Found" })),
    )
        .into_response()
}
