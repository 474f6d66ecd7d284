//! Show endpoints
//!
//! The show list swallows faults silently (log line, empty page); there is
//! no show detail or delete surface.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use showbill_common::Error;

use super::MutationResponse;
use crate::forms::ShowForm;
use crate::gateway;
use crate::views::{self, ShowView};
use crate::AppState;

/// Show list page view model.
#[derive(Debug, Serialize)]
pub struct ShowsPage {
    pub shows: Vec<ShowView>,
}

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> Json<ShowsPage> {
    match views::list_shows(&state.db).await {
        Ok(shows) => Json(ShowsPage { shows }),
        Err(e) => {
            tracing::error!("Show list failed: {}", e);
            Json(ShowsPage { shows: Vec::new() })
        }
    }
}

/// GET /shows/create
///
/// Blank form view model for the create page.
pub async fn new_show_form() -> Json<ShowForm> {
    Json(ShowForm::default())
}

/// POST /shows/create
pub async fn create_show(
    State(state): State<AppState>,
    Json(form): Json<ShowForm>,
) -> (StatusCode, Json<MutationResponse>) {
    match gateway::create_show(&state.db, &form).await {
        Ok(_) => (
            StatusCode::OK,
            Json(MutationResponse::ok("Show was successfully listed!")),
        ),
        Err(Error::InvalidInput(reason)) => {
            tracing::debug!("Show create rejected: {}", reason);
            (
                StatusCode::BAD_REQUEST,
                Json(MutationResponse::failed(
                    "An error occurred. Show could not be listed. Please check your form data.",
                )),
            )
        }
        Err(e) => {
            tracing::error!("Show create failed: {}", e);
            (
                StatusCode::OK,
                Json(MutationResponse::failed(
                    "An error occurred. Show could not be listed.",
                )),
            )
        }
    }
}
