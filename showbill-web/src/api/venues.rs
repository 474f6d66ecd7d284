//! Venue endpoints
//!
//! The venue read paths propagate failures: the grouped list and search
//! return 500 on a storage fault, and the detail page is the one read path
//! with a dedicated 404.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Form, Json};
use showbill_common::{time, Error};
use uuid::Uuid;

use super::{ApiError, MutationResponse, SearchQuery};
use crate::forms::VenueForm;
use crate::gateway::{self, DeleteOutcome};
use crate::views::{self, CityGroup, SearchResults, VenueDetail};
use crate::AppState;

fn parse_venue_id(raw: &str) -> Result<Uuid, ApiError> {
    // An unparseable id behaves like a missing venue
    Uuid::parse_str(raw)
        .map_err(|_| ApiError::from(Error::NotFound("Venue not found.".to_string())))
}

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> Result<Json<Vec<CityGroup>>, ApiError> {
    let groups = views::list_venues_grouped(&state.db, time::now()).await?;
    Ok(Json(groups))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(query): Form<SearchQuery>,
) -> Result<Json<SearchResults>, ApiError> {
    let results = views::search_venues(&state.db, &query.search_term, time::now()).await?;
    Ok(Json(results))
}

/// GET /venues/:id
pub async fn get_venue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VenueDetail>, ApiError> {
    let id = parse_venue_id(&id)?;
    let detail = views::venue_detail(&state.db, id, time::now()).await?;
    Ok(Json(detail))
}

/// GET /venues/create
///
/// Blank form view model for the create page.
pub async fn new_venue_form() -> Json<VenueForm> {
    Json(VenueForm::default())
}

/// POST /venues/create
pub async fn create_venue(
    State(state): State<AppState>,
    Json(form): Json<VenueForm>,
) -> (StatusCode, Json<MutationResponse>) {
    match gateway::create_venue(&state.db, &form).await {
        Ok(id) => (
            StatusCode::OK,
            Json(
                MutationResponse::ok(format!("Venue {} was successfully listed!", form.name))
                    .with_id(id),
            ),
        ),
        Err(Error::InvalidInput(reason)) => {
            tracing::debug!("Venue create rejected: {}", reason);
            (
                StatusCode::BAD_REQUEST,
                Json(MutationResponse::failed(
                    "Invalid data submitted. Please check the form for errors.",
                )),
            )
        }
        Err(e) => {
            tracing::error!("Venue create failed: {}", e);
            (
                StatusCode::OK,
                Json(MutationResponse::failed(format!(
                    "An error occurred. Venue {} could not be listed.",
                    form.name
                ))),
            )
        }
    }
}

/// GET /venues/:id/edit
///
/// Form view model populated from the stored record.
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VenueForm>, ApiError> {
    let id = parse_venue_id(&id)?;
    let venue = crate::db::venues::load_venue(&state.db, id)
        .await?
        .ok_or_else(|| Error::NotFound("Venue not found.".to_string()))?;
    Ok(Json(VenueForm::from_record(&venue)))
}

/// POST /venues/:id/edit
pub async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<VenueForm>,
) -> (StatusCode, Json<MutationResponse>) {
    let id = match Uuid::parse_str(&id) {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(MutationResponse::failed("Venue not found.")),
            )
        }
    };

    match gateway::update_venue(&state.db, id, &form).await {
        Ok(()) => (
            StatusCode::OK,
            Json(
                MutationResponse::ok(format!("Venue {} was successfully updated!", form.name))
                    .with_redirect(format!("/venues/{}", id)),
            ),
        ),
        Err(Error::InvalidInput(reason)) => {
            tracing::debug!("Venue update rejected: {}", reason);
            (
                StatusCode::BAD_REQUEST,
                Json(MutationResponse::failed(
                    "Invalid data submitted. Please check the form for errors.",
                )),
            )
        }
        Err(Error::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(MutationResponse::failed("Venue not found.")),
        ),
        Err(e) => {
            tracing::error!("Venue update failed: {}", e);
            (
                StatusCode::OK,
                Json(MutationResponse::failed(format!(
                    "An error occurred. Venue {} could not be updated.",
                    form.name
                ))),
            )
        }
    }
}

/// DELETE /venues/:id
///
/// Always answers with a redirect back to the venue list; failures are
/// flash messages, never hard errors.
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Json<MutationResponse>) {
    let response = match gateway::delete_venue(&state.db, &id).await {
        Ok(DeleteOutcome::Deleted) => MutationResponse::ok("Venue successfully deleted!"),
        Ok(DeleteOutcome::SkippedEmptyId) => {
            MutationResponse::ok("Venue ID is required for deletion.")
        }
        Err(Error::NotFound(msg)) => MutationResponse::failed(msg),
        Err(e) => {
            tracing::error!("Venue delete failed: {}", e);
            MutationResponse::failed(format!("An error occurred: {}", e))
        }
    };

    (StatusCode::OK, Json(response.with_redirect("/venues")))
}
