//! Artist endpoints
//!
//! The artist read paths swallow faults instead of propagating them: the
//! listing and detail pages degrade to an empty view model with a flash,
//! and search degrades silently with only a log line. This mirrors the
//! venue paths' stricter policy on purpose; do not unify without product
//! guidance.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Form, Json};
use serde::Serialize;
use showbill_common::{time, Error};
use uuid::Uuid;

use super::{ApiError, MutationResponse, SearchQuery};
use crate::forms::ArtistForm;
use crate::gateway;
use crate::views::{self, ArtistDetail, ArtistListItem, SearchResults};
use crate::AppState;

/// Artist listing page view model.
#[derive(Debug, Serialize)]
pub struct ArtistsPage {
    pub artists: Vec<ArtistListItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<String>,
}

/// Artist detail page view model; `artist` is absent when the page
/// degraded to an empty view.
#[derive(Debug, Serialize)]
pub struct ArtistPage {
    pub artist: Option<ArtistDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<String>,
}

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> Json<ArtistsPage> {
    match views::list_artists(&state.db).await {
        Ok(artists) => Json(ArtistsPage {
            artists,
            flash: None,
        }),
        Err(e) => Json(ArtistsPage {
            artists: Vec::new(),
            flash: Some(format!("An error occurred: {}", e)),
        }),
    }
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(query): Form<SearchQuery>,
) -> Json<SearchResults> {
    match views::search_artists(&state.db, &query.search_term, time::now()).await {
        Ok(results) => Json(results),
        Err(e) => {
            tracing::error!("Artist search failed: {}", e);
            Json(SearchResults {
                count: 0,
                data: Vec::new(),
            })
        }
    }
}

/// GET /artists/:id
pub async fn get_artist(State(state): State<AppState>, Path(id): Path<String>) -> Json<ArtistPage> {
    let result = match Uuid::parse_str(&id) {
        Ok(id) => views::artist_detail(&state.db, id, time::now()).await,
        Err(_) => Err(Error::NotFound("Artist not found.".to_string())),
    };

    match result {
        Ok(detail) => Json(ArtistPage {
            artist: Some(detail),
            flash: None,
        }),
        Err(e) => Json(ArtistPage {
            artist: None,
            flash: Some(format!("An error occurred: {}", e)),
        }),
    }
}

/// GET /artists/create
///
/// Blank form view model for the create page.
pub async fn new_artist_form() -> Json<ArtistForm> {
    Json(ArtistForm::default())
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    Json(form): Json<ArtistForm>,
) -> (StatusCode, Json<MutationResponse>) {
    match gateway::create_artist(&state.db, &form).await {
        Ok(id) => (
            StatusCode::OK,
            Json(
                MutationResponse::ok(format!("Artist {} was successfully listed!", form.name))
                    .with_id(id),
            ),
        ),
        Err(Error::InvalidInput(reason)) => {
            tracing::debug!("Artist create rejected: {}", reason);
            (
                StatusCode::BAD_REQUEST,
                Json(MutationResponse::failed(
                    "Invalid data submitted. Please check the form for errors.",
                )),
            )
        }
        Err(e) => {
            tracing::error!("Artist create failed: {}", e);
            (
                StatusCode::OK,
                Json(MutationResponse::failed(format!(
                    "An error occurred. Artist {} could not be listed.",
                    form.name
                ))),
            )
        }
    }
}

/// GET /artists/:id/edit
///
/// Form view model populated from the stored record.
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArtistForm>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::from(Error::NotFound("Artist not found.".to_string())))?;
    let artist = crate::db::artists::load_artist(&state.db, id)
        .await?
        .ok_or_else(|| Error::NotFound("Artist not found.".to_string()))?;
    Ok(Json(ArtistForm::from_record(&artist)))
}

/// POST /artists/:id/edit
pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<ArtistForm>,
) -> (StatusCode, Json<MutationResponse>) {
    let id = match Uuid::parse_str(&id) {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(MutationResponse::failed("Artist not found.")),
            )
        }
    };

    match gateway::update_artist(&state.db, id, &form).await {
        Ok(()) => (
            StatusCode::OK,
            Json(
                MutationResponse::ok(format!("Artist {} was successfully updated!", form.name))
                    .with_redirect(format!("/artists/{}", id)),
            ),
        ),
        Err(Error::InvalidInput(reason)) => {
            tracing::debug!("Artist update rejected: {}", reason);
            (
                StatusCode::BAD_REQUEST,
                Json(MutationResponse::failed(
                    "Invalid data submitted. Please check the form for errors.",
                )),
            )
        }
        Err(Error::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(MutationResponse::failed("Artist not found.")),
        ),
        Err(e) => {
            tracing::error!("Artist update failed: {}", e);
            (
                StatusCode::OK,
                Json(MutationResponse::failed(format!(
                    "An error occurred. Artist {} could not be updated.",
                    form.name
                ))),
            )
        }
    }
}
