//! showbill-web library - booking directory service
//!
//! Serves venue/artist/show view models over HTTP for an external renderer,
//! and owns all mutations behind the gateway's validate/apply/commit
//! discipline.

use axum::Router;
use sqlx::SqlitePool;

pub mod api;
pub mod db;
pub mod forms;
pub mod gateway;
pub mod views;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/venues", get(api::venues::list_venues))
        .route("/venues/search", post(api::venues::search_venues))
        .route(
            "/venues/create",
            get(api::venues::new_venue_form).post(api::venues::create_venue),
        )
        .route(
            "/venues/:id",
            get(api::venues::get_venue).delete(api::venues::delete_venue),
        )
        .route(
            "/venues/:id/edit",
            get(api::venues::edit_venue_form).post(api::venues::update_venue),
        )
        .route("/artists", get(api::artists::list_artists))
        .route("/artists/search", post(api::artists::search_artists))
        .route(
            "/artists/create",
            get(api::artists::new_artist_form).post(api::artists::create_artist),
        )
        .route("/artists/:id", get(api::artists::get_artist))
        .route(
            "/artists/:id/edit",
            get(api::artists::edit_artist_form).post(api::artists::update_artist),
        )
        .route("/shows", get(api::shows::list_shows))
        .route(
            "/shows/create",
            get(api::shows::new_show_form).post(api::shows::create_show),
        )
        .merge(api::health_routes())
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
