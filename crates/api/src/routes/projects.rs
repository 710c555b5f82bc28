//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Project routes mounted at `/projects`.
///
/// ```text
/// GET    /                  -> list_projects
/// GET    /cards             -> list_cards
/// GET    /{slug}            -> get_project
/// GET    /{slug}/related    -> related_projects
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_projects))
        .route("/cards", get(projects::list_cards))
        .route("/{slug}", get(projects::get_project))
        .route("/{slug}/related", get(projects::related_projects))
}
