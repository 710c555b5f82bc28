pub mod health;
pub mod profile;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        published projects (full records)
/// /projects/cards                                  published projects as grid cards
/// /projects/{slug}                                 one project
/// /projects/{slug}/related                         related project cards (?count=)
///
/// /profile                                         hero + about content
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", projects::router())
        .nest("/profile", profile::router())
}
