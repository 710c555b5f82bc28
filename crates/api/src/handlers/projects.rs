//! Handlers for the `/projects` resource.
//!
//! All endpoints are read-only views over the [`ProjectStore`] held in
//! [`AppState`]. Drafts are filtered out by the store itself.
//!
//! [`ProjectStore`]: folio_core::store::ProjectStore

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::project::ProjectCard;

use crate::error::{AppError, AppResult};
use crate::query::RelatedParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects
///
/// Published projects with their content blocks, most recent first.
pub async fn list_projects(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = state.store.list_published().to_vec();

    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/cards
///
/// The project grid: one card per published project, most recent first.
pub async fn list_cards(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cards: Vec<ProjectCard> = state
        .store
        .list_published()
        .iter()
        .map(ProjectCard::from)
        .collect();

    Ok(Json(DataResponse { data: cards }))
}

/// GET /api/v1/projects/{slug}
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let project = state
        .store
        .get_project(&slug)
        .cloned()
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                id: slug.clone(),
            })
        })?;

    Ok(Json(DataResponse { data: project }))
}

/// GET /api/v1/projects/{slug}/related?count=N
///
/// Cards for projects near `slug` in the chronological ordering. An
/// unknown slug is not an error: the newest projects are returned instead.
/// A non-numeric `count` is a 400 with the standard error body.
pub async fn related_projects(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    params: Result<Query<RelatedParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let count = params.resolved_count();
    let cards: Vec<ProjectCard> = state
        .store
        .related(&slug, count)
        .into_iter()
        .map(ProjectCard::from)
        .collect();

    tracing::debug!(slug = %slug, count, returned = cards.len(), "Related projects selected");

    Ok(Json(DataResponse { data: cards }))
}
