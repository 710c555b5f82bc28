//! Handler for the site profile (hero and about page content).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn get_profile(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let profile = state.profile.as_ref().clone();

    Ok(Json(DataResponse { data: profile }))
}
