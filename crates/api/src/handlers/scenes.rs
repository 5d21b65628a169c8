//! Handlers for listing, creating and deleting scenes.
//!
//! Flat stores address scenes by id alone; grouped stores address them
//! inside a campaign. Both share the same repository calls, differing
//! only in the scope they pass.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use scenebook_db::repositories::SceneRepo;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::handlers::json_body;
use crate::state::AppState;

/// GET /
///
/// The whole document: an array of scenes (flat) or an object keyed by
/// campaign name (grouped).
pub async fn list_scenes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let document = SceneRepo::list(&state.store).await?;
    Ok(Json(document))
}

/// POST /
///
/// Create a scene in a flat store.
pub async fn create_scene(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let candidate = json_body(payload)?;
    let scene = SceneRepo::add(&state.store, None, &candidate).await?;
    Ok(Json(scene))
}

/// DELETE /{id}
pub async fn delete_scene(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    SceneRepo::remove(&state.store, None, &id).await?;
    Ok(Json(json!({})))
}

/// POST /{campaign_name}
///
/// Create a scene inside an existing campaign.
pub async fn create_campaign_scene(
    State(state): State<AppState>,
    Path(campaign_name): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let candidate = json_body(payload)?;
    let scene = SceneRepo::add(&state.store, Some(&campaign_name), &candidate).await?;
    Ok(Json(scene))
}

/// DELETE /{campaign_name}/{scene_id}
pub async fn delete_campaign_scene(
    State(state): State<AppState>,
    Path((campaign_name, scene_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    SceneRepo::remove(&state.store, Some(&campaign_name), &scene_id).await?;
    Ok(Json(json!({})))
}
