pub mod health;

use axum::routing::{delete, get, post};
use axum::Router;
use scenebook_core::types::StoreMode;

use crate::handlers::{campaigns, scenes};
use crate::state::AppState;

/// Build the scene route tree for the configured store mode.
///
/// Flat store:
///
/// ```text
/// GET    /                              -> list_scenes
/// POST   /                              -> create_scene
/// DELETE /{id}                          -> delete_scene
/// ```
///
/// Grouped store:
///
/// ```text
/// GET    /                              -> list_scenes
/// POST   /                              -> create_campaign
/// POST   /{campaign_name}               -> create_campaign_scene
/// DELETE /{campaign_name}/{scene_id}    -> delete_campaign_scene
/// ```
pub fn api_routes(mode: StoreMode) -> Router<AppState> {
    match mode {
        StoreMode::Flat => Router::new()
            .route("/", get(scenes::list_scenes).post(scenes::create_scene))
            .route("/{id}", delete(scenes::delete_scene)),
        StoreMode::Grouped => Router::new()
            .route("/", get(scenes::list_scenes).post(campaigns::create_campaign))
            .route("/{campaign_name}", post(scenes::create_campaign_scene))
            .route(
                "/{campaign_name}/{scene_id}",
                delete(scenes::delete_campaign_scene),
            ),
    }
}
