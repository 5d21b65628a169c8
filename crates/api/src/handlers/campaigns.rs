use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use scenebook_db::repositories::CampaignRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::json_body;
use crate::state::AppState;

/// Request body for creating a campaign.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    pub campaign_name: String,
}

/// POST /
///
/// Register a new, empty campaign. Responds with `{"campaignName"}`
/// holding the normalized name.
pub async fn create_campaign(
    State(state): State<AppState>,
    payload: Result<Json<CreateCampaignRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload)?;
    let campaign = CampaignRepo::create(&state.store, &input.campaign_name).await?;
    Ok(Json(campaign))
}
