//! Campaign and session HTTP handlers.
//!
//! ```text
//! GET  /api/campaigns
//! POST /api/campaigns
//! POST /api/campaigns/{campaignId}/sessions
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::domain::{CampaignPayload, SessionPayload};
use crate::inbound::http::ApiResult;
use crate::inbound::http::body::read_json_object;
use crate::inbound::http::schemas::{
    CampaignPayloadSchema, CampaignSchema, CampaignWithSessionsSchema, ErrorSchema,
    SessionPayloadSchema, SessionSchema,
};
use crate::inbound::http::state::HttpState;

/// List every campaign with its sessions embedded.
#[utoipa::path(
    get,
    path = "/api/campaigns",
    responses(
        (status = 200, description = "Campaigns with their sessions", body = [CampaignWithSessionsSchema]),
        (status = 500, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["campaigns"],
    operation_id = "listCampaigns"
)]
#[get("/campaigns")]
pub async fn list_campaigns(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let campaigns = state.campaigns_query.list_campaigns().await?;
    Ok(HttpResponse::Ok().json(campaigns))
}

/// Publish a campaign, registering its DM on first use of the email.
#[utoipa::path(
    post,
    path = "/api/campaigns",
    request_body = CampaignPayloadSchema,
    responses(
        (status = 201, description = "Campaign created", body = CampaignSchema),
        (status = 400, description = "Payload failed validation", body = ErrorSchema),
        (status = 413, description = "Body too large", body = ErrorSchema),
        (status = 500, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["campaigns"],
    operation_id = "createCampaign"
)]
#[post("/campaigns")]
pub async fn create_campaign(
    state: web::Data<HttpState>,
    body: web::Payload,
) -> ApiResult<HttpResponse> {
    let payload: CampaignPayload = read_json_object(body).await?;
    let campaign = state.campaigns.create_campaign(payload).await?;
    Ok(HttpResponse::Created().json(campaign))
}

/// Schedule a session under an existing campaign.
#[utoipa::path(
    post,
    path = "/api/campaigns/{campaignId}/sessions",
    params(("campaignId" = String, Path, description = "Campaign identifier")),
    request_body = SessionPayloadSchema,
    responses(
        (status = 201, description = "Session scheduled", body = SessionSchema),
        (status = 400, description = "Payload failed validation", body = ErrorSchema),
        (status = 404, description = "Campaign not found", body = ErrorSchema),
        (status = 413, description = "Body too large", body = ErrorSchema),
        (status = 500, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["campaigns"],
    operation_id = "createSession"
)]
#[post("/campaigns/{campaign_id}/sessions")]
pub async fn create_session(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Payload,
) -> ApiResult<HttpResponse> {
    let payload: SessionPayload = read_json_object(body).await?;
    let session = state
        .campaigns
        .create_session(&path.into_inner(), payload)
        .await?;
    Ok(HttpResponse::Created().json(session))
}

#[cfg(test)]
#[path = "campaigns_tests.rs"]
mod tests;
