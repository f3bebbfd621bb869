//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and register under the domain type's
//! name, so the generated document reads as if the domain types described
//! themselves.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request body is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The route or referenced campaign does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request body exceeds the size limit.
    #[schema(rename = "payload_too_large")]
    PayloadTooLarge,
    /// A dependency is temporarily unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "Request payload failed validation")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field violations under `errors`, or the missing `campaignId`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Campaign`].
///
/// Exactly one of `onlineUrl` and `locationText` is non-null, as selected by
/// `mode`.
#[derive(ToSchema)]
#[schema(as = crate::domain::Campaign, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CampaignSchema {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "0b7c2a2e-8f3a-4d0e-9d55-6a0f9e1c2b11")]
    dm_id: String,
    #[schema(example = "La Tumba del Rey")]
    title: String,
    description: String,
    #[schema(example = "presencial")]
    mode: String,
    location_text: Option<String>,
    online_url: Option<String>,
    #[schema(example = "2026-03-14T17:00:00Z")]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::Session`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Session, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SessionSchema {
    id: String,
    campaign_id: String,
    /// Normalised to UTC.
    #[schema(example = "2026-04-01T18:00:00Z")]
    start_at: String,
    #[schema(minimum = 1, example = 180)]
    duration_minutes: u32,
    #[schema(minimum = 1, example = 5)]
    slots_total: u32,
    /// Euros, rounded to cents.
    #[schema(minimum = 0.5, maximum = 50, example = 12.5)]
    price_per_player: f64,
    #[schema(example = "scheduled")]
    status: String,
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::CampaignWithSessions`].
///
/// The campaign's own fields, flattened, plus its sessions.
#[derive(ToSchema)]
#[schema(as = crate::domain::CampaignWithSessions, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CampaignWithSessionsSchema {
    id: String,
    dm_id: String,
    title: String,
    description: String,
    mode: String,
    location_text: Option<String>,
    online_url: Option<String>,
    created_at: String,
    sessions: Vec<SessionSchema>,
}

/// OpenAPI schema for [`crate::domain::CampaignPayload`].
///
/// Every field is optional on the wire; missing or mistyped fields surface as
/// violations rather than parse failures.
#[derive(ToSchema)]
#[schema(as = crate::domain::CampaignPayload, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CampaignPayloadSchema {
    #[schema(example = "Ana")]
    dm_name: Option<String>,
    #[schema(example = "ana@example.com")]
    dm_email: Option<String>,
    title: Option<String>,
    description: Option<String>,
    #[schema(example = "online")]
    mode: Option<String>,
    online_url: Option<String>,
    location_text: Option<String>,
}

/// OpenAPI schema for [`crate::domain::SessionPayload`].
#[derive(ToSchema)]
#[schema(as = crate::domain::SessionPayload, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SessionPayloadSchema {
    /// RFC 3339, or a naive `YYYY-MM-DDTHH:MM[:SS]` read as UTC.
    #[schema(example = "2026-04-01T18:00")]
    start_at: Option<String>,
    duration_minutes: Option<u32>,
    slots_total: Option<u32>,
    price_per_player: Option<f64>,
}
