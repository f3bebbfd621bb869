//! Booking domain: entities, validation rules, services and ports.
//!
//! Purpose: turn untrusted campaign and session payloads into durable,
//! cross-referenced records. Nothing here knows about HTTP or the file
//! system; adapters reach the domain through the traits in [`ports`].
//!
//! Public surface:
//! - `Error`/`ErrorCode`: transport-agnostic error envelope.
//! - `User`, `Campaign`, `Session`: persisted entities.
//! - `CampaignPayload`/`SessionPayload` and their validators.
//! - `CampaignService`: implementation of the driving ports.

mod booking_error;
mod campaign;
mod campaign_service;
pub mod error;
mod ids;
pub mod ports;
mod session;
mod snapshot;
mod trace_id;
mod user;
mod validation;

pub use self::booking_error::BookingError;
pub use self::campaign::{
    Campaign, CampaignDraft, CampaignMode, CampaignVenue, CampaignVenueMismatch,
    UnknownCampaignMode,
};
pub use self::campaign_service::CampaignService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::ids::{CampaignId, SessionId, UserId};
pub use self::session::{
    MAX_PRICE_PER_PLAYER, MIN_PRICE_PER_PLAYER, PriceOutOfRange, PricePerPlayer, Session,
    SessionDraft, SessionStatus,
};
pub use self::snapshot::{CampaignWithSessions, SnapshotIntegrityError, StoreSnapshot};
pub use self::trace_id::TraceId;
pub use self::user::{EmailAddress, User, UserRole};
pub use self::validation::{
    CampaignPayload, SessionPayload, ValidationErrors, Violation, parse_start_at,
    validate_campaign, validate_session,
};
