//! Driving port for booking mutations.
//!
//! Both operations validate the raw payload first and only then touch the
//! store; a rejected payload never causes a load or a write.

use async_trait::async_trait;

use crate::domain::{BookingError, Campaign, CampaignPayload, Session, SessionPayload};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampaignCommand: Send + Sync {
    /// Validate and store a campaign, creating its DM on first use of the
    /// email address.
    async fn create_campaign(&self, payload: CampaignPayload) -> Result<Campaign, BookingError>;

    /// Validate and store a session under the campaign named by
    /// `campaign_id`.
    ///
    /// A reference that is not a UUID is reported as not found.
    async fn create_session(
        &self,
        campaign_id: &str,
        payload: SessionPayload,
    ) -> Result<Session, BookingError>;
}
