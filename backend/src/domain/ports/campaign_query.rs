//! Driving port for booking reads.

use async_trait::async_trait;

use crate::domain::{BookingError, CampaignWithSessions};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampaignQuery: Send + Sync {
    /// Every campaign with its sessions embedded, in insertion order.
    async fn list_campaigns(&self) -> Result<Vec<CampaignWithSessions>, BookingError>;
}
