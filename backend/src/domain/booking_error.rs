//! Failures of the booking operations.

use serde_json::json;

use super::ports::StoreError;
use super::{Error, ValidationErrors};

/// Why a booking operation did not complete. None of these leave a partial
/// write behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("payload is invalid: {0}")]
    Validation(ValidationErrors),
    #[error("campaign {campaign_id} not found")]
    CampaignNotFound { campaign_id: String },
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl From<ValidationErrors> for BookingError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<BookingError> for Error {
    fn from(value: BookingError) -> Self {
        match value {
            BookingError::Validation(errors) => {
                Error::invalid_request("Request payload failed validation")
                    .with_details(json!({ "errors": errors }))
            }
            BookingError::CampaignNotFound { campaign_id } => {
                Error::not_found("Campaign not found")
                    .with_details(json!({ "campaignId": campaign_id }))
            }
            BookingError::Storage(err) => Error::internal(err.to_string()),
        }
    }
}
