//! Campaigns published by dungeon masters.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CampaignId, EmailAddress, UserId};

/// How a campaign is played, as named in payloads and documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignMode {
    Online,
    Presencial,
}

impl CampaignMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Presencial => "presencial",
        }
    }
}

impl fmt::Display for CampaignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a mode string is neither `online` nor `presencial`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown campaign mode: {0}")]
pub struct UnknownCampaignMode(pub String);

impl FromStr for CampaignMode {
    type Err = UnknownCampaignMode;

    // Exact match only; `Online` or ` online` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(Self::Online),
            "presencial" => Ok(Self::Presencial),
            other => Err(UnknownCampaignMode(other.to_owned())),
        }
    }
}

/// Where a campaign takes place.
///
/// Exactly one of the two venue fields exists for any campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampaignVenue {
    Online { url: String },
    Presencial { location_text: String },
}

impl CampaignVenue {
    pub const fn mode(&self) -> CampaignMode {
        match self {
            Self::Online { .. } => CampaignMode::Online,
            Self::Presencial { .. } => CampaignMode::Presencial,
        }
    }

    pub fn online_url(&self) -> Option<&str> {
        match self {
            Self::Online { url } => Some(url),
            Self::Presencial { .. } => None,
        }
    }

    pub fn location_text(&self) -> Option<&str> {
        match self {
            Self::Online { .. } => None,
            Self::Presencial { location_text } => Some(location_text),
        }
    }
}

/// A persisted campaign.
///
/// Serialises with both `locationText` and `onlineUrl`, the one that does not
/// apply to `mode` written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CampaignRecord", into = "CampaignRecord")]
pub struct Campaign {
    pub id: CampaignId,
    pub dm_id: UserId,
    pub title: String,
    pub description: String,
    pub venue: CampaignVenue,
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    pub const fn mode(&self) -> CampaignMode {
        self.venue.mode()
    }
}

/// Document shape of a [`Campaign`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CampaignRecord {
    id: CampaignId,
    dm_id: UserId,
    title: String,
    description: String,
    mode: CampaignMode,
    #[serde(default)]
    location_text: Option<String>,
    #[serde(default)]
    online_url: Option<String>,
    created_at: DateTime<Utc>,
}

/// A campaign record whose venue fields disagree with its mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("campaign {id} in mode {mode} must carry exactly its own venue field")]
pub struct CampaignVenueMismatch {
    pub id: CampaignId,
    pub mode: CampaignMode,
}

impl TryFrom<CampaignRecord> for Campaign {
    type Error = CampaignVenueMismatch;

    fn try_from(record: CampaignRecord) -> Result<Self, Self::Error> {
        let CampaignRecord {
            id,
            dm_id,
            title,
            description,
            mode,
            location_text,
            online_url,
            created_at,
        } = record;
        let venue = match (mode, location_text, online_url) {
            (CampaignMode::Online, None, Some(url)) => CampaignVenue::Online { url },
            (CampaignMode::Presencial, Some(location_text), None) => {
                CampaignVenue::Presencial { location_text }
            }
            _ => return Err(CampaignVenueMismatch { id, mode }),
        };
        Ok(Self {
            id,
            dm_id,
            title,
            description,
            venue,
            created_at,
        })
    }
}

impl From<Campaign> for CampaignRecord {
    fn from(campaign: Campaign) -> Self {
        let mode = campaign.mode();
        let (location_text, online_url) = match campaign.venue {
            CampaignVenue::Online { url } => (None, Some(url)),
            CampaignVenue::Presencial { location_text } => (Some(location_text), None),
        };
        Self {
            id: campaign.id,
            dm_id: campaign.dm_id,
            title: campaign.title,
            description: campaign.description,
            mode,
            location_text,
            online_url,
            created_at: campaign.created_at,
        }
    }
}

/// A validated campaign request, ready to be stored.
///
/// Only produced by `CampaignDraft::try_from(CampaignPayload)`; every string
/// is already trimmed and the email normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignDraft {
    dm_name: String,
    dm_email: EmailAddress,
    title: String,
    description: String,
    venue: CampaignVenue,
}

impl CampaignDraft {
    pub(crate) fn new(
        dm_name: &str,
        dm_email: &str,
        title: &str,
        description: &str,
        venue: CampaignVenue,
    ) -> Self {
        Self {
            dm_name: dm_name.trim().to_owned(),
            dm_email: EmailAddress::normalized(dm_email),
            title: title.trim().to_owned(),
            description: description.trim().to_owned(),
            venue,
        }
    }

    pub fn dm_name(&self) -> &str {
        &self.dm_name
    }

    pub fn dm_email(&self) -> &EmailAddress {
        &self.dm_email
    }

    pub fn venue(&self) -> &CampaignVenue {
        &self.venue
    }

    /// Materialise the campaign for `dm_id`.
    pub fn into_campaign(self, id: CampaignId, dm_id: UserId, created_at: DateTime<Utc>) -> Campaign {
        Campaign {
            id,
            dm_id,
            title: self.title,
            description: self.description,
            venue: self.venue,
            created_at,
        }
    }
}
