//! The booking store as one consistency unit.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Campaign, CampaignId, EmailAddress, Session, SessionId, User, UserId};

/// Users, campaigns and sessions, loaded and persisted together.
///
/// Collections keep insertion order. The default value is the initial state
/// of a new store: three empty collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSnapshot {
    pub users: Vec<User>,
    pub campaigns: Vec<Campaign>,
    pub sessions: Vec<Session>,
}

/// A campaign with its sessions embedded, as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignWithSessions {
    #[serde(flatten)]
    pub campaign: Campaign,
    pub sessions: Vec<Session>,
}

/// Cross-reference rules a loaded snapshot breaks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotIntegrityError {
    #[error("email {email} belongs to more than one user")]
    DuplicateEmail { email: EmailAddress },
    #[error("identifier {id} is used by more than one record")]
    DuplicateId { id: String },
    #[error("campaign {campaign_id} references unknown dm {dm_id}")]
    UnknownDm {
        campaign_id: CampaignId,
        dm_id: UserId,
    },
    #[error("session {session_id} references unknown campaign {campaign_id}")]
    UnknownCampaign {
        session_id: SessionId,
        campaign_id: CampaignId,
    },
}

impl StoreSnapshot {
    /// Case-insensitive lookup; stored emails are already normalised.
    pub fn find_user_by_email(&self, email: &EmailAddress) -> Option<&User> {
        self.users.iter().find(|user| user.email == *email)
    }

    pub fn find_campaign(&self, id: CampaignId) -> Option<&Campaign> {
        self.campaigns.iter().find(|campaign| campaign.id == id)
    }

    pub fn sessions_for(&self, campaign_id: CampaignId) -> impl Iterator<Item = &Session> + '_ {
        self.sessions
            .iter()
            .filter(move |session| session.campaign_id == campaign_id)
    }

    /// Every campaign once, each with its sessions in creation order.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::StoreSnapshot;
    ///
    /// assert!(StoreSnapshot::default().campaign_views().is_empty());
    /// ```
    pub fn campaign_views(&self) -> Vec<CampaignWithSessions> {
        self.campaigns
            .iter()
            .map(|campaign| CampaignWithSessions {
                campaign: campaign.clone(),
                sessions: self.sessions_for(campaign.id).cloned().collect(),
            })
            .collect()
    }

    /// Check uniqueness and referential integrity across the collections.
    ///
    /// # Errors
    ///
    /// Returns the first broken rule found.
    pub fn check_integrity(&self) -> Result<(), SnapshotIntegrityError> {
        let mut ids = HashSet::new();
        let mut emails = HashSet::new();
        for user in &self.users {
            if !emails.insert(&user.email) {
                return Err(SnapshotIntegrityError::DuplicateEmail {
                    email: user.email.clone(),
                });
            }
            claim_id(&mut ids, *user.id.as_uuid())?;
        }

        let user_ids: HashSet<UserId> = self.users.iter().map(|user| user.id).collect();
        for campaign in &self.campaigns {
            claim_id(&mut ids, *campaign.id.as_uuid())?;
            if !user_ids.contains(&campaign.dm_id) {
                return Err(SnapshotIntegrityError::UnknownDm {
                    campaign_id: campaign.id,
                    dm_id: campaign.dm_id,
                });
            }
        }

        let campaign_ids: HashSet<CampaignId> =
            self.campaigns.iter().map(|campaign| campaign.id).collect();
        for session in &self.sessions {
            claim_id(&mut ids, *session.id.as_uuid())?;
            if !campaign_ids.contains(&session.campaign_id) {
                return Err(SnapshotIntegrityError::UnknownCampaign {
                    session_id: session.id,
                    campaign_id: session.campaign_id,
                });
            }
        }
        Ok(())
    }
}

fn claim_id(seen: &mut HashSet<uuid::Uuid>, id: uuid::Uuid) -> Result<(), SnapshotIntegrityError> {
    if seen.insert(id) {
        Ok(())
    } else {
        Err(SnapshotIntegrityError::DuplicateId { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests;
