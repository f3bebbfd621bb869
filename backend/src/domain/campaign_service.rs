//! Booking service implementing the campaign driving ports.
//!
//! Every mutation is a full load-mutate-persist cycle over the store
//! snapshot. Mutations through one service instance are serialised, so
//! concurrent requests cannot drop each other's writes; reads take no lock.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::domain::ports::{CampaignCommand, CampaignQuery, DomainStore, IdGenerator, StoreError};
use crate::domain::{
    BookingError, Campaign, CampaignDraft, CampaignId, CampaignPayload, CampaignWithSessions,
    Session, SessionDraft, SessionId, SessionPayload, StoreSnapshot, User, UserId,
};

/// Domain service owning users, campaigns and sessions.
pub struct CampaignService<S> {
    store: Arc<S>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    write_lock: Mutex<()>,
}

impl<S> CampaignService<S> {
    pub fn new(store: Arc<S>, ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            ids,
            clock,
            write_lock: Mutex::new(()),
        }
    }
}

impl<S: DomainStore> CampaignService<S> {
    async fn load(&self) -> Result<StoreSnapshot, BookingError> {
        self.store.load().await.map_err(storage_failure)
    }

    async fn persist(&self, snapshot: &StoreSnapshot) -> Result<(), BookingError> {
        self.store.persist(snapshot).await.map_err(storage_failure)
    }

    /// Existing DM for the draft's email, or a newly appended one.
    fn resolve_dm(&self, snapshot: &mut StoreSnapshot, draft: &CampaignDraft) -> UserId {
        if let Some(existing) = snapshot.find_user_by_email(draft.dm_email()) {
            return existing.id;
        }
        let user = User::new_dm(
            UserId::from_uuid(self.ids.next_uuid()),
            draft.dm_name(),
            draft.dm_email().clone(),
            self.clock.utc(),
        );
        let id = user.id;
        info!(user_id = %id, "dm registered");
        snapshot.users.push(user);
        id
    }
}

fn storage_failure(err: StoreError) -> BookingError {
    error!(error = %err, "booking store unavailable");
    BookingError::Storage(err)
}

fn rejected(err: crate::domain::ValidationErrors) -> BookingError {
    let fields: Vec<&str> = err.fields().collect();
    info!(?fields, "payload rejected");
    BookingError::Validation(err)
}

fn campaign_not_found(campaign_id: &str) -> BookingError {
    warn!(campaign_id, "session references unknown campaign");
    BookingError::CampaignNotFound {
        campaign_id: campaign_id.to_owned(),
    }
}

#[async_trait]
impl<S: DomainStore> CampaignCommand for CampaignService<S> {
    async fn create_campaign(&self, payload: CampaignPayload) -> Result<Campaign, BookingError> {
        let draft = CampaignDraft::try_from(payload).map_err(rejected)?;

        let _guard = self.write_lock.lock().await;
        let mut snapshot = self.load().await?;
        let dm_id = self.resolve_dm(&mut snapshot, &draft);
        let campaign = draft.into_campaign(
            CampaignId::from_uuid(self.ids.next_uuid()),
            dm_id,
            self.clock.utc(),
        );
        snapshot.campaigns.push(campaign.clone());
        self.persist(&snapshot).await?;

        info!(campaign_id = %campaign.id, dm_id = %dm_id, mode = %campaign.mode(), "campaign created");
        Ok(campaign)
    }

    async fn create_session(
        &self,
        campaign_id: &str,
        payload: SessionPayload,
    ) -> Result<Session, BookingError> {
        let draft = SessionDraft::try_from(payload).map_err(rejected)?;
        let Some(id) = CampaignId::parse(campaign_id) else {
            return Err(campaign_not_found(campaign_id));
        };

        let _guard = self.write_lock.lock().await;
        let mut snapshot = self.load().await?;
        if snapshot.find_campaign(id).is_none() {
            return Err(campaign_not_found(campaign_id));
        }
        let session = draft.into_session(
            SessionId::from_uuid(self.ids.next_uuid()),
            id,
            self.clock.utc(),
        );
        snapshot.sessions.push(session.clone());
        self.persist(&snapshot).await?;

        info!(session_id = %session.id, campaign_id = %id, "session scheduled");
        Ok(session)
    }
}

#[async_trait]
impl<S: DomainStore> CampaignQuery for CampaignService<S> {
    async fn list_campaigns(&self) -> Result<Vec<CampaignWithSessions>, BookingError> {
        Ok(self.load().await?.campaign_views())
    }
}

#[cfg(test)]
#[path = "campaign_service_tests.rs"]
mod tests;
