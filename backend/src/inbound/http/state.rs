//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data`, so they depend only on the
//! driving ports and stay testable without touching the file system.

use std::sync::Arc;

use crate::domain::ports::{CampaignCommand, CampaignQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub campaigns: Arc<dyn CampaignCommand>,
    pub campaigns_query: Arc<dyn CampaignQuery>,
}

impl HttpState {
    pub fn new(campaigns: Arc<dyn CampaignCommand>, campaigns_query: Arc<dyn CampaignQuery>) -> Self {
        Self {
            campaigns,
            campaigns_query,
        }
    }

    /// State backed by one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::CampaignService;
    /// use backend::domain::ports::SequentialIdGenerator;
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::persistence::InMemoryDomainStore;
    ///
    /// let service = Arc::new(CampaignService::new(
    ///     Arc::new(InMemoryDomainStore::default()),
    ///     Arc::new(SequentialIdGenerator::default()),
    ///     Arc::new(mockable::DefaultClock),
    /// ));
    /// let _state = HttpState::from_service(service);
    /// ```
    pub fn from_service<T>(service: Arc<T>) -> Self
    where
        T: CampaignCommand + CampaignQuery + 'static,
    {
        Self {
            campaigns: service.clone(),
            campaigns_query: service,
        }
    }
}
