//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`CampaignCommand`, `CampaignQuery`) are what inbound
//! adapters call. Driven ports (`DomainStore`, `IdGenerator`) are what the
//! domain needs from the outside world.

mod macros;
pub(crate) use macros::define_port_error;

mod campaign_command;
mod campaign_query;
mod domain_store;
mod id_generator;

#[cfg(test)]
pub use campaign_command::MockCampaignCommand;
pub use campaign_command::CampaignCommand;
#[cfg(test)]
pub use campaign_query::MockCampaignQuery;
pub use campaign_query::CampaignQuery;
#[cfg(test)]
pub use domain_store::MockDomainStore;
pub use domain_store::{DomainStore, StoreError};
pub use id_generator::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
