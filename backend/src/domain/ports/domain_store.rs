//! Driven port for whole-document persistence of the booking store.

use async_trait::async_trait;

use crate::domain::StoreSnapshot;

use super::define_port_error;

define_port_error! {
    /// Errors raised by domain store adapters.
    pub enum StoreError {
        /// The persisted document could not be read.
        Read { message: String } => "store read failed: {message}",
        /// The document could not be written back.
        Write { message: String } => "store write failed: {message}",
        /// The document was read but its content is unusable.
        Corrupt { message: String } => "store content is corrupt: {message}",
    }
}

/// Loads and persists the users, campaigns and sessions as one unit.
///
/// `persist` replaces the whole stored document with `snapshot`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainStore: Send + Sync {
    async fn load(&self) -> Result<StoreSnapshot, StoreError>;

    async fn persist(&self, snapshot: &StoreSnapshot) -> Result<(), StoreError>;
}
