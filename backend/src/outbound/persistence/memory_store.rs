//! `DomainStore` held in process memory.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::StoreSnapshot;
use crate::domain::ports::{DomainStore, StoreError};

/// Snapshot kept behind a mutex; nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryDomainStore {
    snapshot: Mutex<StoreSnapshot>,
}

impl InMemoryDomainStore {
    /// Copy of the last persisted snapshot.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl DomainStore for InMemoryDomainStore {
    async fn load(&self) -> Result<StoreSnapshot, StoreError> {
        Ok(self.snapshot())
    }

    async fn persist(&self, snapshot: &StoreSnapshot) -> Result<(), StoreError> {
        *self
            .snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = snapshot.clone();
        Ok(())
    }
}
