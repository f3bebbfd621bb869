//! HTTP server configuration object and helpers.

use std::path::Path;

use backend::domain::StoreSnapshot;
use backend::domain::ports::StoreError;
use backend::outbound::persistence::JsonFileDomainStore;
use backend::settings::ServerSettings;
use tracing::info;

/// Everything `create_server` needs: where to listen and an initialised store.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) store: JsonFileDomainStore,
}

impl ServerConfig {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, store: JsonFileDomainStore) -> Self {
        Self {
            host: host.into(),
            port,
            store,
        }
    }

    /// Open and initialise the store named by `settings`, then capture the
    /// listener address.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the store directory cannot be prepared or
    /// the existing document is unreadable or inconsistent.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, StoreError> {
        let store = open_store(settings.store_path())?;
        Ok(Self::new(settings.host(), settings.port(), store))
    }
}

fn open_store(path: &Path) -> Result<JsonFileDomainStore, StoreError> {
    let store = JsonFileDomainStore::open(path)?;
    let StoreSnapshot {
        users,
        campaigns,
        sessions,
    } = store.initialise()?;
    info!(
        path = %store.path(),
        users = users.len(),
        campaigns = campaigns.len(),
        sessions = sessions.len(),
        "store ready"
    );
    Ok(store)
}
