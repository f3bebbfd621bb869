//! `DomainStore` backed by a single pretty-printed JSON document.
//!
//! Every load reads the whole file and every persist atomically replaces it.
//! File I/O runs on Tokio's blocking pool.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use camino::Utf8Path;
use json_document::{DocumentError, JsonDocument};
use tracing::debug;

use crate::domain::StoreSnapshot;
use crate::domain::ports::{DomainStore, StoreError};

/// JSON document store, e.g. `data/store.json`.
#[derive(Debug, Clone)]
pub struct JsonFileDomainStore {
    document: Arc<JsonDocument>,
}

impl JsonFileDomainStore {
    /// Open the store at `path`, creating its parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] when the directory cannot be prepared.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let document = JsonDocument::open(path).map_err(map_document_error)?;
        Ok(Self {
            document: Arc::new(document),
        })
    }

    pub fn path(&self) -> &Utf8Path {
        self.document.path()
    }

    /// Write an empty store if none exists, then check the stored content.
    ///
    /// Intended for process startup, before the HTTP server binds.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`DomainStore::load`].
    pub fn initialise(&self) -> Result<StoreSnapshot, StoreError> {
        let snapshot: StoreSnapshot = self
            .document
            .read_or_init()
            .map_err(map_document_error)?;
        checked(&self.document, snapshot)
    }

    /// Run `task` on the blocking pool; a panicked or cancelled task is
    /// reported through `failure`.
    async fn run_blocking<T, F>(
        &self,
        failure: fn(String) -> StoreError,
        task: F,
    ) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&JsonDocument) -> Result<T, StoreError> + Send + 'static,
    {
        let document = Arc::clone(&self.document);
        tokio::task::spawn_blocking(move || task(&document))
            .await
            .map_err(|err| failure(format!("store task failed: {err}")))?
    }
}

/// Reads the document without creating it; a missing file is an empty store.
fn read_checked(document: &JsonDocument) -> Result<StoreSnapshot, StoreError> {
    let snapshot: StoreSnapshot = document
        .read()
        .map_err(map_document_error)?
        .unwrap_or_default();
    checked(document, snapshot)
}

fn checked(document: &JsonDocument, snapshot: StoreSnapshot) -> Result<StoreSnapshot, StoreError> {
    snapshot
        .check_integrity()
        .map_err(|err| StoreError::corrupt(format!("{}: {err}", document.path())))?;
    debug!(
        path = %document.path(),
        users = snapshot.users.len(),
        campaigns = snapshot.campaigns.len(),
        sessions = snapshot.sessions.len(),
        "store loaded"
    );
    Ok(snapshot)
}

fn map_document_error(err: DocumentError) -> StoreError {
    match err {
        DocumentError::Parse { .. } => StoreError::corrupt(err.to_string()),
        DocumentError::Serialize { .. } | DocumentError::Write { .. } => {
            StoreError::write(err.to_string())
        }
        DocumentError::NonUtf8Path { .. }
        | DocumentError::NotAFile { .. }
        | DocumentError::Open { .. }
        | DocumentError::Read { .. } => StoreError::read(err.to_string()),
    }
}

#[async_trait]
impl DomainStore for JsonFileDomainStore {
    async fn load(&self) -> Result<StoreSnapshot, StoreError> {
        self.run_blocking(|message| StoreError::read(message), read_checked)
            .await
    }

    async fn persist(&self, snapshot: &StoreSnapshot) -> Result<(), StoreError> {
        let snapshot = snapshot.clone();
        self.run_blocking(
            |message| StoreError::write(message),
            move |document| document.write(&snapshot).map_err(map_document_error),
        )
        .await
    }
}
