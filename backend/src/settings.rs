//! Server configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `NIMUE_*` environment variables and config
//! files. Unset values fall back to the defaults in the accessors below.

use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STORE_PATH: &str = "data/store.json";

/// Listener address and store location for the `nimue` server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NIMUE")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// Path of the JSON document holding users, campaigns and sessions.
    pub store_path: Option<PathBuf>,
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn store_path(&self) -> &Path {
        self.store_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_STORE_PATH))
    }

    /// `(host, port)` pair accepted by `HttpServer::bind`.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host(), self.port())
    }
}
