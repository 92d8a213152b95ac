//! Server configuration read from the environment

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Settings for the collection server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address (`BOOKDESK_ADDR`)
    pub addr: SocketAddr,

    /// JSON file the collection is loaded from and saved to (`BOOKDESK_DATA_FILE`)
    pub data_file: Option<PathBuf>,

    /// `*` or a comma-separated origin list (`BOOKDESK_CORS_ORIGINS`)
    pub cors_origins: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let addr = lookup("BOOKDESK_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse()
            .with_context(|| format!("Invalid BOOKDESK_ADDR: {}", addr))?;

        Ok(Self {
            addr,
            data_file: lookup("BOOKDESK_DATA_FILE")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            cors_origins: lookup("BOOKDESK_CORS_ORIGINS"),
        })
    }
}
