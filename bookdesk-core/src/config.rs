//! Client configuration read from the environment

use crate::error::ConfigError;

/// Base URL used when `BOOKDESK_API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

/// Settings for building a book store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the remote collection (books live under `{api_url}/books`)
    pub api_url: String,

    /// Reject a mutation on a book that already has one in flight
    pub guard_in_flight: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            guard_in_flight: false,
        }
    }
}

impl ClientConfig {
    /// Read `BOOKDESK_API_URL` and `BOOKDESK_GUARD_IN_FLIGHT`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = lookup("BOOKDESK_API_URL").filter(|u| !u.trim().is_empty()) {
            config.api_url = url.trim().to_string();
        }
        if let Some(flag) = lookup("BOOKDESK_GUARD_IN_FLIGHT") {
            config.guard_in_flight = parse_flag("BOOKDESK_GUARD_IN_FLIGHT", &flag)?;
        }
        Ok(config)
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        }),
    }
}
