//! Store configuration

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Environment variable holding the store base URL
pub const ENV_URL: &str = "SWITCHDIR_STORE_URL";

/// Environment variable holding the store API key
pub const ENV_KEY: &str = "SWITCHDIR_STORE_KEY";

/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT: &str = "SWITCHDIR_STORE_TIMEOUT_SECS";

/// Connection settings for a remote record store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base URL of the store project
    pub url: Url,

    /// Anonymous API key, sent as `apikey` and bearer token
    pub api_key: Option<String>,

    /// Deadline for one request, including the body
    pub timeout: Duration,
}

impl StoreConfig {
    /// Default request timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a config for the store at `url`
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url)?;

        if url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(format!("{} cannot be a base URL", url)));
        }

        Ok(Self {
            url,
            api_key: None,
            timeout: Self::DEFAULT_TIMEOUT,
        })
    }

    /// Set API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the config from `SWITCHDIR_STORE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the config through `lookup`, keyed by environment variable name
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = lookup(ENV_URL).ok_or_else(|| Error::Config(format!("{} is not set", ENV_URL)))?;

        let mut config = Self::new(&url)?;

        if let Some(key) = lookup(ENV_KEY).filter(|k| !k.is_empty()) {
            config = config.with_api_key(key);
        }

        if let Some(secs) = lookup(ENV_TIMEOUT) {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("{} must be whole seconds, got {:?}", ENV_TIMEOUT, secs)))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
