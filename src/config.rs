//! Client configuration

use serde::{Deserialize, Serialize};

use crate::errors::{AdminError, Result};

/// Admin client configuration.
///
/// Owned by the caller and handed to [`AdminClient::new`](crate::AdminClient::new);
/// there is no hidden global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Gateway base URL, e.g. `http://127.0.0.1:8000`
    pub base_url: String,
    /// Admin bearer credential, if already known at construction time
    #[serde(default)]
    pub admin_key: Option<String>,
    /// Transport settings
    #[serde(default)]
    pub settings: ClientSettings,
}

/// Transport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Request timeout in seconds
    pub timeout: u64,
    /// Optional User-Agent override
    pub user_agent: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: None,
        }
    }
}

/// Configuration builder
pub struct ConfigBuilder {
    config: AdminConfig,
}

impl ConfigBuilder {
    /// Create a builder for the given gateway base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            config: AdminConfig {
                base_url: base_url.to_string(),
                admin_key: None,
                settings: ClientSettings::default(),
            },
        }
    }

    /// Seed the bearer credential.
    pub fn admin_key(mut self, key: &str) -> Self {
        self.config.admin_key = Some(key.to_string());
        self
    }

    /// Request timeout in seconds.
    pub fn timeout(mut self, timeout: u64) -> Self {
        self.config.settings.timeout = timeout;
        self
    }

    /// Override the User-Agent header.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.config.settings.user_agent = Some(user_agent.to_string());
        self
    }

    /// Finish building.
    pub fn build(self) -> AdminConfig {
        self.config
    }
}

impl AdminConfig {
    /// Build a configuration from `GATEWAY_ADMIN_URL` and `GATEWAY_ADMIN_KEY`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("GATEWAY_ADMIN_URL").map_err(|_| {
            AdminError::Config(
                "No gateway configured. Please set the GATEWAY_ADMIN_URL environment variable."
                    .to_string(),
            )
        })?;

        let mut builder = ConfigBuilder::new(&base_url);
        if let Ok(key) = std::env::var("GATEWAY_ADMIN_KEY") {
            builder = builder.admin_key(&key);
        }

        Ok(builder.build())
    }

    /// Load a configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AdminError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            AdminError::Config(format!("Failed to parse config file {}: {}", path, e))
        })
    }
}
