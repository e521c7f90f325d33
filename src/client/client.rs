//! Core admin client implementation

use parking_lot::RwLock;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::AdminConfig;
use crate::errors::{AdminError, Result};

/// Client for the gateway's `/admin/*` namespace.
///
/// Holds one configured connection and exposes one method per backend
/// operation. Every operation issues exactly one request; failures propagate
/// to the caller without retries.
#[derive(Debug)]
pub struct AdminClient {
    pub(crate) config: AdminConfig,
    pub(crate) http_client: reqwest::Client,
    pub(crate) admin_key: RwLock<Option<String>>,
}

impl AdminClient {
    /// Create a new admin client.
    pub fn new(config: AdminConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(AdminError::Config("No base URL configured".to_string()));
        }
        url::Url::parse(&config.base_url).map_err(|e| {
            AdminError::Config(format!("Invalid base URL {}: {}", config.base_url, e))
        })?;

        // Build HTTP client
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.settings.timeout));
        if let Some(user_agent) = &config.settings.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let http_client = builder
            .build()
            .map_err(|e| AdminError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let admin_key = RwLock::new(config.admin_key.clone());

        info!("AdminClient created for {}", config.base_url);

        Ok(Self {
            config,
            http_client,
            admin_key,
        })
    }

    /// Set the bearer credential used by all requests built after this call.
    ///
    /// Requests already dispatched keep the credential they were built with.
    pub fn set_auth_token(&self, token: impl Into<String>) {
        *self.admin_key.write() = Some(token.into());
    }

    /// Get configuration
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Start a JSON request against an admin path, carrying the current
    /// bearer credential if one is set.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("{} {}", method, path);
        let mut builder = self
            .http_client
            .request(method, self.url(path))
            .header("content-type", "application/json");
        if let Some(token) = self.admin_key.read().as_deref() {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        builder
    }

    /// Start a multipart POST; the form sets its own content type.
    pub(crate) fn multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> RequestBuilder {
        debug!("POST {} (multipart)", path);
        let mut builder = self.http_client.post(self.url(path)).multipart(form);
        if let Some(token) = self.admin_key.read().as_deref() {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        builder
    }

    /// Dispatch a request and decode the response into the operation's schema.
    pub(crate) async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder
            .send()
            .await
            .map_err(|e| AdminError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("admin API error: {} - {}", status, body);
            return Err(AdminError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AdminError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| AdminError::Schema(e.to_string()))
    }
}
