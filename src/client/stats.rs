//! Statistics and upstream discovery

use reqwest::Method;

use super::client::AdminClient;
use crate::errors::Result;
use crate::types::{KeyStats, UpstreamModels};

impl AdminClient {
    /// Fetch aggregate key statistics.
    pub async fn stats(&self) -> Result<KeyStats> {
        let builder = self.request(Method::GET, "/admin/stats");
        self.send(builder).await
    }

    /// List the models the upstream knows, grouped by family with prices.
    pub async fn upstream_models(&self) -> Result<UpstreamModels> {
        let builder = self.request(Method::GET, "/admin/models");
        self.send(builder).await
    }
}
