//! Access token operations

use reqwest::Method;

use super::client::AdminClient;
use crate::errors::Result;
use crate::types::{AccessToken, Ack, TokenCreate, TokenMutation};

impl AdminClient {
    /// List all access tokens.
    pub async fn tokens(&self) -> Result<Vec<AccessToken>> {
        let builder = self.request(Method::GET, "/admin/tokens");
        self.send(builder).await
    }

    /// Create an access token with a display name.
    pub async fn create_token(&self, name: &str) -> Result<TokenMutation> {
        let body = TokenCreate {
            name: name.to_string(),
        };
        let builder = self.request(Method::POST, "/admin/tokens").json(&body);
        self.send(builder).await
    }

    /// Enable or disable an access token. The flag rides in the query string.
    pub async fn toggle_token(&self, token_id: i64, enabled: bool) -> Result<Ack> {
        let builder = self
            .request(Method::PUT, &format!("/admin/tokens/{}/toggle", token_id))
            .query(&[("enabled", enabled)]);
        self.send(builder).await
    }

    /// Delete one access token.
    pub async fn delete_token(&self, token_id: i64) -> Result<Ack> {
        let builder = self.request(Method::DELETE, &format!("/admin/tokens/{}", token_id));
        self.send(builder).await
    }
}
