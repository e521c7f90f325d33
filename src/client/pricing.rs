//! Pricing rule operations

use reqwest::Method;

use super::client::AdminClient;
use crate::errors::Result;
use crate::types::{Ack, PriceCheck, PricingCreate, PricingMutation, PricingRule, PricingUpdate};

impl AdminClient {
    /// List all pricing rules.
    pub async fn pricing(&self) -> Result<Vec<PricingRule>> {
        let builder = self.request(Method::GET, "/admin/pricing");
        self.send(builder).await
    }

    /// Create a pricing rule for a model-name pattern.
    pub async fn add_pricing(
        &self,
        model_pattern: &str,
        price_per_request: f64,
        description: &str,
    ) -> Result<PricingMutation> {
        let body = PricingCreate {
            model_pattern: model_pattern.to_string(),
            price_per_request,
            description: description.to_string(),
        };
        let builder = self.request(Method::POST, "/admin/pricing").json(&body);
        self.send(builder).await
    }

    /// Update a rule's price and description. The pattern is sent as an
    /// empty string, which the server ignores on update.
    pub async fn update_pricing(
        &self,
        pricing_id: i64,
        price_per_request: f64,
        description: &str,
    ) -> Result<Ack> {
        let body = PricingUpdate::new(price_per_request, description);
        let builder = self
            .request(Method::PUT, &format!("/admin/pricing/{}", pricing_id))
            .json(&body);
        self.send(builder).await
    }

    /// Delete one pricing rule.
    pub async fn delete_pricing(&self, pricing_id: i64) -> Result<Ack> {
        let builder = self.request(Method::DELETE, &format!("/admin/pricing/{}", pricing_id));
        self.send(builder).await
    }

    /// Look up the effective per-request price for a model.
    pub async fn check_model_price(&self, model: &str) -> Result<PriceCheck> {
        let builder = self
            .request(Method::GET, "/admin/pricing/check")
            .query(&[("model", model)]);
        self.send(builder).await
    }
}
