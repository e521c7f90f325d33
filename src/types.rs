//! Request and response schemas for the admin API.
//!
//! One schema per operation, validated at the boundary: a response that does
//! not decode into its schema surfaces as [`AdminError::Schema`](crate::AdminError::Schema)
//! rather than a loose JSON value. Timestamps are naive ISO-8601 strings as
//! emitted by the backend.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an upstream API key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStatus {
    /// Usable, has remaining balance
    Active,
    /// Balance spent
    Exhausted,
    /// Rejected by the upstream
    Invalid,
}

/// One upstream API key record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyRecord {
    /// Record id
    pub id: i64,
    /// The key itself
    pub key: String,
    /// Remaining balance
    pub balance: f64,
    /// Balance at import time
    pub initial_balance: f64,
    /// Amount consumed so far
    pub used_amount: f64,
    /// Requests served with this key
    pub request_count: i64,
    /// Lifecycle status
    pub status: KeyStatus,
    /// Last time the key served a request
    pub last_used: Option<NaiveDateTime>,
    /// Last remote balance sync
    pub last_synced: Option<NaiveDateTime>,
    /// Creation time
    pub created_at: NaiveDateTime,
}

/// Parameters for the paged key listing
#[derive(Debug, Clone, Serialize)]
pub struct KeyQuery {
    /// Filter by [`KeyStatus`] name; omitted from the query when empty
    pub status: Option<String>,
    /// 1-based page number
    pub page: u32,
    /// Page size
    pub page_size: u32,
}

impl Default for KeyQuery {
    fn default() -> Self {
        Self {
            status: None,
            page: 1,
            page_size: 50,
        }
    }
}

/// One page of keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPage {
    /// Records on this page
    pub keys: Vec<KeyRecord>,
    /// Total records across all pages
    pub total: u64,
    /// 1-based page number
    pub page: u32,
    /// Page size used
    pub page_size: u32,
    /// Total page count
    pub total_pages: u32,
}

/// Body for creating or importing a key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyCreate {
    /// The key string
    pub key: String,
    /// Starting balance
    pub balance: f64,
}

/// Body of the bulk JSON import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyImport {
    /// Keys to import
    pub keys: Vec<KeyCreate>,
}

/// Outcome of a bulk import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Keys submitted
    pub total: u64,
    /// Newly added
    pub added: u64,
    /// Skipped as already present
    pub duplicates: u64,
    /// Failed to insert
    pub errors: u64,
}

/// Aggregate key statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyStats {
    pub total_keys: u64,
    pub active_keys: u64,
    pub exhausted_keys: u64,
    pub invalid_keys: u64,
    pub total_balance: f64,
    pub total_used: f64,
    pub total_requests: u64,
}

/// Ack for a single-key create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMutation {
    /// Whether the key was created
    pub success: bool,
    /// The created record, on success
    #[serde(default)]
    pub key: Option<KeyRecord>,
    /// Failure reason, e.g. a duplicate key
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic mutation ack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    /// Whether the mutation was applied
    pub success: bool,
}

/// Outcome of the invalid-key batch delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidKeysDeleted {
    /// Records removed
    pub deleted: u64,
}

/// Outcome of a full balance sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Keys examined
    pub total: u64,
    /// Balances refreshed
    pub synced: u64,
    /// Sync attempts that errored
    pub failed: u64,
    /// Keys the upstream rejected
    pub invalid: u64,
}

/// Outcome of a single-key balance sync
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeySync {
    /// Whether the sync succeeded
    pub success: bool,
    /// The refreshed record
    #[serde(default)]
    pub key: Option<KeyRecord>,
}

/// One pricing rule: a model-name pattern mapped to a per-request price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRule {
    /// Rule id
    pub id: i64,
    /// Model-name pattern the rule applies to
    pub model_pattern: String,
    /// Price charged per request
    pub price_per_request: f64,
    /// Free-form description
    pub description: Option<String>,
    /// Creation time
    pub created_at: NaiveDateTime,
}

/// Body for creating a pricing rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingCreate {
    pub model_pattern: String,
    pub price_per_request: f64,
    pub description: String,
}

/// Body for updating a pricing rule.
///
/// The pattern field is always sent as an empty string: the backend ignores
/// it on update and only applies price and description. Constructed through
/// [`PricingUpdate::new`] so the wire shape cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingUpdate {
    pub model_pattern: String,
    pub price_per_request: f64,
    pub description: String,
}

impl PricingUpdate {
    /// Build an update body; the pattern stays blank.
    pub fn new(price_per_request: f64, description: &str) -> Self {
        Self {
            model_pattern: String::new(),
            price_per_request,
            description: description.to_string(),
        }
    }
}

/// Ack for a pricing-rule create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingMutation {
    /// Whether the rule was created
    pub success: bool,
    /// The created rule, on success
    #[serde(default)]
    pub pricing: Option<PricingRule>,
    /// Failure reason, e.g. a duplicate pattern
    #[serde(default)]
    pub message: Option<String>,
}

/// Price lookup result for one model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCheck {
    /// Model name as queried
    pub model: String,
    /// Effective per-request price
    pub price: f64,
}

/// Upstream model listing, grouped by family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamModels {
    /// Model families in display order
    pub categories: Vec<ModelCategory>,
    /// Total models across all families
    pub total: u64,
    /// Set when the upstream fetch failed
    #[serde(default)]
    pub error: Option<String>,
}

/// One model family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCategory {
    /// Family name, e.g. "Claude Sonnet"
    pub name: String,
    /// Models in the family, sorted by id
    pub models: Vec<UpstreamModel>,
}

/// One upstream model with its effective price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamModel {
    /// Model id
    pub id: String,
    /// Effective per-request price
    pub price: f64,
    /// Endpoint types the upstream supports for this model
    #[serde(default)]
    pub endpoints: Vec<String>,
}

/// One outward-facing access token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Record id
    pub id: i64,
    /// Display name
    pub name: String,
    /// The token value
    pub token: String,
    /// Whether the token is accepted
    pub enabled: bool,
    /// Requests served with this token
    pub request_count: i64,
    /// Creation time
    pub created_at: NaiveDateTime,
    /// Last time the token was used
    pub last_used: Option<NaiveDateTime>,
}

/// Body for creating an access token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenCreate {
    /// Display name
    pub name: String,
}

/// Ack for an access-token create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMutation {
    /// Whether the token was created
    pub success: bool,
    /// The created token, on success
    #[serde(default)]
    pub token: Option<AccessToken>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_query_defaults() {
        let query = KeyQuery::default();
        assert!(query.status.is_none());
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 50);
    }

    #[test]
    fn test_pricing_update_pins_empty_pattern() {
        let body = PricingUpdate::new(0.12, "bulk tier");
        assert_eq!(body.model_pattern, "");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model_pattern"], "");
        assert_eq!(json["price_per_request"], 0.12);
        assert_eq!(json["description"], "bulk tier");
    }

    #[test]
    fn test_key_record_decodes_naive_timestamps() {
        let json = r#"{
            "id": 7,
            "key": "sk-test",
            "balance": 0.24,
            "initial_balance": 0.24,
            "used_amount": 0.0,
            "request_count": 3,
            "status": "active",
            "last_used": "2024-05-01T10:30:00",
            "last_synced": null,
            "created_at": "2024-04-30T08:00:00"
        }"#;
        let record: KeyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.status, KeyStatus::Active);
        assert!(record.last_used.is_some());
        assert!(record.last_synced.is_none());
    }

    #[test]
    fn test_key_status_rename() {
        assert_eq!(
            serde_json::to_string(&KeyStatus::Exhausted).unwrap(),
            "\"exhausted\""
        );
        let status: KeyStatus = serde_json::from_str("\"invalid\"").unwrap();
        assert_eq!(status, KeyStatus::Invalid);
    }
}
