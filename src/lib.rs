//! # gateway-admin-sdk
//!
//! A Rust client for the `/admin/*` REST namespace of an OpenAI-compatible
//! key and pricing gateway. It covers key management (CRUD, bulk import,
//! balance sync), pricing rules, access tokens, aggregate statistics, and
//! upstream model discovery.
//!
//! Each method issues exactly one HTTP request and returns the decoded
//! response schema; failures (network, non-2xx status, schema mismatch)
//! propagate to the caller without retries.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gateway_admin_sdk::{AdminClient, ConfigBuilder, KeyQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigBuilder::new("http://127.0.0.1:8000").build();
//!     let client = AdminClient::new(config)?;
//!     client.set_auth_token("my-admin-key");
//!
//!     let stats = client.stats().await?;
//!     println!("{} keys, {:.2} remaining", stats.total_keys, stats.total_balance);
//!
//!     let page = client.keys(&KeyQuery::default()).await?;
//!     for key in page.keys {
//!         println!("{} -> {:.2}", key.key, key.balance);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod types;

// Re-exports for convenience
pub use client::AdminClient;
pub use config::{AdminConfig, ClientSettings, ConfigBuilder};
pub use errors::{AdminError, Result};
pub use types::*;

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the SDK with default logging
pub fn init() {
    tracing_subscriber::fmt::init();
}
