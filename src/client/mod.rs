//! Admin API client
//!
//! One method per backend operation, split by concern: keys, pricing,
//! access tokens, and statistics. All methods issue exactly one request
//! over the client's shared connection.

mod client;
mod keys;
mod pricing;
mod stats;
mod tokens;


pub use client::AdminClient;
