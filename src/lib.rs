//! Provider-parameter normalization and cost accounting for Anthropic-style
//! chat-completion clients.
//!
//! Three small, synchronous components:
//! - [`Credentials::resolve`] picks exactly one authentication variant
//!   (API key, AWS Bedrock, or GCP Vertex) from constructor inputs.
//! - [`GenerationParams::normalize`] maps caller sampling parameters onto
//!   the fixed shape the messages endpoint expects, filling documented
//!   defaults.
//! - [`pricing::estimate_cost`] prices token usage against an injectable,
//!   versioned per-model table.
//!
//! Network transport, auth flows and agent orchestration are out of scope;
//! [`AnthropicAdapter`] is the façade a transport layer composes with.

pub mod client;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod error;
pub mod params;
pub mod pricing;
pub mod usage;

pub use client::AnthropicAdapter;
pub use config::ClientConfig;
pub use credentials::Credentials;
pub use error::AdapterError;
pub use params::{GenerationParams, NormalizedParams};
pub use pricing::{ModelPricing, PriceBook, PriceTable, estimate_cost};
pub use usage::TokenUsage;
