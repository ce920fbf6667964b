//! Client façade tying credential resolution, parameter normalization and
//! cost accounting together.
//!
//! The adapter issues no network requests itself. A caller resolves
//! credentials once at construction, normalizes parameters before handing
//! them to its transport, and prices the returned token usage afterwards.

use std::sync::Arc;

use serde_json::Value;

use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::error::AdapterError;
use crate::params::{GenerationParams, NormalizedParams};
use crate::pricing::PriceBook;
use crate::usage::TokenUsage;

#[derive(Debug)]
pub struct AnthropicAdapter {
    credentials: Credentials,
    price_book: Arc<PriceBook>,
}

impl AnthropicAdapter {
    /// Resolve credentials and build an adapter with the built-in price
    /// table. Fails immediately when no valid credential set is supplied;
    /// no network validation is attempted.
    pub fn new(config: &ClientConfig) -> Result<Self, AdapterError> {
        Self::with_price_book(config, Arc::new(PriceBook::default()))
    }

    /// Build an adapter against a caller-owned (possibly shared and
    /// hot-reloaded) price book.
    pub fn with_price_book(
        config: &ClientConfig,
        price_book: Arc<PriceBook>,
    ) -> Result<Self, AdapterError> {
        let credentials = Credentials::resolve(config)?;
        Ok(Self {
            credentials,
            price_book,
        })
    }

    /// The credential variant selected at construction.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn price_book(&self) -> &PriceBook {
        &self.price_book
    }

    /// Normalize generation parameters into the provider's request shape.
    pub fn normalize(&self, params: &GenerationParams) -> Result<NormalizedParams, AdapterError> {
        params.normalize()
    }

    /// Normalize parameters supplied as a raw JSON map, rejecting keys
    /// outside the supported set.
    pub fn normalize_value(&self, params: Value) -> Result<NormalizedParams, AdapterError> {
        GenerationParams::from_value(params)?.normalize()
    }

    /// Price a completion from explicit token counts.
    pub fn estimate_cost(
        &self,
        prompt_tokens: u64,
        completion_tokens: u64,
        model_id: &str,
    ) -> Result<f64, AdapterError> {
        self.price_book
            .estimate_cost(prompt_tokens, completion_tokens, model_id)
    }

    /// Price a completion from a usage record obtained off the transport's
    /// response payload.
    pub fn estimate_usage_cost(
        &self,
        usage: &TokenUsage,
        model_id: &str,
    ) -> Result<f64, AdapterError> {
        self.estimate_cost(usage.prompt_tokens, usage.completion_tokens, model_id)
    }
}
