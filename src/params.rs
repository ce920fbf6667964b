//! Generation parameter normalization.
//!
//! Converts caller-supplied sampling parameters into the exact shape the
//! Anthropic messages endpoint expects. The normalized output always
//! carries the full fixed key set; unset optional fields serialize as
//! explicit nulls rather than being omitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::constants::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::error::AdapterError;

/// Caller-supplied generation parameters. Only `model` is required.
///
/// Deserialization is strict: keys outside this set are rejected, so a
/// typo like `temprature` fails loudly instead of being dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationParams {
    pub model: Option<String>,
    pub stream: Option<bool>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub max_tokens: Option<u32>,
    pub stop_sequences: Option<Vec<String>>,
    pub top_k: Option<u32>,
}

/// Normalized request parameters: the fixed key set
/// `{model, stream, temperature, top_p, max_tokens, stop_sequences, top_k}`,
/// every key always present when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedParams {
    pub model: String,
    pub stream: bool,
    pub temperature: f64,
    pub top_p: Option<f64>,
    pub max_tokens: u32,
    pub stop_sequences: Option<Vec<String>>,
    pub top_k: Option<u32>,
}

impl GenerationParams {
    /// Parse parameters from a JSON map, rejecting unknown keys.
    pub fn from_value(value: Value) -> Result<Self, AdapterError> {
        serde_json::from_value(value).map_err(|e| AdapterError::InvalidParams(e.to_string()))
    }

    /// Fill documented defaults and produce the fixed-shape parameter set.
    ///
    /// Defaults: `stream` false, `temperature` 1.0, `max_tokens` 4096;
    /// `top_p`, `stop_sequences` and `top_k` stay null. The input is not
    /// consumed, and normalizing twice yields identical output.
    pub fn normalize(&self) -> Result<NormalizedParams, AdapterError> {
        let model = match self.model.as_deref() {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => return Err(AdapterError::MissingModel),
        };

        if self.temperature.is_none() || self.max_tokens.is_none() {
            debug!(model = %model, "filling default sampling parameters");
        }

        Ok(NormalizedParams {
            model,
            stream: self.stream.unwrap_or(false),
            temperature: self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            top_p: self.top_p,
            max_tokens: self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            stop_sequences: self.stop_sequences.clone(),
            top_k: self.top_k,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_full_config() {
        let params = GenerationParams::from_value(json!({
            "model": "claude-3-sonnet-20240229",
            "stream": false,
            "temperature": 1.0,
            "top_p": 0.8,
            "max_tokens": 100
        }))
        .unwrap();

        let normalized = params.normalize().unwrap();
        let expected = json!({
            "model": "claude-3-sonnet-20240229",
            "stream": false,
            "temperature": 1.0,
            "top_p": 0.8,
            "max_tokens": 100,
            "stop_sequences": null,
            "top_k": null
        });
        assert_eq!(serde_json::to_value(&normalized).unwrap(), expected);
    }

    #[test]
    fn test_normalize_fills_defaults() {
        let params = GenerationParams::from_value(json!({"model": "m"})).unwrap();
        let normalized = params.normalize().unwrap();

        assert_eq!(normalized.model, "m");
        assert!(!normalized.stream);
        assert_eq!(normalized.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(normalized.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(normalized.top_p, None);
        assert_eq!(normalized.stop_sequences, None);
        assert_eq!(normalized.top_k, None);

        // All seven keys present in the serialized form, nulls included.
        let value = serde_json::to_value(&normalized).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 7);
        assert!(obj["stop_sequences"].is_null());
        assert!(obj["top_p"].is_null());
        assert!(obj["top_k"].is_null());
    }

    #[test]
    fn test_normalize_missing_model() {
        let params = GenerationParams::from_value(json!({"temperature": 0.5})).unwrap();
        assert!(matches!(
            params.normalize(),
            Err(AdapterError::MissingModel)
        ));
    }

    #[test]
    fn test_normalize_empty_model() {
        let params = GenerationParams::from_value(json!({"model": ""})).unwrap();
        assert!(matches!(
            params.normalize(),
            Err(AdapterError::MissingModel)
        ));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result = GenerationParams::from_value(json!({
            "model": "m",
            "temprature": 0.7
        }));
        assert!(matches!(result, Err(AdapterError::InvalidParams(_))));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let params = GenerationParams::from_value(json!({
            "model": "claude-3-opus-20240229",
            "stop_sequences": ["\n\nHuman:"],
            "top_k": 5
        }))
        .unwrap();

        let first = params.normalize().unwrap();
        let second = params.normalize().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.stop_sequences, Some(vec!["\n\nHuman:".to_string()]));
        assert_eq!(first.top_k, Some(5));
    }
}
