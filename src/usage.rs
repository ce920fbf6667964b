//! Token usage accounting.
//!
//! The transport layer is external; all this crate needs back from it is
//! a [`TokenUsage`] record per completion. Helpers here parse that record
//! out of a provider response payload and accumulate it across streamed
//! chunks.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token counts for one completion request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u64, completion_tokens: u64) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
        }
    }

    /// Parse usage from a provider's usage object. Accepts both the
    /// Anthropic key names (`input_tokens`/`output_tokens`) and the
    /// OpenAI-style ones (`prompt_tokens`/`completion_tokens`); missing
    /// counts read as zero.
    pub fn from_json(value: &Value) -> Self {
        let count = |primary: &str, alias: &str| {
            value
                .get(primary)
                .or_else(|| value.get(alias))
                .and_then(|v| v.as_u64())
                .unwrap_or(0)
        };
        Self {
            prompt_tokens: count("input_tokens", "prompt_tokens"),
            completion_tokens: count("output_tokens", "completion_tokens"),
        }
    }

    /// Add another usage report to this one (useful for accumulating in
    /// streams).
    pub fn add(&mut self, other: &TokenUsage) {
        self.prompt_tokens += other.prompt_tokens;
        self.completion_tokens += other.completion_tokens;
    }

    pub fn total_tokens(&self) -> u64 {
        self.prompt_tokens + self.completion_tokens
    }
}
