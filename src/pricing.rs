//! Per-model pricing and cost estimation.
//!
//! Prices are USD per 1 000 tokens, keyed by exact model id. The table is
//! injectable and versioned so pricing updates do not require recompiling
//! callers; [`PriceBook`] adds hot reload behind a reader-writer lock.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::AdapterError;

/// Rounding precision for cost figures: micro-dollars.
const COST_PRECISION: f64 = 1e6;

/// Version tag of the built-in price table.
pub const BUILTIN_TABLE_VERSION: &str = "2024-06-20";

/// Model pricing for cost calculation, USD per 1k tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPricing {
    pub input_price: f64,
    pub output_price: f64,
}

/// Read-only price table keyed by exact model id.
#[derive(Debug, Clone)]
pub struct PriceTable {
    version: String,
    entries: HashMap<String, ModelPricing>,
}

impl PriceTable {
    pub fn new(
        version: impl Into<String>,
        entries: impl IntoIterator<Item = (String, ModelPricing)>,
    ) -> Self {
        Self {
            version: version.into(),
            entries: entries.into_iter().collect(),
        }
    }

    /// The table shipped with the crate, matching Anthropic's published
    /// prices at the version date.
    pub fn builtin() -> Self {
        let per_1k = |input: f64, output: f64| ModelPricing {
            input_price: input,
            output_price: output,
        };

        let entries = [
            ("claude-3-5-sonnet-20240620", per_1k(0.003, 0.015)),
            ("claude-3-opus-20240229", per_1k(0.015, 0.075)),
            ("claude-3-sonnet-20240229", per_1k(0.003, 0.015)),
            ("claude-3-haiku-20240307", per_1k(0.00025, 0.00125)),
            ("claude-2.1", per_1k(0.008, 0.024)),
            ("claude-2.0", per_1k(0.008, 0.024)),
            ("claude-instant-1.2", per_1k(0.0008, 0.0024)),
        ];

        Self::new(
            BUILTIN_TABLE_VERSION,
            entries.into_iter().map(|(id, p)| (id.to_string(), p)),
        )
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn get(&self, model_id: &str) -> Option<ModelPricing> {
        self.entries.get(model_id).copied()
    }

    pub fn model_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Estimate the USD cost of a completion, rounded to micro-dollars.
///
/// Lookup is by exact model id; a miss is an [`AdapterError::UnknownModel`]
/// rather than a silent zero, so unpriced requests cannot go unnoticed.
pub fn estimate_cost(
    prompt_tokens: u64,
    completion_tokens: u64,
    model_id: &str,
    table: &PriceTable,
) -> Result<f64, AdapterError> {
    let Some(pricing) = table.get(model_id) else {
        warn!(model = %model_id, table_version = %table.version, "model missing from price table");
        return Err(AdapterError::UnknownModel(model_id.to_string()));
    };

    let cost = (prompt_tokens as f64 / 1000.0) * pricing.input_price
        + (completion_tokens as f64 / 1000.0) * pricing.output_price;
    Ok((cost * COST_PRECISION).round() / COST_PRECISION)
}

/// Hot-reloadable handle around a [`PriceTable`].
///
/// Readers clone the current `Arc` under a shared lock, so an in-flight
/// estimate always sees one complete table; `replace` swaps the whole
/// table at once.
#[derive(Debug)]
pub struct PriceBook {
    table: RwLock<Arc<PriceTable>>,
}

impl PriceBook {
    pub fn new(table: PriceTable) -> Self {
        Self {
            table: RwLock::new(Arc::new(table)),
        }
    }

    /// Snapshot of the active table.
    pub fn load(&self) -> Arc<PriceTable> {
        self.table
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Swap in a new table, returning the previous one.
    pub fn replace(&self, table: PriceTable) -> Arc<PriceTable> {
        debug!(version = %table.version, "replacing price table");
        let next = Arc::new(table);
        let mut guard = self
            .table
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::replace(&mut *guard, next)
    }

    pub fn estimate_cost(
        &self,
        prompt_tokens: u64,
        completion_tokens: u64,
        model_id: &str,
    ) -> Result<f64, AdapterError> {
        estimate_cost(prompt_tokens, completion_tokens, model_id, &self.load())
    }
}

impl Default for PriceBook {
    fn default() -> Self {
        Self::new(PriceTable::builtin())
    }
}
