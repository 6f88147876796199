//! Token usage records and the session running total.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::protocol::UsageMetadata;

/// Usage reported for one successful call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetrics {
    pub prompt_tokens: u64,
    pub cached_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
    pub model_id: String,
}

impl UsageMetrics {
    pub fn from_metadata(meta: &UsageMetadata, model_id: impl Into<String>) -> Self {
        Self {
            prompt_tokens: meta.prompt_token_count,
            cached_tokens: meta.cached_content_token_count,
            output_tokens: meta.candidates_token_count,
            total_tokens: meta.total_token_count,
            model_id: model_id.into(),
        }
    }
}

/// Per-model slice of the running total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ModelUsage {
    pub prompt_tokens: u64,
    pub cached_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
    pub call_count: u64,
}

impl ModelUsage {
    fn add(&mut self, other: &Self) {
        self.prompt_tokens = self.prompt_tokens.saturating_add(other.prompt_tokens);
        self.cached_tokens = self.cached_tokens.saturating_add(other.cached_tokens);
        self.output_tokens = self.output_tokens.saturating_add(other.output_tokens);
        self.total_tokens = self.total_tokens.saturating_add(other.total_tokens);
        self.call_count = self.call_count.saturating_add(other.call_count);
    }
}

/// Running usage total for a session.
///
/// Totals only grow. Accumulation is a field-wise sum, so the result does not
/// depend on the order records are folded in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageTotals {
    #[serde(flatten)]
    pub totals: ModelUsage,
    #[serde(default)]
    pub by_model: BTreeMap<String, ModelUsage>,
}

impl UsageTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one call's usage and bump the call counter.
    pub fn accumulate(&mut self, usage: &UsageMetrics) {
        let record = ModelUsage {
            prompt_tokens: usage.prompt_tokens,
            cached_tokens: usage.cached_tokens,
            output_tokens: usage.output_tokens,
            total_tokens: usage.total_tokens,
            call_count: 1,
        };
        self.totals.add(&record);
        self.by_model.entry(usage.model_id.clone()).or_default().add(&record);
    }

    /// Combine two partial totals.
    pub fn merge(&mut self, other: &UsageTotals) {
        self.totals.add(&other.totals);
        for (model, usage) in &other.by_model {
            self.by_model.entry(model.clone()).or_default().add(usage);
        }
    }

    pub fn call_count(&self) -> u64 {
        self.totals.call_count
    }

    pub fn total_tokens(&self) -> u64 {
        self.totals.total_tokens
    }
}

impl<'a> FromIterator<&'a UsageMetrics> for UsageTotals {
    fn from_iter<I: IntoIterator<Item = &'a UsageMetrics>>(iter: I) -> Self {
        let mut totals = Self::new();
        for usage in iter {
            totals.accumulate(usage);
        }
        totals
    }
}
