//! Session state: one sub-state per feature plus cross-cutting settings.
//!
//! Each feature is reached through its own `*_mut` accessor so an update to
//! one feature cannot touch another.

mod feature;
#[cfg(test)]
mod tests;

use lexassist_types::models::{
    Chronology, ContractAnalysis, MarketingCheck, NdaTriage, RiskMatrix, ThemePreference,
};
use lexassist_types::{AppConfig, UsageMetrics, UsageTotals};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::storage::LocalStore;

pub use feature::{FeatureInputs, FeatureState};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    contract_review: FeatureState<ContractAnalysis>,
    nda_triage: FeatureState<NdaTriage>,
    dpia: FeatureState<String>,
    risk_matrix: FeatureState<RiskMatrix>,
    marketing: FeatureState<MarketingCheck>,
    chronology: FeatureState<Chronology>,
    general: FeatureState<String>,
    usage: UsageTotals,
    disclaimer_accepted: bool,
    theme: ThemePreference,
}

macro_rules! feature_accessors {
    ($($field:ident, $field_mut:ident: $ty:ty;)*) => {
        $(
            pub fn $field(&self) -> &FeatureState<$ty> {
                &self.$field
            }

            pub fn $field_mut(&mut self) -> &mut FeatureState<$ty> {
                &mut self.$field
            }
        )*

        /// Apply `f` to the inputs of every feature.
        fn for_each_inputs(&mut self, mut f: impl FnMut(&mut FeatureInputs)) {
            $( f(&mut self.$field.inputs); )*
        }
    };
}

impl AppState {
    /// Fresh session with model settings seeded from `config`.
    pub fn new(config: &AppConfig) -> Self {
        let mut state = Self::default();
        state.for_each_inputs(|inputs| {
            inputs.thinking_level = config.default_thinking_level;
            inputs.media_resolution = config.default_media_resolution;
        });
        state
    }

    /// Fresh session plus the preferences persisted in `store`.
    pub fn with_preferences(config: &AppConfig, store: &LocalStore) -> Self {
        let mut state = Self::new(config);
        state.disclaimer_accepted = store.disclaimer_accepted();
        state.theme = store.theme();
        state
    }

    feature_accessors! {
        contract_review, contract_review_mut: ContractAnalysis;
        nda_triage, nda_triage_mut: NdaTriage;
        dpia, dpia_mut: String;
        risk_matrix, risk_matrix_mut: RiskMatrix;
        marketing, marketing_mut: MarketingCheck;
        chronology, chronology_mut: Chronology;
        general, general_mut: String;
    }

    pub fn usage(&self) -> &UsageTotals {
        &self.usage
    }

    /// Add one call's usage to the session total. The total never decreases.
    pub fn record_usage(&mut self, usage: &UsageMetrics) {
        self.usage.accumulate(usage);
    }

    pub fn disclaimer_accepted(&self) -> bool {
        self.disclaimer_accepted
    }

    /// Accept the disclaimer and persist it.
    pub fn accept_disclaimer(&mut self, store: &mut LocalStore) -> AppResult<()> {
        store.set_disclaimer_accepted(true)?;
        self.disclaimer_accepted = true;
        Ok(())
    }

    pub fn theme(&self) -> &ThemePreference {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: ThemePreference, store: &mut LocalStore) -> AppResult<()> {
        store.set_theme(&theme)?;
        self.theme = theme;
        Ok(())
    }
}
