//! Prompt templates and response schemas for each feature.

mod instructions;
mod schemas;

use lexassist_types::ViewContext;
use serde_json::Value;

pub use schemas::{
    chronology_schema, contract_analysis_schema, marketing_check_schema, nda_triage_schema, risk_matrix_schema,
};

/// Everything a feature contributes to a request besides the user's input.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturePrompt {
    pub view: ViewContext,
    pub system_instruction: &'static str,
    /// Task sent when the user gives no instruction of their own.
    pub default_task: &'static str,
    /// `None` for free-text (Markdown) features.
    pub response_schema: Option<Value>,
}

impl FeaturePrompt {
    pub fn for_view(view: ViewContext) -> Self {
        let (system_instruction, default_task, response_schema) = match view {
            ViewContext::ContractReview => (
                instructions::CONTRACT_REVIEW,
                "Review the MAIN DOCUMENT.",
                Some(contract_analysis_schema()),
            ),
            ViewContext::NdaTriage => {
                (instructions::NDA_TRIAGE, "Triage the MAIN DOCUMENT.", Some(nda_triage_schema()))
            },
            ViewContext::Dpia => (instructions::DPIA, "Draft a DPIA for the processing described.", None),
            ViewContext::RiskMatrix => (
                instructions::RISK_MATRIX,
                "Build a risk register for the matter described.",
                Some(risk_matrix_schema()),
            ),
            ViewContext::MarketingCompliance => (
                instructions::MARKETING_COMPLIANCE,
                "Check the following marketing material.",
                Some(marketing_check_schema()),
            ),
            ViewContext::Chronology => (
                instructions::CHRONOLOGY,
                "Extract the chronology from all documents.",
                Some(chronology_schema()),
            ),
            ViewContext::General => (instructions::GENERAL, "", None),
        };
        Self { view, system_instruction, default_task, response_schema }
    }

    /// Join the default task with the user's own text.
    pub fn task_text(&self, user_text: &str) -> String {
        let user_text = user_text.trim();
        match (self.default_task.is_empty(), user_text.is_empty()) {
            (true, _) => user_text.to_string(),
            (false, true) => self.default_task.to_string(),
            (false, false) => format!("{}\n\n{}", self.default_task, user_text),
        }
    }
}
