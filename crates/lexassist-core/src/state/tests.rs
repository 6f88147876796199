use super::*;
use lexassist_types::models::{ThemeMode, UsageMetrics};
use lexassist_types::{DocumentPayload, GenerationError, GenerationResult, ThinkingLevel, ViewContext};

use crate::prompts::FeaturePrompt;

fn usage(model: &str, prompt: u64) -> UsageMetrics {
    UsageMetrics { prompt_tokens: prompt, total_tokens: prompt, model_id: model.to_string(), ..Default::default() }
}

#[test]
fn test_new_seeds_model_settings_from_config() {
    let config = AppConfig { default_thinking_level: ThinkingLevel::High, ..Default::default() };
    let state = AppState::new(&config);
    assert_eq!(state.contract_review().inputs.thinking_level, ThinkingLevel::High);
    assert_eq!(state.general().inputs.thinking_level, ThinkingLevel::High);
}

#[test]
fn test_failure_keeps_inputs_and_clears_loading() {
    let mut state = AppState::default();
    let review = state.contract_review_mut();
    review.inputs.text = "Focus on liability".to_string();
    review.inputs.main_document = Some(DocumentPayload::new("application/pdf", "JVBER"));

    review.begin();
    assert!(review.loading);
    review.fail(&GenerationError::Api { status: 500, message: "boom".to_string() });

    let review = state.contract_review();
    assert!(!review.loading);
    assert_eq!(review.error.as_deref(), Some("The analysis failed. Please try again."));
    assert_eq!(review.inputs.text, "Focus on liability");
    assert!(review.inputs.main_document.is_some());
}

#[test]
fn test_feature_updates_are_isolated() {
    let mut state = AppState::default();
    state.nda_triage_mut().begin();
    state.dpia_mut().inputs.text = "HR analytics tool".to_string();

    assert!(state.nda_triage().loading);
    assert!(!state.dpia().loading);
    assert!(state.nda_triage().inputs.text.is_empty());
}

#[test]
fn test_success_replaces_result_and_clears_error() {
    let mut state = AppState::default();
    let general = state.general_mut();
    general.fail(&GenerationError::Transport { message: "offline".to_string() });
    general.begin();
    general.succeed(GenerationResult {
        data: "Answer".to_string(),
        usage: usage("gemini-2.5-pro", 10),
        grounding_metadata: None,
        warnings: vec![],
    });
    assert!(state.general().error.is_none());
    assert_eq!(state.general().result.as_ref().map(|r| r.data.as_str()), Some("Answer"));
}

#[test]
fn test_usage_totals_accumulate_across_features() {
    let mut state = AppState::default();
    state.record_usage(&usage("gemini-2.5-pro", 100));
    state.record_usage(&usage("gemini-2.5-flash", 40));
    state.record_usage(&usage("gemini-2.5-pro", 10));

    assert_eq!(state.usage().call_count(), 3);
    assert_eq!(state.usage().totals.prompt_tokens, 150);
    assert_eq!(state.usage().by_model["gemini-2.5-pro"].call_count, 2);
}

#[test]
fn test_reset_keeps_model_settings() {
    let mut state = AppState::default();
    let risks = state.risk_matrix_mut();
    risks.inputs.text = "Data breach scenario".to_string();
    risks.inputs.model_id = "gemini-2.5-flash".to_string();
    risks.inputs.thinking_level = ThinkingLevel::Low;
    risks.reset();

    assert!(risks.inputs.is_empty());
    assert_eq!(risks.inputs.model_id, "gemini-2.5-flash");
    assert_eq!(risks.inputs.thinking_level, ThinkingLevel::Low);
}

#[test]
fn test_inputs_to_request_uses_feature_prompt() {
    let inputs = FeatureInputs {
        text: "Claim: best coffee in Berlin".to_string(),
        reference_urls: vec!["https://example.com/ad".to_string()],
        use_web_search: true,
        ..Default::default()
    };
    let prompt = FeaturePrompt::for_view(ViewContext::MarketingCompliance);
    let req = inputs.to_request(&prompt);

    assert_eq!(req.view_context, ViewContext::MarketingCompliance);
    assert!(req.prompt_text.ends_with("Claim: best coffee in Berlin"));
    assert!(req.response_schema.is_some());
    assert!(req.use_web_search);
    assert_eq!(req.reference_urls.len(), 1);
}

#[test]
fn test_preferences_round_trip_through_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LocalStore::open(dir.path()).unwrap();
    let mut state = AppState::with_preferences(&AppConfig::default(), &store);
    assert!(!state.disclaimer_accepted());

    state.accept_disclaimer(&mut store).unwrap();
    state.set_theme(ThemePreference { mode: ThemeMode::Light, accent: "rose".to_string() }, &mut store).unwrap();

    let reloaded = AppState::with_preferences(&AppConfig::default(), &LocalStore::open(dir.path()).unwrap());
    assert!(reloaded.disclaimer_accepted());
    assert_eq!(reloaded.theme().mode, ThemeMode::Light);
}
