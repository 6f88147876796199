//! User actions: run one feature against the model and record the outcome.

use async_trait::async_trait;
use lexassist_types::models::{Chronology, ContractAnalysis, MarketingCheck, NdaTriage, RiskMatrix};
use lexassist_types::{GenerationError, GenerationRequest, GenerationResult, ViewContext};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::client::ModelEndpoint;
use crate::error::{AppError, AppResult};
use crate::prompts::FeaturePrompt;
use crate::service::{generate_structured, generate_text};
use crate::state::{AppState, FeatureState};

/// How a feature's result is produced from the model's answer.
#[async_trait]
pub trait FeatureOutput: Sized + Send {
    async fn generate<E>(endpoint: &E, req: &GenerationRequest) -> Result<GenerationResult<Self>, GenerationError>
    where
        E: ModelEndpoint + ?Sized;

    /// Normalisation applied after a successful parse.
    fn post_process(&mut self) {}
}

#[async_trait]
impl FeatureOutput for String {
    async fn generate<E>(endpoint: &E, req: &GenerationRequest) -> Result<GenerationResult<Self>, GenerationError>
    where
        E: ModelEndpoint + ?Sized,
    {
        generate_text(endpoint, req).await
    }
}

macro_rules! structured_output {
    ($($ty:ty),*) => {
        $(
            #[async_trait]
            impl FeatureOutput for $ty {
                async fn generate<E>(endpoint: &E, req: &GenerationRequest) -> Result<GenerationResult<Self>, GenerationError>
                where
                    E: ModelEndpoint + ?Sized,
                {
                    generate_structured(endpoint, req).await
                }
            }
        )*
    };
}

structured_output!(ContractAnalysis, NdaTriage, RiskMatrix, MarketingCheck);

#[async_trait]
impl FeatureOutput for Chronology {
    async fn generate<E>(endpoint: &E, req: &GenerationRequest) -> Result<GenerationResult<Self>, GenerationError>
    where
        E: ModelEndpoint + ?Sized,
    {
        generate_structured(endpoint, req).await
    }

    fn post_process(&mut self) {
        self.sort_by_date();
    }
}

/// Run the feature behind `view` with the inputs currently stored for it.
///
/// Refused until the disclaimer is accepted. A generation failure is written
/// to the feature's `error` and also returned.
pub async fn run_feature<E>(endpoint: &E, state: &mut AppState, view: ViewContext) -> AppResult<()>
where
    E: ModelEndpoint + ?Sized,
{
    if !state.disclaimer_accepted() {
        return Err(AppError::DisclaimerNotAccepted);
    }
    match view {
        ViewContext::ContractReview => run(endpoint, state, view, AppState::contract_review_mut).await,
        ViewContext::NdaTriage => run(endpoint, state, view, AppState::nda_triage_mut).await,
        ViewContext::Dpia => run(endpoint, state, view, AppState::dpia_mut).await,
        ViewContext::RiskMatrix => run(endpoint, state, view, AppState::risk_matrix_mut).await,
        ViewContext::MarketingCompliance => run(endpoint, state, view, AppState::marketing_mut).await,
        ViewContext::Chronology => run(endpoint, state, view, AppState::chronology_mut).await,
        ViewContext::General => run(endpoint, state, view, AppState::general_mut).await,
    }
}

async fn run<E, T>(
    endpoint: &E,
    state: &mut AppState,
    view: ViewContext,
    select: fn(&mut AppState) -> &mut FeatureState<T>,
) -> AppResult<()>
where
    E: ModelEndpoint + ?Sized,
    T: FeatureOutput + DeserializeOwned,
{
    let feature = select(state);
    if feature.inputs.is_empty() {
        return Err(AppError::EmptyInput(view.to_string()));
    }
    feature.begin();
    let req = feature.inputs.to_request(&FeaturePrompt::for_view(view));

    info!(view = %view, "Running feature");
    match T::generate(endpoint, &req).await {
        Ok(mut result) => {
            result.data.post_process();
            state.record_usage(&result.usage);
            for warning in &result.warnings {
                warn!(view = %view, "{}", warning);
            }
            select(state).succeed(result);
            Ok(())
        },
        Err(e) => {
            warn!(view = %view, error = %e, "Feature run failed");
            select(state).fail(&e);
            Err(e.into())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::tests::{text_response, ScriptedEndpoint};
    use lexassist_types::DocumentPayload;

    fn accepted_state() -> AppState {
        let dir = tempfile::tempdir().unwrap();
        let mut store = crate::storage::LocalStore::open(dir.path()).unwrap();
        let mut state = AppState::default();
        state.accept_disclaimer(&mut store).unwrap();
        state
    }

    #[tokio::test]
    async fn test_refused_without_disclaimer() {
        let endpoint = ScriptedEndpoint::new(vec![]);
        let mut state = AppState::default();
        state.general_mut().inputs.text = "Hello".to_string();
        let err = run_feature(&endpoint, &mut state, ViewContext::General).await.unwrap_err();
        assert!(matches!(err, AppError::DisclaimerNotAccepted));
        assert!(endpoint.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_inputs_are_refused() {
        let endpoint = ScriptedEndpoint::new(vec![]);
        let mut state = accepted_state();
        let err = run_feature(&endpoint, &mut state, ViewContext::Dpia).await.unwrap_err();
        assert!(matches!(err, AppError::EmptyInput(ref v) if v == "dpia"));
        assert!(!state.dpia().loading);
    }

    #[tokio::test]
    async fn test_contract_review_success_records_result_and_usage() {
        let json = r#"{"summary":"Balanced","riskScore":35,"clauses":[{"title":"Liability","riskLevel":"high","explanation":"Uncapped"}]}"#;
        let endpoint = ScriptedEndpoint::new(vec![Ok(text_response(json))]);
        let mut state = accepted_state();
        state.contract_review_mut().inputs.main_document = Some(DocumentPayload::new("application/pdf", "JVBER"));

        run_feature(&endpoint, &mut state, ViewContext::ContractReview).await.unwrap();

        let review = state.contract_review();
        assert!(!review.loading);
        let analysis = &review.result.as_ref().unwrap().data;
        assert_eq!(analysis.risk_score, 35);
        assert_eq!(analysis.high_risk_clauses().len(), 1);
        assert_eq!(state.usage().call_count(), 1);

        let seen = endpoint.seen.lock().unwrap();
        let config = seen[0].1.generation_config.as_ref().unwrap();
        assert_eq!(config.response_mime_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn test_failure_keeps_inputs_and_sets_error() {
        let endpoint = ScriptedEndpoint::new(vec![Ok(text_response("not json at all"))]);
        let mut state = accepted_state();
        state.nda_triage_mut().inputs.text = "Mutual NDA, 5 years".to_string();

        let err = run_feature(&endpoint, &mut state, ViewContext::NdaTriage).await.unwrap_err();
        assert!(matches!(err, AppError::Generation(GenerationError::StructuredOutput { .. })));

        let nda = state.nda_triage();
        assert!(!nda.loading);
        assert!(nda.error.is_some());
        assert!(nda.result.is_none());
        assert_eq!(nda.inputs.text, "Mutual NDA, 5 years");
        assert_eq!(state.usage().call_count(), 0);
    }

    #[tokio::test]
    async fn test_chronology_is_sorted_after_parse() {
        let json = r#"{"events":[
            {"date":"2023-05-01","description":"Termination letter"},
            {"date":"spring 2022","description":"Oral agreement"},
            {"date":"2021-11-15","description":"Contract signed"}
        ]}"#;
        let endpoint = ScriptedEndpoint::new(vec![Ok(text_response(json))]);
        let mut state = accepted_state();
        state.chronology_mut().inputs.text = "Case file".to_string();

        run_feature(&endpoint, &mut state, ViewContext::Chronology).await.unwrap();

        let dates: Vec<_> = state.chronology().result.as_ref().unwrap().data.events.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["2021-11-15", "2023-05-01", "spring 2022"]);
    }
}
