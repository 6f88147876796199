use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use colored::Colorize;
use std::path::Path;
use tracing::debug;

use lexassist_core::state::FeatureInputs;
use lexassist_core::{run_feature, AppError, AppState, GeminiClient, LocalStore};
use lexassist_types::{AppConfig, DocumentPayload, ViewContext};

use crate::cli::FeatureArgs;
use crate::render;

/// Read a file into a payload, guessing the MIME type from the extension.
pub fn load_document(path: &Path) -> Result<DocumentPayload> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| path.display().to_string());
    debug!(file = %name, mime = %mime, bytes = bytes.len(), "Loaded document");
    Ok(DocumentPayload::new(mime.essence_str(), STANDARD.encode(bytes)).with_name(name))
}

/// Fill a feature's inputs from the command line, keeping config defaults
/// for anything not given.
pub fn apply_args(inputs: &mut FeatureInputs, args: &FeatureArgs) -> Result<()> {
    if let Some(text) = &args.text {
        inputs.text = text.clone();
    }
    if let Some(path) = &args.file {
        inputs.main_document = Some(load_document(path)?);
    }
    if let Some(path) = &args.playbook {
        inputs.context_document = Some(load_document(path)?);
    }
    inputs.attachments = args.attachments.iter().map(|p| load_document(p)).collect::<Result<_>>()?;
    inputs.reference_urls = args.urls.clone();
    inputs.use_web_search = args.search;
    if let Some(model) = &args.model {
        inputs.model_id = model.clone();
    }
    if let Some(level) = args.thinking {
        inputs.thinking_level = level;
    }
    if let Some(resolution) = args.resolution {
        inputs.media_resolution = resolution;
    }
    Ok(())
}

fn inputs_mut(state: &mut AppState, view: ViewContext) -> &mut FeatureInputs {
    match view {
        ViewContext::ContractReview => &mut state.contract_review_mut().inputs,
        ViewContext::NdaTriage => &mut state.nda_triage_mut().inputs,
        ViewContext::Dpia => &mut state.dpia_mut().inputs,
        ViewContext::RiskMatrix => &mut state.risk_matrix_mut().inputs,
        ViewContext::MarketingCompliance => &mut state.marketing_mut().inputs,
        ViewContext::Chronology => &mut state.chronology_mut().inputs,
        ViewContext::General => &mut state.general_mut().inputs,
    }
}

pub async fn run(view: ViewContext, args: FeatureArgs, config: &AppConfig) -> Result<()> {
    let store = LocalStore::open_default()?;
    let mut state = AppState::with_preferences(config, &store);
    if !state.disclaimer_accepted() {
        anyhow::bail!(
            "{}\n\nRun `lexassist disclaimer accept` first.",
            crate::preference_commands::DISCLAIMER_TEXT
        );
    }

    apply_args(inputs_mut(&mut state, view), &args)?;
    let client = GeminiClient::new(config)?;

    if !args.json {
        eprintln!("{}", format!("Running {}...", view).cyan());
    }
    if let Err(e) = run_feature(&client, &mut state, view).await {
        if args.json {
            if let Some(typed) = e.typed() {
                println!("{}", serde_json::to_string_pretty(&typed)?);
            }
        } else {
            if let Some(message) = state_error(&state, view) {
                eprintln!("{} {}", "✗".red(), message);
            }
            if let Some(hint) = failure_hint(&e) {
                eprintln!("{}", hint.dimmed());
            }
        }
        return Err(e.into());
    }

    render::print_feature(&state, view, args.json)?;
    render::print_usage(state.usage(), args.json);
    Ok(())
}

/// Follow-up advice printed under a failed run.
fn failure_hint(err: &AppError) -> Option<&'static str> {
    err.is_retryable().then_some("The failure looks temporary. Re-run the command to try again.")
}

fn state_error(state: &AppState, view: ViewContext) -> Option<String> {
    match view {
        ViewContext::ContractReview => state.contract_review().error.clone(),
        ViewContext::NdaTriage => state.nda_triage().error.clone(),
        ViewContext::Dpia => state.dpia().error.clone(),
        ViewContext::RiskMatrix => state.risk_matrix().error.clone(),
        ViewContext::MarketingCompliance => state.marketing().error.clone(),
        ViewContext::Chronology => state.chronology().error.clone(),
        ViewContext::General => state.general().error.clone(),
    }
}
