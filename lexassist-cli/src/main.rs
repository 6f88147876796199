//! LexAssist CLI
//!
//! Runs the legal-analysis features against Gemini from the terminal:
//! - `review`, `nda`, `dpia`, `risks`, `marketing`, `chronology`, `ask`
//! - `config`, `disclaimer` and `theme` manage the data directory
//!
//! Data lives in `~/.lexassist` (override with `LEXASSIST_DATA_DIR`).

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod cli;
mod commands;
mod config_commands;
mod feature_commands;
mod preference_commands;
mod render;

use cli::{Cli, Commands};
use lexassist_core::{config as core_config, logger, paths};
use lexassist_types::ViewContext;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Only feature runs need a valid config
    let config = core_config::load_config();
    let log_to_file = config.as_ref().map(|c| c.log_to_file).unwrap_or(false);
    let file_dir = if log_to_file { Some(logger::log_dir(&paths::get_data_dir()?)) } else { None };
    let _log_guard = logger::init_logging(&cli.log_level, file_dir.as_deref())?;

    let (view, args) = match cli.command {
        Commands::Review(args) => (ViewContext::ContractReview, args),
        Commands::Nda(args) => (ViewContext::NdaTriage, args),
        Commands::Dpia(args) => (ViewContext::Dpia, args),
        Commands::Risks(args) => (ViewContext::RiskMatrix, args),
        Commands::Marketing(args) => (ViewContext::MarketingCompliance, args),
        Commands::Chronology(args) => (ViewContext::Chronology, args),
        Commands::Ask(args) => (ViewContext::General, args),
        Commands::Config(cmd) => return commands::handle_config_command(cmd),
        Commands::Disclaimer(cmd) => return commands::handle_disclaimer_command(cmd),
        Commands::Theme(cmd) => return commands::handle_theme_command(cmd),
    };

    let config = config?;
    info!(view = %view, model = %config.default_model, "LexAssist {} starting", env!("CARGO_PKG_VERSION"));
    feature_commands::run(view, args, &config).await
}
