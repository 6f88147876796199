use clap::{Args, Parser, Subcommand};
use lexassist_types::{MediaResolution, ThinkingLevel};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lexassist",
    about = "LexAssist - AI legal assistant backed by Google Gemini",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, default_value = "warn", help = "Log level when RUST_LOG is unset")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Review a contract clause by clause")]
    Review(FeatureArgs),

    #[command(about = "Triage an NDA (green / yellow / red)")]
    Nda(FeatureArgs),

    #[command(about = "Draft a Data Protection Impact Assessment")]
    Dpia(FeatureArgs),

    #[command(about = "Build a legal risk matrix")]
    Risks(FeatureArgs),

    #[command(about = "Check marketing copy against unfair competition law")]
    Marketing(FeatureArgs),

    #[command(about = "Extract a chronology of events from case documents")]
    Chronology(FeatureArgs),

    #[command(about = "Ask a general legal question")]
    Ask(FeatureArgs),

    #[command(subcommand, about = "View and modify configuration")]
    Config(ConfigCommands),

    #[command(subcommand, about = "Show or accept the legal disclaimer")]
    Disclaimer(DisclaimerCommands),

    #[command(subcommand, about = "Show or change the theme preference")]
    Theme(ThemeCommands),
}

#[derive(Args, Debug, Clone, Default)]
pub struct FeatureArgs {
    #[arg(help = "Instruction or text to analyse")]
    pub text: Option<String>,

    #[arg(short, long, help = "Main document (PDF, image, audio, video, .docx, text)")]
    pub file: Option<PathBuf>,

    #[arg(short, long, help = "Reference playbook to compare against")]
    pub playbook: Option<PathBuf>,

    #[arg(short, long = "attach", help = "Additional document (repeatable)")]
    pub attachments: Vec<PathBuf>,

    #[arg(short, long = "url", help = "Reference URL the model should read (repeatable)")]
    pub urls: Vec<String>,

    #[arg(short, long, help = "Let the model use Google Search")]
    pub search: bool,

    #[arg(short, long, value_parser = parse_thinking, help = "Thinking level: low, medium, high")]
    pub thinking: Option<ThinkingLevel>,

    #[arg(long, value_parser = parse_resolution, help = "Media resolution for images and video: low, medium, high")]
    pub resolution: Option<MediaResolution>,

    #[arg(short, long, help = "Model id, e.g. gemini-2.5-flash")]
    pub model: Option<String>,

    #[arg(short, long, help = "Output the full result as JSON")]
    pub json: bool,
}

fn parse_thinking(s: &str) -> Result<ThinkingLevel, String> {
    ThinkingLevel::from_string(s).ok_or_else(|| format!("expected low, medium or high, got '{}'", s))
}

fn parse_resolution(s: &str) -> Result<MediaResolution, String> {
    MediaResolution::from_string(s).ok_or_else(|| format!("expected low, medium or high, got '{}'", s))
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show current configuration")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Get a specific configuration value")]
    Get {
        #[arg(help = "Configuration key (e.g., 'default_model', 'timeout_secs')")]
        key: String,
    },

    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key")]
        key: String,

        #[arg(help = "New value")]
        value: String,
    },
}

#[derive(Subcommand)]
pub enum DisclaimerCommands {
    #[command(about = "Print the disclaimer and whether it has been accepted")]
    Status,

    #[command(about = "Accept the disclaimer")]
    Accept,
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    #[command(about = "Show the theme preference")]
    Get,

    #[command(about = "Set the theme preference")]
    Set {
        #[arg(help = "light, dark or system")]
        mode: String,

        #[arg(long, help = "Accent colour name")]
        accent: Option<String>,
    },
}
