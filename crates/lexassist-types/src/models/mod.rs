//! Core domain models for LexAssist.

mod analysis;
mod config;
mod document;
mod preferences;
mod request;
mod result;
mod usage;

pub use analysis::{
    Chronology, ChronologyEvent, ClauseFinding, ContractAnalysis, ComplianceIssue, IssueSeverity,
    MarketingCheck, NdaFinding, NdaTriage, NdaVerdict, RiskEntry, RiskLevel, RiskMatrix,
};
pub use config::{AppConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use document::{DocumentPayload, DocumentSlot};
pub use preferences::{ThemeMode, ThemePreference};
pub use request::{GenerationRequest, MediaResolution, ThinkingLevel, ViewContext};
pub use result::{GenerationResult, GenerationWarning};
pub use usage::{ModelUsage, UsageMetrics, UsageTotals};
