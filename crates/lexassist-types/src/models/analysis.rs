//! Structured results returned by the legal-analysis features.
//!
//! Field names match the response schemas sent to the model (camelCase), so
//! these types deserialize directly from schema-constrained output.

use serde::{Deserialize, Serialize};

/// Risk grading used for contract clauses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClauseFinding {
    pub title: String,
    #[serde(default)]
    pub original_text: String,
    pub risk_level: RiskLevel,
    pub explanation: String,
    #[serde(default)]
    pub suggested_redline: Option<String>,
}

/// Contract review output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractAnalysis {
    pub summary: String,
    #[serde(default)]
    pub contract_type: String,
    #[serde(default)]
    pub parties: Vec<String>,
    /// 0 (no risk) to 100 (unacceptable).
    pub risk_score: u8,
    #[serde(default)]
    pub clauses: Vec<ClauseFinding>,
    #[serde(default)]
    pub missing_clauses: Vec<String>,
}

impl ContractAnalysis {
    /// Clauses rated high or critical, worst first.
    pub fn high_risk_clauses(&self) -> Vec<&ClauseFinding> {
        let mut out: Vec<_> =
            self.clauses.iter().filter(|c| c.risk_level >= RiskLevel::High).collect();
        out.sort_by(|a, b| b.risk_level.cmp(&a.risk_level));
        out
    }
}

/// Traffic-light outcome of an NDA triage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NdaVerdict {
    /// Sign as is
    Green,
    /// Negotiate specific points
    Yellow,
    /// Escalate to counsel
    Red,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NdaFinding {
    pub topic: String,
    pub status: NdaVerdict,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NdaTriage {
    pub verdict: NdaVerdict,
    pub summary: String,
    #[serde(default)]
    pub findings: Vec<NdaFinding>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// 1 (rare) to 5 (almost certain)
    pub likelihood: u8,
    /// 1 (negligible) to 5 (severe)
    pub impact: u8,
    #[serde(default)]
    pub mitigation: String,
}

impl RiskEntry {
    /// Likelihood times impact, with both axes clamped to 1..=5.
    pub fn score(&self) -> u8 {
        self.likelihood.clamp(1, 5) * self.impact.clamp(1, 5)
    }

    pub fn level(&self) -> RiskLevel {
        match self.score() {
            0..=4 => RiskLevel::Low,
            5..=9 => RiskLevel::Medium,
            10..=16 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RiskMatrix {
    #[serde(default)]
    pub risks: Vec<RiskEntry>,
}

impl RiskMatrix {
    /// Risks ordered by descending score; ties keep model order.
    pub fn ranked(&self) -> Vec<&RiskEntry> {
        let mut out: Vec<_> = self.risks.iter().collect();
        out.sort_by(|a, b| b.score().cmp(&a.score()));
        out
    }

    /// Count of risks per (likelihood, impact) cell, indexed `[likelihood-1][impact-1]`.
    pub fn heatmap(&self) -> [[usize; 5]; 5] {
        let mut grid = [[0usize; 5]; 5];
        for risk in &self.risks {
            let l = usize::from(risk.likelihood.clamp(1, 5) - 1);
            let i = usize::from(risk.impact.clamp(1, 5) - 1);
            grid[l][i] += 1;
        }
        grid
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Info,
    Warning,
    Violation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceIssue {
    pub claim: String,
    /// Statutory reference, e.g. "§ 5 UWG"
    pub legal_basis: String,
    pub severity: IssueSeverity,
    pub recommendation: String,
}

/// Marketing copy check against unfair-competition rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketingCheck {
    pub overall_status: IssueSeverity,
    #[serde(default)]
    pub issues: Vec<ComplianceIssue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChronologyEvent {
    /// ISO-8601 date (YYYY-MM-DD) when known, otherwise free text.
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub significance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Chronology {
    #[serde(default)]
    pub events: Vec<ChronologyEvent>,
}

impl Chronology {
    /// Sort events by date. ISO dates sort lexically; undated entries go last.
    pub fn sort_by_date(&mut self) {
        self.events.sort_by(|a, b| {
            let a_iso = is_iso_date(&a.date);
            let b_iso = is_iso_date(&b.date);
            b_iso.cmp(&a_iso).then_with(|| a.date.cmp(&b.date))
        });
    }
}

fn is_iso_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 10
        && b[..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'-'
        && b[5..7].iter().all(u8::is_ascii_digit)
        && b[7] == b'-'
        && b[8..10].iter().all(u8::is_ascii_digit)
}
