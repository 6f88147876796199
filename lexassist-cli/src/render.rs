use anyhow::Result;
use colored::{ColoredString, Colorize};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde::Serialize;

use lexassist_core::citations::sources_footer;
use lexassist_core::state::FeatureState;
use lexassist_core::AppState;
use lexassist_types::models::{
    Chronology, ContractAnalysis, IssueSeverity, MarketingCheck, NdaTriage, NdaVerdict, RiskLevel, RiskMatrix,
};
use lexassist_types::{GenerationResult, UsageTotals, ViewContext};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic).set_header(header);
    table
}

fn print_json<T: Serialize>(feature: &FeatureState<T>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&feature.result)?);
    Ok(())
}

fn print_warnings<T>(result: &GenerationResult<T>) {
    for warning in &result.warnings {
        eprintln!("{} {}", "⚠".yellow(), warning.to_string().yellow());
    }
}

pub fn print_feature(state: &AppState, view: ViewContext, json: bool) -> Result<()> {
    macro_rules! show {
        ($feature:expr, $printer:ident) => {{
            let feature = $feature;
            if json {
                return print_json(feature);
            }
            if let Some(result) = &feature.result {
                print_warnings(result);
                $printer(result);
            }
        }};
    }

    match view {
        ViewContext::ContractReview => show!(state.contract_review(), print_contract),
        ViewContext::NdaTriage => show!(state.nda_triage(), print_nda),
        ViewContext::Dpia => show!(state.dpia(), print_text),
        ViewContext::RiskMatrix => show!(state.risk_matrix(), print_risks),
        ViewContext::MarketingCompliance => show!(state.marketing(), print_marketing),
        ViewContext::Chronology => show!(state.chronology(), print_chronology),
        ViewContext::General => show!(state.general(), print_text),
    }
    Ok(())
}

fn risk_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
        RiskLevel::Critical => Color::Magenta,
    }
}

fn score_label(score: u8) -> ColoredString {
    let text = format!("{}/100", score);
    match score {
        0..=33 => text.green(),
        34..=66 => text.yellow(),
        _ => text.red(),
    }
}

fn print_contract(result: &GenerationResult<ContractAnalysis>) {
    let analysis = &result.data;
    println!("{}", "Contract Review".cyan().bold());
    if !analysis.contract_type.is_empty() {
        println!("Type: {}", analysis.contract_type);
    }
    if !analysis.parties.is_empty() {
        println!("Parties: {}", analysis.parties.join(", "));
    }
    println!("Risk score: {}\n", score_label(analysis.risk_score));
    println!("{}\n", analysis.summary);

    if !analysis.clauses.is_empty() {
        let mut table = new_table(vec!["Clause", "Risk", "Explanation", "Suggested redline"]);
        for clause in &analysis.clauses {
            table.add_row(vec![
                Cell::new(&clause.title),
                Cell::new(format!("{:?}", clause.risk_level).to_lowercase()).fg(risk_color(clause.risk_level)),
                Cell::new(&clause.explanation),
                Cell::new(clause.suggested_redline.as_deref().unwrap_or("-")),
            ]);
        }
        println!("{table}");
    }

    if !analysis.missing_clauses.is_empty() {
        println!("\n{}", "Missing clauses:".yellow().bold());
        for missing in &analysis.missing_clauses {
            println!("  - {}", missing);
        }
    }
}

fn verdict_label(verdict: NdaVerdict) -> ColoredString {
    match verdict {
        NdaVerdict::Green => "GREEN".green().bold(),
        NdaVerdict::Yellow => "YELLOW".yellow().bold(),
        NdaVerdict::Red => "RED".red().bold(),
    }
}

fn print_nda(result: &GenerationResult<NdaTriage>) {
    let triage = &result.data;
    println!("{} {}\n", "NDA verdict:".cyan().bold(), verdict_label(triage.verdict));
    println!("{}\n", triage.summary);

    let mut table = new_table(vec!["Topic", "Status", "Comment"]);
    for finding in &triage.findings {
        let color = match finding.status {
            NdaVerdict::Green => Color::Green,
            NdaVerdict::Yellow => Color::Yellow,
            NdaVerdict::Red => Color::Red,
        };
        table.add_row(vec![
            Cell::new(&finding.topic),
            Cell::new(format!("{:?}", finding.status).to_lowercase()).fg(color),
            Cell::new(&finding.comment),
        ]);
    }
    println!("{table}");
}

fn print_risks(result: &GenerationResult<RiskMatrix>) {
    let matrix = &result.data;
    println!("{}", "Risk Matrix".cyan().bold());

    let mut table = new_table(vec!["ID", "Risk", "L", "I", "Score", "Mitigation"]);
    for risk in matrix.ranked() {
        table.add_row(vec![
            Cell::new(&risk.id),
            Cell::new(&risk.title),
            Cell::new(risk.likelihood),
            Cell::new(risk.impact),
            Cell::new(risk.score()).fg(risk_color(risk.level())),
            Cell::new(&risk.mitigation),
        ]);
    }
    println!("{table}");

    // Likelihood rows from 5 down to 1, impact columns 1 to 5
    println!("\n{}", "Heatmap (likelihood × impact):".bold());
    let grid = matrix.heatmap();
    for l in (0..5).rev() {
        let row: Vec<String> = grid[l].iter().map(|n| if *n == 0 { ".".to_string() } else { n.to_string() }).collect();
        println!("  {} | {}", l + 1, row.join("  "));
    }
    println!("      1  2  3  4  5");
}

fn print_marketing(result: &GenerationResult<MarketingCheck>) {
    let check = &result.data;
    let status = match check.overall_status {
        IssueSeverity::Info => "OK".green().bold(),
        IssueSeverity::Warning => "WARNING".yellow().bold(),
        IssueSeverity::Violation => "VIOLATION".red().bold(),
    };
    println!("{} {}\n", "Marketing check:".cyan().bold(), status);

    if check.issues.is_empty() {
        println!("No issues found.");
        return;
    }
    let mut table = new_table(vec!["Claim", "Legal basis", "Severity", "Recommendation"]);
    for issue in &check.issues {
        let color = match issue.severity {
            IssueSeverity::Info => Color::Green,
            IssueSeverity::Warning => Color::Yellow,
            IssueSeverity::Violation => Color::Red,
        };
        table.add_row(vec![
            Cell::new(&issue.claim),
            Cell::new(&issue.legal_basis),
            Cell::new(format!("{:?}", issue.severity).to_lowercase()).fg(color),
            Cell::new(&issue.recommendation),
        ]);
    }
    println!("{table}");
}

fn print_chronology(result: &GenerationResult<Chronology>) {
    println!("{}", "Chronology".cyan().bold());
    let mut table = new_table(vec!["Date", "Event", "Source", "Significance"]);
    for event in &result.data.events {
        table.add_row(vec![
            Cell::new(&event.date),
            Cell::new(&event.description),
            Cell::new(&event.source),
            Cell::new(&event.significance),
        ]);
    }
    println!("{table}");
}

fn print_text(result: &GenerationResult<String>) {
    println!("{}", result.data);
    if let Some(footer) = result.grounding_metadata.as_ref().and_then(sources_footer) {
        println!("{}", footer);
    }
}

pub fn print_usage(usage: &UsageTotals, json: bool) {
    if json {
        return;
    }
    let totals = &usage.totals;
    let models: Vec<&str> = usage.by_model.keys().map(String::as_str).collect();
    eprintln!(
        "\n{}",
        format!(
            "Tokens: {} prompt ({} cached), {} output, {} total · {}",
            totals.prompt_tokens,
            totals.cached_tokens,
            totals.output_tokens,
            totals.total_tokens,
            models.join(", ")
        )
        .dimmed()
    );
}
