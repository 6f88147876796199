use anyhow::Result;
use colored::Colorize;

use lexassist_core::{AppState, LocalStore};
use lexassist_types::models::{ThemeMode, ThemePreference};
use lexassist_types::AppConfig;

pub const DISCLAIMER_TEXT: &str = "\
LexAssist uses a generative AI model. Its output may be incomplete or wrong,
does not constitute legal advice and does not create a lawyer-client
relationship. Review every result before relying on it. Do not upload
documents you are not permitted to share with Google.";

/// Session view of the persisted preferences. Model settings are irrelevant here.
fn load_state(store: &LocalStore) -> AppState {
    AppState::with_preferences(&AppConfig::default(), store)
}

pub fn disclaimer_status() -> Result<()> {
    let store = LocalStore::open_default()?;
    println!("{}\n", DISCLAIMER_TEXT);
    if load_state(&store).disclaimer_accepted() {
        match store.disclaimer_accepted_at() {
            Some(at) => println!("{}", format!("Accepted on {}.", at.format("%Y-%m-%d %H:%M UTC")).green()),
            None => println!("{}", "Accepted.".green()),
        }
    } else {
        println!("{}", "Not accepted. Run `lexassist disclaimer accept` to enable the features.".yellow());
    }
    Ok(())
}

fn accept_in(store: &mut LocalStore) -> Result<AppState> {
    let mut state = load_state(store);
    state.accept_disclaimer(store)?;
    Ok(state)
}

pub fn accept_disclaimer() -> Result<()> {
    let mut store = LocalStore::open_default()?;
    accept_in(&mut store)?;
    println!("{} Disclaimer accepted", "✓".green());
    Ok(())
}

pub fn show_theme() -> Result<()> {
    let store = LocalStore::open_default()?;
    let state = load_state(&store);
    let theme = state.theme();
    println!("mode: {}\naccent: {}", theme.mode, theme.accent);
    Ok(())
}

/// Apply a theme change on top of the stored preference. An omitted accent keeps the current one.
fn apply_theme(store: &mut LocalStore, mode: &str, accent: Option<String>) -> Result<ThemePreference> {
    let mode = ThemeMode::from_string(mode)
        .ok_or_else(|| anyhow::anyhow!("Invalid theme mode '{}': expected light, dark or system", mode))?;
    let mut state = load_state(store);
    let theme = ThemePreference { mode, accent: accent.unwrap_or_else(|| state.theme().accent.clone()) };
    state.set_theme(theme, store)?;
    Ok(state.theme().clone())
}

pub fn set_theme(mode: &str, accent: Option<String>) -> Result<()> {
    let mut store = LocalStore::open_default()?;
    let theme = apply_theme(&mut store, mode, accent)?;
    println!("{} Theme set to {} ({})", "✓".green(), theme.mode, theme.accent);
    Ok(())
}
