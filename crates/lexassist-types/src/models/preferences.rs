//! Persisted user preferences.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
            Self::System => write!(f, "system"),
        }
    }
}

impl ThemeMode {
    /// Parse from string.
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemePreference {
    #[serde(default)]
    pub mode: ThemeMode,
    #[serde(default = "default_accent")]
    pub accent: String,
}

fn default_accent() -> String {
    "indigo".to_string()
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self { mode: ThemeMode::System, accent: default_accent() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_theme_fills_defaults() {
        let theme: ThemePreference = serde_json::from_str(r#"{"mode":"dark"}"#).expect("deserialize");
        assert_eq!(theme.mode, ThemeMode::Dark);
        assert_eq!(theme.accent, "indigo");
    }
}
