//! Loading, saving and editing `config.json`.
//!
//! The file lives in the data directory. A missing file means defaults.
//! Environment variables are applied on top after loading and are never
//! written back.

use lexassist_types::{AppConfig, ConfigError, MediaResolution, ThinkingLevel};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::AppResult;
use crate::paths::get_data_dir;

pub const CONFIG_FILE: &str = "config.json";

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
const API_KEY_FALLBACK_ENV: &str = "API_KEY";
pub const MODEL_ENV: &str = "LEXASSIST_MODEL";
pub const BASE_URL_ENV: &str = "LEXASSIST_BASE_URL";

/// Keys accepted by `get_value` / `set_value`.
pub const CONFIG_KEYS: &[&str] = &[
    "api_key",
    "base_url",
    "default_model",
    "timeout_secs",
    "default_thinking_level",
    "default_media_resolution",
    "log_to_file",
];

/// Load `config.json` from the data directory and apply environment overrides.
pub fn load_config() -> AppResult<AppConfig> {
    let data_dir = get_data_dir()?;
    let mut config = load_config_from(&data_dir)?;
    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    Ok(config)
}

/// Load the file as stored, without environment overrides.
pub fn load_config_from(dir: &Path) -> Result<AppConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        debug!(path = %config_path.display(), "No config file, using defaults");
        return Ok(AppConfig::new());
    }

    let content = fs::read_to_string(&config_path)
        .map_err(|e| ConfigError::ParseError { message: format!("{}: {}", config_path.display(), e) })?;
    let config: AppConfig = serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))?;
    config.validate()?;
    Ok(config)
}

/// Save to the data directory.
pub fn save_config(config: &AppConfig) -> AppResult<()> {
    let data_dir = get_data_dir()?;
    save_config_to(&data_dir, config)?;
    Ok(())
}

/// Atomic write: temp file, then rename over `config.json`.
pub fn save_config_to(dir: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    config.validate()?;
    let config_path = dir.join(CONFIG_FILE);
    let temp_path = dir.join(format!("{}.tmp", CONFIG_FILE));

    let content = serde_json::to_string_pretty(config).map_err(|e| ConfigError::from_json_error(&e))?;
    fs::write(&temp_path, content).map_err(|e| ConfigError::from_io_error(&e))?;
    fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::from_io_error(&e))
}

/// Update specific fields of the stored config.
pub fn update_config<F>(updater: F) -> AppResult<AppConfig>
where
    F: FnOnce(&mut AppConfig) -> Result<(), ConfigError>,
{
    let data_dir = get_data_dir()?;
    let mut config = load_config_from(&data_dir)?;
    updater(&mut config)?;
    save_config_to(&data_dir, &config)?;
    Ok(config)
}

/// Environment wins over the file. `GEMINI_API_KEY` wins over `API_KEY`.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(key) = non_blank(API_KEY_ENV).or_else(|| non_blank(API_KEY_FALLBACK_ENV)) {
        config.api_key = Some(key);
    }
    if let Some(model) = non_blank(MODEL_ENV) {
        config.default_model = model;
    }
    if let Some(url) = non_blank(BASE_URL_ENV) {
        config.base_url = url;
    }
}

/// Read one field as a display string.
pub fn get_value(config: &AppConfig, key: &str) -> Result<String, ConfigError> {
    let value = match key {
        "api_key" => config.api_key.clone().unwrap_or_default(),
        "base_url" => config.base_url.clone(),
        "default_model" => config.default_model.clone(),
        "timeout_secs" => config.timeout_secs.to_string(),
        "default_thinking_level" => config.default_thinking_level.to_string(),
        "default_media_resolution" => config.default_media_resolution.to_string(),
        "log_to_file" => config.log_to_file.to_string(),
        _ => return Err(unknown_key(key)),
    };
    Ok(value)
}

/// Parse `value` and assign it to the field named `key`.
pub fn set_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError { field: key.to_string(), message };
    match key {
        "api_key" => {
            config.api_key = (!value.trim().is_empty()).then(|| value.trim().to_string());
        },
        "base_url" => config.base_url = value.trim().to_string(),
        "default_model" => config.default_model = value.trim().to_string(),
        "timeout_secs" => {
            config.timeout_secs = value.parse().map_err(|_| invalid(format!("not a number: {}", value)))?;
        },
        "default_thinking_level" => {
            config.default_thinking_level = ThinkingLevel::from_string(value)
                .ok_or_else(|| invalid(format!("expected low, medium or high, got {}", value)))?;
        },
        "default_media_resolution" => {
            config.default_media_resolution = MediaResolution::from_string(value)
                .ok_or_else(|| invalid(format!("expected low, medium or high, got {}", value)))?;
        },
        "log_to_file" => {
            config.log_to_file = value.parse().map_err(|_| invalid(format!("not a boolean: {}", value)))?;
        },
        _ => return Err(unknown_key(key)),
    }
    config.validate()
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::ValidationError {
        field: key.to_string(),
        message: format!("unknown config key (expected one of: {})", CONFIG_KEYS.join(", ")),
    }
}

/// `abcd...wxyz` for long keys, all stars for short ones.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config_from(dir.path()).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        set_value(&mut config, "default_model", "gemini-2.5-flash").unwrap();
        set_value(&mut config, "default_thinking_level", "low").unwrap();
        save_config_to(dir.path(), &config).unwrap();

        assert!(!dir.path().join("config.json.tmp").exists());
        let loaded = load_config_from(dir.path()).unwrap();
        assert_eq!(loaded.default_model, "gemini-2.5-flash");
        assert_eq!(loaded.default_thinking_level, ThinkingLevel::Low);
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();
        assert!(matches!(load_config_from(dir.path()), Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let env: HashMap<&str, &str> =
            [("API_KEY", "fallback"), ("LEXASSIST_MODEL", "gemini-3-pro-preview"), ("LEXASSIST_BASE_URL", " ")]
                .into_iter()
                .collect();
        let mut config = AppConfig { api_key: Some("from-file".to_string()), ..Default::default() };
        apply_env_overrides(&mut config, |name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.api_key.as_deref(), Some("fallback"));
        assert_eq!(config.default_model, "gemini-3-pro-preview");
        assert_eq!(config.base_url, lexassist_types::models::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_primary_key_variable_wins() {
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, |name| match name {
            "GEMINI_API_KEY" => Some("primary".to_string()),
            "API_KEY" => Some("fallback".to_string()),
            _ => None,
        });
        assert_eq!(config.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn test_set_value_rejects_bad_input() {
        let mut config = AppConfig::default();
        assert!(set_value(&mut config, "timeout_secs", "soon").is_err());
        assert!(set_value(&mut config, "default_thinking_level", "extreme").is_err());
        assert!(set_value(&mut config, "proxy.port", "8080").is_err());
        assert!(set_value(&mut config, "base_url", "localhost").is_err());
    }

    #[test]
    fn test_get_value_covers_every_key() {
        let config = AppConfig::default();
        for key in CONFIG_KEYS {
            assert!(get_value(&config, key).is_ok(), "key {}", key);
        }
        assert_eq!(get_value(&config, "timeout_secs").unwrap(), "300");
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("short"), "*****");
        assert_eq!(mask_key("AIzaSyA1234567890xyz"), "AIza...0xyz");
    }
}
