use anyhow::Result;
use colored::Colorize;

use lexassist_core::config::{self as core_config, mask_key};

pub fn show_config(json: bool) -> Result<()> {
    let config = core_config::load_config()?;

    if json {
        let mut masked = config.clone();
        masked.api_key = masked.api_key.as_deref().map(mask_key);
        println!("{}", serde_json::to_string_pretty(&masked)?);
    } else {
        println!("{}", "LexAssist Configuration:".cyan().bold());
        println!("  API Key: {}", config.api_key.as_deref().map(mask_key).unwrap_or_else(|| "(not set)".to_string()));
        println!("  Base URL: {}", config.base_url);
        println!("  Default Model: {}", config.default_model);
        println!("  Timeout: {}s", config.timeout_secs);
        println!("  Thinking Level: {}", config.default_thinking_level);
        println!("  Media Resolution: {}", config.default_media_resolution);
        println!("  Log To File: {}", config.log_to_file);
    }
    Ok(())
}

pub fn get_config_value(key: &str) -> Result<()> {
    let config = core_config::load_config()?;
    let value = core_config::get_value(&config, key)?;
    if key == "api_key" {
        println!("{}", mask_key(&value));
    } else {
        println!("{}", value);
    }
    Ok(())
}

pub fn set_config_value(key: &str, value: &str) -> Result<()> {
    core_config::update_config(|config| core_config::set_value(config, key, value))?;

    let shown = if key == "api_key" { mask_key(value) } else { value.to_string() };
    println!("{} Config updated: {} = {}", "✓".green(), key, shown);
    Ok(())
}
