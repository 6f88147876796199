use anyhow::Result;

use crate::cli::{ConfigCommands, DisclaimerCommands, ThemeCommands};
use crate::{config_commands, preference_commands};

pub fn handle_config_command(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show { json } => config_commands::show_config(json),
        ConfigCommands::Get { key } => config_commands::get_config_value(&key),
        ConfigCommands::Set { key, value } => config_commands::set_config_value(&key, &value),
    }
}

pub fn handle_disclaimer_command(cmd: DisclaimerCommands) -> Result<()> {
    match cmd {
        DisclaimerCommands::Status => preference_commands::disclaimer_status(),
        DisclaimerCommands::Accept => preference_commands::accept_disclaimer(),
    }
}

pub fn handle_theme_command(cmd: ThemeCommands) -> Result<()> {
    match cmd {
        ThemeCommands::Get => preference_commands::show_theme(),
        ThemeCommands::Set { mode, accent } => preference_commands::set_theme(&mode, accent),
    }
}
