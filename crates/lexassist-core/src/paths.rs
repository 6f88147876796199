use std::fs;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

const DATA_DIR: &str = ".lexassist";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "LEXASSIST_DATA_DIR";

/// Get data directory path, creating it when missing.
///
/// Priority:
/// 1. `LEXASSIST_DATA_DIR` environment variable
/// 2. `~/.lexassist`
pub fn get_data_dir() -> AppResult<PathBuf> {
    let data_dir = match std::env::var(DATA_DIR_ENV) {
        Ok(custom_dir) if !custom_dir.trim().is_empty() => PathBuf::from(custom_dir),
        _ => {
            let home = dirs::home_dir()
                .ok_or_else(|| AppError::Storage("could not determine home directory".to_string()))?;
            home.join(DATA_DIR)
        },
    };

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir)?;
    }

    Ok(data_dir)
}
