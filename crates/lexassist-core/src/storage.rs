//! Small persisted key-value store for user preferences.
//!
//! One JSON object in `store.json` under the data directory. Every write
//! rewrites the whole file through a temp file and a rename.

use chrono::{DateTime, Utc};
use lexassist_types::models::ThemePreference;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::paths::get_data_dir;

const STORE_FILE: &str = "store.json";

/// Bumped whenever the disclaimer text changes, so users accept it again.
pub const DISCLAIMER_KEY: &str = "legal_disclaimer_accepted_v2";
const DISCLAIMER_AT_KEY: &str = "legal_disclaimer_accepted_v2_at";
pub const THEME_KEY: &str = "theme_preference";

pub struct LocalStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl LocalStore {
    /// Open the store in the default data directory.
    pub fn open_default() -> AppResult<Self> {
        Self::open(&get_data_dir()?)
    }

    /// Open `store.json` in `dir`. A missing file is an empty store; a corrupt
    /// one is reported and treated as empty.
    pub fn open(dir: &Path) -> AppResult<Self> {
        let path = dir.join(STORE_FILE);
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            match serde_json::from_str::<Map<String, Value>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Local store is corrupt, starting empty");
                    Map::new()
                },
            }
        } else {
            Map::new()
        };
        debug!(path = %path.display(), keys = entries.len(), "Opened local store");
        Ok(Self { path, entries })
    }

    /// Typed read. A value of the wrong shape reads as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.entries.get(key)?;
        serde_json::from_value(value.clone())
            .map_err(|e| warn!(key, error = %e, "Ignoring stored value of unexpected shape"))
            .ok()
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> AppResult<()> {
        self.entries.insert(key.to_string(), serde_json::to_value(value)?);
        self.flush()
    }

    fn flush(&self) -> AppResult<()> {
        let temp_path = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)
            .map_err(|e| AppError::Storage(format!("could not replace {}: {}", self.path.display(), e)))
    }

    pub fn disclaimer_accepted(&self) -> bool {
        self.get::<bool>(DISCLAIMER_KEY).unwrap_or(false)
    }

    /// When the disclaimer was last accepted.
    pub fn disclaimer_accepted_at(&self) -> Option<DateTime<Utc>> {
        self.get(DISCLAIMER_AT_KEY)
    }

    pub fn set_disclaimer_accepted(&mut self, accepted: bool) -> AppResult<()> {
        if accepted {
            self.entries.insert(DISCLAIMER_AT_KEY.to_string(), serde_json::to_value(Utc::now())?);
        } else {
            self.entries.remove(DISCLAIMER_AT_KEY);
        }
        self.set(DISCLAIMER_KEY, &accepted)
    }

    pub fn theme(&self) -> ThemePreference {
        self.get(THEME_KEY).unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: &ThemePreference) -> AppResult<()> {
        self.set(THEME_KEY, theme)
    }
}
