//! Persisted user settings.
//!
//! The whole [`ConfigState`] lives in one JSON file. Every setter rewrites the
//! file through a temp file and a rename, so a crash mid-write leaves the
//! previous settings intact.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ColGitError, ColGitResult};
use crate::i18n;
use crate::storage::write_atomic;
use crate::theme::Theme;

pub const DEFAULT_LANGUAGE: &str = "English";
pub const DEFAULT_STORAGE_LIMIT: f64 = 10.0;

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_storage_limit() -> f64 {
    DEFAULT_STORAGE_LIMIT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigState {
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default)]
    pub theme: Theme,

    /// Gigabytes. Stored for the user, never enforced.
    #[serde(default = "default_storage_limit")]
    pub storage_limit: f64,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            language: default_language(),
            theme: Theme::default(),
            storage_limit: DEFAULT_STORAGE_LIMIT,
        }
    }
}

fn check_storage_limit(limit: f64) -> Result<f64, String> {
    if !limit.is_finite() {
        return Err(format!("storage limit must be a finite number, got {limit}"));
    }
    if limit <= 0.0 {
        return Err(format!("storage limit must be positive, got {limit}"));
    }
    Ok(limit)
}

pub struct ConfigStore {
    path: PathBuf,
    state: ConfigState,
}

impl ConfigStore {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: impl Into<PathBuf>) -> ColGitResult<Self> {
        let path = path.into();

        let state = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::parse(&path, &content)?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            ConfigState::default()
        };

        Ok(ConfigStore { path, state })
    }

    fn parse(path: &Path, content: &str) -> ColGitResult<ConfigState> {
        let corrupt = |reason: String| ColGitError::CorruptConfig {
            path: path.to_path_buf(),
            reason,
        };

        let state: ConfigState =
            serde_json::from_str(content).map_err(|e| corrupt(e.to_string()))?;
        check_storage_limit(state.storage_limit).map_err(corrupt)?;

        Ok(state)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> &ConfigState {
        &self.state
    }

    pub fn get_language(&self) -> &str {
        &self.state.language
    }

    pub fn get_theme(&self) -> Theme {
        self.state.theme
    }

    pub fn get_storage_limit(&self) -> f64 {
        self.state.storage_limit
    }

    /// Space the user allowed ColGit to use, in gigabytes.
    pub fn available_space(&self) -> f64 {
        self.get_storage_limit()
    }

    /// Translate `key` into the configured language.
    pub fn get_text<'a>(&self, key: &'a str) -> &'a str {
        i18n::get_text(key, self.get_language())
    }

    pub fn set_language(&mut self, language: &str) -> ColGitResult<()> {
        let language = language.trim();
        if language.is_empty() {
            return Err(ColGitError::InvalidArgument(
                "language must not be empty".into(),
            ));
        }
        self.state.language = language.to_string();
        self.save()
    }

    pub fn set_theme(&mut self, theme: Theme) -> ColGitResult<()> {
        self.state.theme = theme;
        self.save()
    }

    pub fn set_storage_limit(&mut self, limit: f64) -> ColGitResult<()> {
        let limit = check_storage_limit(limit).map_err(ColGitError::InvalidArgument)?;
        self.state.storage_limit = limit;
        self.save()
    }

    fn save(&self) -> ColGitResult<()> {
        let content = serde_json::to_string_pretty(&self.state)
            .map_err(|e| ColGitError::Serialization(e.to_string()))?;

        write_atomic(&self.path, &content)?;
        tracing::info!(path = %self.path.display(), "config saved");
        Ok(())
    }
}
