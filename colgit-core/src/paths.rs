//! Locations of the files and directories ColGit owns.

use std::path::{Path, PathBuf};

use crate::error::{ColGitError, ColGitResult};

/// Overrides the directory that stands in for the user's home.
pub const HOME_ENV: &str = "COLGIT_HOME";

const CONFIG_FILE: &str = "ColGit_Config.json";
const REPO_DIR: &str = "ColGit_Repo";
const NOTES_DIR: &str = "ColGit_Notes";
const REMINDERS_FILE: &str = "ColGit_Reminders.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    home: PathBuf,
}

impl Paths {
    pub fn from_home(home: impl Into<PathBuf>) -> Self {
        Paths { home: home.into() }
    }

    /// Resolve the base directory from `COLGIT_HOME`, falling back to the
    /// user's home directory.
    pub fn discover() -> ColGitResult<Self> {
        Self::resolve(std::env::var(HOME_ENV).ok().as_deref())
    }

    fn resolve(override_dir: Option<&str>) -> ColGitResult<Self> {
        if let Some(dir) = override_dir.filter(|d| !d.trim().is_empty()) {
            let expanded = shellexpand::tilde(dir).into_owned();
            return Ok(Self::from_home(expanded));
        }

        let home = dirs::home_dir()
            .ok_or_else(|| ColGitError::Config("Could not determine home directory".into()))?;
        Ok(Self::from_home(home))
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join(CONFIG_FILE)
    }

    pub fn repo_root(&self) -> PathBuf {
        self.home.join(REPO_DIR)
    }

    pub fn notes_dir(&self) -> PathBuf {
        self.home.join(NOTES_DIR)
    }

    pub fn reminders_file(&self) -> PathBuf {
        self.home.join(REMINDERS_FILE)
    }
}
