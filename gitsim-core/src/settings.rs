//! Simulator settings, loadable from TOML.
//!
//! ```toml
//! default_branch = "main"
//! repo_path = "/challenge"
//! canned_files = ["file1.txt", "file2.txt"]
//!
//! [git]
//! "user.name" = "Ada Lovelace"
//! ```

use crate::config::GitConfig;
use crate::error::{Error, Result};
use crate::repository::DEFAULT_BRANCH;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Branch created by `git init` and by new sessions.
    pub default_branch: String,
    /// Path shown in `git init` and branch-deletion messages.
    pub repo_path: String,
    /// Files staged by `git add .` and `git add -A`.
    pub canned_files: Vec<String>,
    /// Extra `git config` entries layered over the built-in defaults.
    pub git: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_branch: DEFAULT_BRANCH.to_string(),
            repo_path: "/challenge".to_string(),
            canned_files: vec!["file1.txt".to_string(), "file2.txt".to_string()],
            git: BTreeMap::new(),
        }
    }
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings: Settings =
            toml::from_str(text).map_err(|e| Error::Settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Settings(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.default_branch.trim().is_empty() {
            return Err(Error::Settings("default_branch must not be empty".into()));
        }
        if self.default_branch.chars().any(char::is_whitespace) {
            return Err(Error::Settings(format!(
                "default_branch '{}' contains whitespace",
                self.default_branch
            )));
        }
        Ok(())
    }

    pub fn git_config(&self) -> GitConfig {
        GitConfig::with_entries(self.git.clone())
    }
}
