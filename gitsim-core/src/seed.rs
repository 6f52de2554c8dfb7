//! Initial repository state handed over by challenge content.
//!
//! A seed lists branches and commits the way challenge definitions do
//! (`{ branch, message, id?, parent? }`). Commits without an id get a fresh
//! one; timestamps follow list order.

use crate::config::GitConfig;
use crate::error::{Error, Result};
use crate::ident::{next_timestamp, IdSource};
use crate::models::{Commit, Signature};
use crate::repository::Repository;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedState {
    pub branches: Vec<String>,
    #[serde(default)]
    pub commits: Vec<SeedCommit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub staged: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCommit {
    pub branch: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl SeedCommit {
    pub fn new(branch: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            message: message.into(),
            id: None,
            parent: None,
            author: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

impl SeedState {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Seed(e.to_string()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Seed(e.to_string()))
    }

    /// Loads a seed file, choosing TOML for `.toml` files and JSON otherwise.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Seed(format!("{}: {}", path.display(), e)))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&text),
            _ => Self::from_json(&text),
        }
    }

    pub fn into_repository(self, config: &GitConfig, ids: &mut dyn IdSource) -> Result<Repository> {
        let mut branches: Vec<String> = Vec::with_capacity(self.branches.len());
        for branch in self.branches {
            if branch.trim().is_empty() {
                return Err(Error::Seed("branch names must not be empty".into()));
            }
            if !branches.contains(&branch) {
                branches.push(branch);
            }
        }

        let current_branch = match self.current_branch {
            Some(current) => current,
            None => branches
                .first()
                .cloned()
                .ok_or_else(|| Error::Seed("at least one branch is required".into()))?,
        };
        if !branches.contains(&current_branch) {
            return Err(Error::Seed(format!(
                "current branch '{current_branch}' is not listed in branches"
            )));
        }

        let mut commits = Vec::with_capacity(self.commits.len());
        for (index, seed) in self.commits.into_iter().enumerate() {
            if !branches.contains(&seed.branch) {
                return Err(Error::Seed(format!(
                    "commit '{}' is on unknown branch '{}'",
                    seed.message, seed.branch
                )));
            }

            let author = Signature::new(
                seed.author.unwrap_or_else(|| config.user_name().to_string()),
                config.user_email(),
            );
            let id = seed.id.unwrap_or_else(|| ids.next_id());
            let mut commit = Commit::new(id, seed.message, author, next_timestamp(index), seed.branch);
            if let Some(parent) = seed.parent {
                commit = commit.with_parent(parent);
            }
            commits.push(commit);
        }

        Ok(Repository::from_parts(
            current_branch,
            branches,
            commits,
            self.staged,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::SequentialIds;

    #[test]
    fn test_seed_from_challenge_json() {
        let seed = SeedState::from_json(
            r#"{
                "branches": ["main", "feature"],
                "commits": [
                    { "branch": "main", "message": "Initial commit", "id": "initial" },
                    { "branch": "feature", "message": "Add new feature", "parent": "initial" }
                ]
            }"#,
        )
        .unwrap();

        let repo = seed
            .into_repository(&GitConfig::default(), &mut SequentialIds::new())
            .unwrap();

        assert_eq!(repo.current_branch(), "main");
        assert_eq!(repo.commits().len(), 2);
        assert_eq!(repo.commits()[0].id, "initial");
        assert_eq!(repo.commits()[1].id, "0000001");
        assert_eq!(repo.commits()[1].parent_commit.as_deref(), Some("initial"));
        assert!(repo.commits()[0].timestamp < repo.commits()[1].timestamp);
    }

    #[test]
    fn test_seed_rejects_commit_on_unknown_branch() {
        let seed = SeedState {
            branches: vec!["main".into()],
            commits: vec![SeedCommit::new("ghost", "boo")],
            ..Default::default()
        };

        let result = seed.into_repository(&GitConfig::default(), &mut SequentialIds::new());
        assert!(matches!(result, Err(Error::Seed(_))));
    }

    #[test]
    fn test_seed_rejects_unknown_current_branch() {
        let seed = SeedState {
            branches: vec!["main".into()],
            current_branch: Some("develop".into()),
            ..Default::default()
        };

        let result = seed.into_repository(&GitConfig::default(), &mut SequentialIds::new());
        assert!(matches!(result, Err(Error::Seed(_))));
    }

    #[test]
    fn test_seed_requires_a_branch() {
        let result =
            SeedState::default().into_repository(&GitConfig::default(), &mut SequentialIds::new());
        assert!(matches!(result, Err(Error::Seed(_))));
    }

    #[test]
    fn test_seed_from_toml() {
        let seed = SeedState::from_toml(
            r#"
            branches = ["main"]
            currentBranch = "main"

            [[commits]]
            branch = "main"
            message = "Initial commit"
            "#,
        )
        .unwrap();

        assert_eq!(seed.current_branch.as_deref(), Some("main"));
        assert_eq!(seed.commits.len(), 1);
    }
}
