use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Input,
    Output,
    Error,
}

impl LogKind {
    pub fn as_str(&self) -> &str {
        match self {
            LogKind::Input => "input",
            LogKind::Output => "output",
            LogKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    pub kind: LogKind,
}

impl LogEntry {
    pub fn input(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: LogKind::Input,
        }
    }

    pub fn output(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: LogKind::Output,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: LogKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == LogKind::Error
    }
}

/// A recorded change event. Commits are never edited once appended to a
/// repository; merges and rebases record new commits instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub id: String,
    pub message: String,
    pub author: String,
    pub email: String,
    pub timestamp: i64,
    pub branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_into: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branched_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_commit: Option<String>,
}

impl Commit {
    pub fn new(
        id: String,
        message: String,
        author: Signature,
        timestamp: i64,
        branch: String,
    ) -> Self {
        Self {
            id,
            message,
            author: author.name,
            email: author.email,
            timestamp,
            branch,
            merge_from: None,
            merge_into: None,
            branched_from: None,
            parent_commit: None,
        }
    }

    pub fn with_merge(mut self, from: String, into: String) -> Self {
        self.merge_from = Some(from);
        self.merge_into = Some(into);
        self
    }

    pub fn with_branched_from(mut self, branch: String, parent: Option<String>) -> Self {
        self.branched_from = Some(branch);
        self.parent_commit = parent;
        self
    }

    pub fn with_parent(mut self, parent: String) -> Self {
        self.parent_commit = Some(parent);
        self
    }

    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(7) {
            Some((end, _)) => &self.id[..end],
            None => &self.id,
        }
    }

    pub fn is_merge(&self) -> bool {
        self.merge_from.is_some() || self.message.to_lowercase().contains("merge")
    }

    /// Git-style date line, e.g. `Sat Jan 1 00:05:00 2022 +0000`.
    pub fn formatted_date(&self) -> String {
        match DateTime::<Utc>::from_timestamp_millis(self.timestamp) {
            Some(dt) => dt.format("%a %b %-d %H:%M:%S %Y %z").to_string(),
            None => self.timestamp.to_string(),
        }
    }
}

/// Name and address a commit is recorded under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub email: String,
}

impl Signature {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(message: &str) -> Commit {
        Commit::new(
            "abcdef0123".to_string(),
            message.to_string(),
            Signature::new("Git Learner", "learner@gitlearner.com"),
            1_640_995_200_000,
            "main".to_string(),
        )
    }

    #[test]
    fn test_commit_creation() {
        let commit = sample("Initial commit");

        assert_eq!(commit.message, "Initial commit");
        assert_eq!(commit.author, "Git Learner");
        assert_eq!(commit.branch, "main");
        assert!(commit.merge_from.is_none());
        assert!(commit.branched_from.is_none());
    }

    #[test]
    fn test_short_id() {
        assert_eq!(sample("x").short_id(), "abcdef0");

        let mut short = sample("x");
        short.id = "initial".to_string();
        assert_eq!(short.short_id(), "initial");
        short.id = "abc".to_string();
        assert_eq!(short.short_id(), "abc");
    }

    #[test]
    fn test_is_merge() {
        assert!(!sample("Add feature").is_merge());
        assert!(sample("Merge pull request").is_merge());
        assert!(sample("x")
            .with_merge("feature".to_string(), "main".to_string())
            .is_merge());
    }

    #[test]
    fn test_formatted_date() {
        let commit = sample("x");
        assert_eq!(commit.formatted_date(), "Sat Jan 1 00:00:00 2022 +0000");
    }

    #[test]
    fn test_log_entry_serializes_kind_lowercase() {
        let entry = LogEntry::error("boom");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"message":"boom","kind":"error"}"#);
    }
}
