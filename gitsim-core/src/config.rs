use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const USER_NAME: &str = "user.name";
pub const USER_EMAIL: &str = "user.email";

pub const FALLBACK_NAME: &str = "Git Learner";
pub const FALLBACK_EMAIL: &str = "learner@gitlearner.com";

/// Session-wide `git config` values keyed by dotted name.
///
/// Survives `git init`; only `git config` changes it after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GitConfig {
    entries: BTreeMap<String, String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(USER_NAME.to_string(), FALLBACK_NAME.to_string());
        entries.insert(USER_EMAIL.to_string(), FALLBACK_EMAIL.to_string());
        Self { entries }
    }
}

impl GitConfig {
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut config = Self::default();
        for (key, value) in entries {
            config.entries.insert(key.into(), value.into());
        }
        config
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub(crate) fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn user_name(&self) -> &str {
        self.get(USER_NAME).unwrap_or(FALLBACK_NAME)
    }

    pub fn user_email(&self) -> &str {
        self.get(USER_EMAIL).unwrap_or(FALLBACK_EMAIL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GitConfig::default();

        assert_eq!(config.user_name(), "Git Learner");
        assert_eq!(config.user_email(), "learner@gitlearner.com");
        assert_eq!(config.len(), 2);
    }

    #[test]
    fn test_empty_value_falls_back() {
        let mut config = GitConfig::default();
        config.set(USER_NAME, "");

        assert_eq!(config.get(USER_NAME), None);
        assert_eq!(config.user_name(), FALLBACK_NAME);
    }

    #[test]
    fn test_with_entries_overrides_defaults() {
        let config = GitConfig::with_entries([("user.name", "Ada"), ("core.editor", "vim")]);

        assert_eq!(config.user_name(), "Ada");
        assert_eq!(config.get("core.editor"), Some("vim"));
        assert_eq!(config.len(), 3);
    }
}
