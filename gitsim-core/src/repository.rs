use crate::models::Commit;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BRANCH: &str = "main";

/// The simulated repository: checked-out branch, branch labels, commit
/// history and staging area.
///
/// Collaborators only get shared borrows. Mutation goes through the
/// crate-private primitives below, which keep `current_branch` inside
/// `branches` and never remove commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    current_branch: String,
    branches: Vec<String>,
    commits: Vec<Commit>,
    staged: Vec<String>,
}

impl Default for Repository {
    fn default() -> Self {
        Self::new(DEFAULT_BRANCH)
    }
}

impl Repository {
    pub fn new(default_branch: &str) -> Self {
        Self {
            current_branch: default_branch.to_string(),
            branches: vec![default_branch.to_string()],
            commits: Vec::new(),
            staged: Vec::new(),
        }
    }

    /// Builds a repository from already-validated parts.
    pub(crate) fn from_parts(
        current_branch: String,
        branches: Vec<String>,
        commits: Vec<Commit>,
        staged: Vec<String>,
    ) -> Self {
        debug_assert!(branches.contains(&current_branch));
        let mut repo = Self {
            current_branch,
            branches,
            commits,
            staged: Vec::new(),
        };
        repo.set_staged(staged);
        repo
    }

    pub fn current_branch(&self) -> &str {
        &self.current_branch
    }

    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn staged(&self) -> &[String] {
        &self.staged
    }

    pub fn has_branch(&self, name: &str) -> bool {
        self.branches.iter().any(|b| b == name)
    }

    pub fn commits_on<'a>(&'a self, branch: &'a str) -> impl Iterator<Item = &'a Commit> + 'a {
        self.commits.iter().filter(move |c| c.branch == branch)
    }

    /// Most recent commit on `branch`, by timestamp.
    pub fn tip_of<'a>(&'a self, branch: &'a str) -> Option<&'a Commit> {
        self.commits_on(branch).max_by_key(|c| c.timestamp)
    }

    pub fn latest_commit(&self) -> Option<&Commit> {
        self.commits.last()
    }

    pub fn find_commit(&self, prefix: &str) -> Option<&Commit> {
        self.commits.iter().find(|c| c.id.starts_with(prefix))
    }

    pub(crate) fn reset(&mut self, default_branch: &str) {
        *self = Self::new(default_branch);
    }

    /// Adds `name` unless already present. Returns whether it was added.
    pub(crate) fn add_branch(&mut self, name: &str) -> bool {
        if self.has_branch(name) {
            return false;
        }
        self.branches.push(name.to_string());
        true
    }

    /// Removes a branch label. The checked-out branch is never removed.
    pub(crate) fn remove_branch(&mut self, name: &str) -> bool {
        if name == self.current_branch {
            return false;
        }
        let before = self.branches.len();
        self.branches.retain(|b| b != name);
        self.branches.len() != before
    }

    /// Switches to a known branch. Returns false if `name` is not a branch.
    pub(crate) fn switch_to(&mut self, name: &str) -> bool {
        if !self.has_branch(name) {
            return false;
        }
        self.current_branch = name.to_string();
        true
    }

    pub(crate) fn push_commit(&mut self, commit: Commit) {
        self.commits.push(commit);
    }

    pub(crate) fn set_staged(&mut self, files: Vec<String>) {
        let mut staged: Vec<String> = Vec::with_capacity(files.len());
        for file in files {
            if !staged.contains(&file) {
                staged.push(file);
            }
        }
        self.staged = staged;
    }

    pub(crate) fn clear_staged(&mut self) {
        self.staged.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Signature;

    fn commit(id: &str, branch: &str, timestamp: i64) -> Commit {
        Commit::new(
            id.to_string(),
            format!("commit {id}"),
            Signature::new("Git Learner", "learner@gitlearner.com"),
            timestamp,
            branch.to_string(),
        )
    }

    #[test]
    fn test_new_repository() {
        let repo = Repository::default();

        assert_eq!(repo.current_branch(), "main");
        assert_eq!(repo.branches(), ["main".to_string()]);
        assert!(repo.commits().is_empty());
        assert!(repo.staged().is_empty());
    }

    #[test]
    fn test_branch_primitives() {
        let mut repo = Repository::default();

        assert!(repo.add_branch("feature"));
        assert!(!repo.add_branch("feature"));
        assert!(repo.switch_to("feature"));
        assert!(!repo.switch_to("ghost"));
        assert!(!repo.remove_branch("feature"));
        assert!(repo.remove_branch("main"));
        assert_eq!(repo.branches(), ["feature".to_string()]);
    }

    #[test]
    fn test_tip_of_uses_highest_timestamp() {
        let mut repo = Repository::default();
        repo.push_commit(commit("b", "main", 20));
        repo.push_commit(commit("a", "main", 10));
        repo.push_commit(commit("c", "feature", 30));

        assert_eq!(repo.tip_of("main").map(|c| c.id.as_str()), Some("b"));
        assert!(repo.tip_of("ghost").is_none());
        assert_eq!(repo.commits_on("main").count(), 2);
    }

    #[test]
    fn test_set_staged_deduplicates() {
        let mut repo = Repository::default();
        repo.set_staged(vec!["a.txt".into(), "b.txt".into(), "a.txt".into()]);

        assert_eq!(repo.staged(), ["a.txt".to_string(), "b.txt".to_string()]);
    }

    #[test]
    fn test_find_commit_by_prefix() {
        let mut repo = Repository::default();
        repo.push_commit(commit("abc1234", "main", 1));

        assert!(repo.find_commit("abc").is_some());
        assert!(repo.find_commit("abd").is_none());
    }
}
