use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Where an unknown branch name was looked up. Each lookup site reports the
/// miss with git's wording for that command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchLookup {
    Checkout,
    MergeSource,
    MergeTarget,
    Rebase,
    Delete,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("bash: {0}: command not found")]
    UnknownTool(String),

    #[error("git: '{0}' is not a git command. See 'git --help'.")]
    UnknownSubcommand(String),

    #[error("Error: No changes staged for commit")]
    NoStagedChanges,

    #[error("fatal: A branch named '{0}' already exists.")]
    BranchAlreadyExists(String),

    #[error("{}", unknown_branch_message(.name, .lookup))]
    UnknownBranch { name: String, lookup: BranchLookup },

    #[error("{0}")]
    MissingBranchName(String),

    #[error("Error: merge requires a branch name")]
    MissingSourceBranch,

    #[error("Error: branch '{0}' has no commits to merge")]
    EmptySourceBranch(String),

    #[error("error: Cannot delete branch '{branch}' checked out at '{path}'")]
    CannotDeleteCurrentBranch { branch: String, path: String },

    #[error("fatal: your current branch '{0}' does not have any commits yet")]
    NoCommits(String),

    #[error("fatal: bad default revision 'HEAD'")]
    NoDefaultRevision,

    #[error("fatal: ambiguous argument '{0}': unknown revision or path not in the working tree.")]
    AmbiguousOrUnknownRevision(String),

    #[error("{0}")]
    MissingConfigArgument(&'static str),

    #[error("No configuration found for key: {0}")]
    UnsetConfigKey(String),

    #[error("No manual entry for git-{0}")]
    UnknownHelpTopic(String),

    #[error("Error: {0}")]
    Internal(String),

    #[error("Invalid settings: {0}")]
    Settings(String),

    #[error("Invalid seed: {0}")]
    Seed(String),
}

fn unknown_branch_message(name: &str, lookup: &BranchLookup) -> String {
    match lookup {
        BranchLookup::Checkout => {
            format!("error: pathspec '{name}' did not match any file(s) known to git")
        }
        BranchLookup::MergeSource => format!("merge: {name} - not something we can merge"),
        BranchLookup::MergeTarget => format!("Error: branch '{name}' not found."),
        BranchLookup::Rebase => format!("fatal: invalid upstream '{name}'"),
        BranchLookup::Delete => format!("error: branch '{name}' not found."),
    }
}

impl Error {
    pub fn unknown_branch(name: impl Into<String>, lookup: BranchLookup) -> Self {
        Error::UnknownBranch {
            name: name.into(),
            lookup,
        }
    }
}
