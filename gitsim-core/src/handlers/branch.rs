use super::Context;
use crate::error::{BranchLookup, Error, Result};
use tracing::debug;

/// `git checkout -b <name>`: cuts a branch from the current one and records
/// a synthetic "Branch from" commit carrying the provenance.
pub(super) fn checkout_new(ctx: &mut Context<'_>, name: &str) -> Result<String> {
    if ctx.repo.has_branch(name) {
        return Err(Error::BranchAlreadyExists(name.to_string()));
    }

    let previous = ctx.repo.current_branch().to_string();
    let parent = ctx.repo.tip_of(&previous).map(|c| c.id.clone());
    let author = ctx.configured_author();

    let commit = ctx
        .new_commit(format!("Branch from {previous}"), author, name.to_string())
        .with_branched_from(previous.clone(), parent);

    ctx.repo.add_branch(name);
    ctx.repo.push_commit(commit);
    ctx.repo.switch_to(name);
    debug!(branch = %name, from = %previous, "created branch");

    Ok(format!(
        "Switched to a new branch '{name}' (branched from '{previous}')"
    ))
}

pub(super) fn checkout(ctx: &mut Context<'_>, name: &str) -> Result<String> {
    if !ctx.repo.switch_to(name) {
        return Err(Error::unknown_branch(name, BranchLookup::Checkout));
    }
    Ok(format!("Switched to branch '{name}'"))
}

pub(super) fn list(ctx: &Context<'_>) -> Result<String> {
    let current = ctx.repo.current_branch();
    let lines: Vec<String> = ctx
        .repo
        .branches()
        .iter()
        .map(|branch| {
            if branch == current {
                format!("* {branch}")
            } else {
                format!("  {branch}")
            }
        })
        .collect();
    Ok(lines.join("\n"))
}

/// `git branch <name>` only adds the label; no commit is recorded.
pub(super) fn create(ctx: &mut Context<'_>, name: &str) -> Result<String> {
    if !ctx.repo.add_branch(name) {
        return Err(Error::BranchAlreadyExists(name.to_string()));
    }
    Ok(format!(
        "Created branch '{}' (based on '{}')",
        name,
        ctx.repo.current_branch()
    ))
}

/// Removes the label only. Commits recorded on the branch stay in history.
pub(super) fn delete(ctx: &mut Context<'_>, name: &str) -> Result<String> {
    if name == ctx.repo.current_branch() {
        return Err(Error::CannotDeleteCurrentBranch {
            branch: name.to_string(),
            path: ctx.settings.repo_path.clone(),
        });
    }
    if !ctx.repo.remove_branch(name) {
        return Err(Error::unknown_branch(name, BranchLookup::Delete));
    }
    Ok(format!("Deleted branch {name}"))
}
