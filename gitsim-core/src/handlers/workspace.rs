use super::Context;
use crate::diff::FileDiff;
use crate::error::Result;
use crate::parser::AddTarget;
use tracing::info;

pub(super) fn init(ctx: &mut Context<'_>) -> Result<String> {
    let branch = ctx.settings.default_branch.clone();
    ctx.repo.reset(&branch);
    info!(branch = %branch, "repository reinitialized");
    Ok(format!(
        "Initialized empty Git repository in {}/.git/",
        ctx.settings.repo_path.trim_end_matches('/')
    ))
}

/// Replaces the staging area wholesale.
pub(super) fn add(ctx: &mut Context<'_>, target: AddTarget) -> Result<String> {
    match target {
        AddTarget::All => {
            ctx.repo.set_staged(ctx.settings.canned_files.clone());
            Ok("Changes staged for commit".to_string())
        }
        AddTarget::Paths(paths) if paths.is_empty() => {
            Ok("Nothing specified, nothing added.".to_string())
        }
        AddTarget::Paths(paths) => {
            let listing = paths.join(" ");
            ctx.repo.set_staged(paths);
            Ok(format!("Staged files: {listing}"))
        }
    }
}

pub(super) fn status(ctx: &Context<'_>) -> Result<String> {
    let mut out = format!("On branch {}\n", ctx.repo.current_branch());
    if ctx.repo.staged().is_empty() {
        out.push_str("nothing to commit, working tree clean");
    } else {
        out.push_str("\nChanges to be committed:\n");
        for file in ctx.repo.staged() {
            out.push('\t');
            out.push_str(file);
            out.push('\n');
        }
    }
    Ok(out.trim_end().to_string())
}

/// Canned diff when anything is staged, otherwise an empty result.
pub(super) fn diff(ctx: &Context<'_>) -> Result<String> {
    if ctx.repo.staged().is_empty() {
        return Ok(String::new());
    }
    Ok(FileDiff::canned().format_unified())
}
