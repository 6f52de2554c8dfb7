use super::Context;
use crate::error::{BranchLookup, Error, Result};
use crate::models::Commit;
use tracing::debug;

/// `git merge <source> [into <target>]`.
///
/// Nothing is switched until every check has passed. The "found N commit(s)"
/// count compares ids between the two branches; since commits are never
/// copied across branches it is descriptive only.
pub(super) fn merge(
    ctx: &mut Context<'_>,
    source: Option<&str>,
    target: Option<&str>,
) -> Result<String> {
    if let Some(target) = target {
        if !ctx.repo.has_branch(target) {
            return Err(Error::unknown_branch(target, BranchLookup::MergeTarget));
        }
    }

    let source = source.ok_or(Error::MissingSourceBranch)?;
    if !ctx.repo.has_branch(source) {
        return Err(Error::unknown_branch(source, BranchLookup::MergeSource));
    }

    let into = target.unwrap_or(ctx.repo.current_branch()).to_string();
    let mut lines = Vec::new();

    if source == into {
        if target.is_some() {
            ctx.repo.switch_to(&into);
            lines.push(format!("Switched to branch '{into}'"));
        }
        lines.push("Already up to date.".to_string());
        return Ok(lines.join("\n"));
    }

    let source_commits: Vec<&Commit> = ctx.repo.commits_on(source).collect();
    let Some(last_source) = source_commits.last() else {
        return Err(Error::EmptySourceBranch(source.to_string()));
    };
    let target_commits: Vec<&Commit> = ctx.repo.commits_on(&into).collect();

    let found = source_commits
        .iter()
        .filter(|sc| !target_commits.iter().any(|tc| tc.id == sc.id))
        .count();
    let source_line = describe(Some(last_source));
    let target_line = describe(target_commits.last().copied());

    let author = ctx.configured_author();
    let commit = ctx
        .new_commit(
            format!("Merge branch '{source}' into {into}"),
            author,
            into.clone(),
        )
        .with_merge(source.to_string(), into.clone());

    if target.is_some() {
        ctx.repo.switch_to(&into);
        lines.push(format!("Switched to branch '{into}'"));
    }
    debug!(id = %commit.id, from = %source, into = %into, "recorded merge commit");
    ctx.repo.push_commit(commit);

    lines.push("Merge made by the 'ort' strategy.".to_string());
    lines.push("Merging:".to_string());
    lines.push(source_line);
    lines.push(target_line);
    lines.push(format!(
        "found {found} commit(s) from '{source}' to merge into '{into}'."
    ));

    Ok(lines.join("\n"))
}

fn describe(commit: Option<&Commit>) -> String {
    match commit {
        Some(c) => format!("  {} {}", c.short_id(), c.message),
        None => "  unknown".to_string(),
    }
}

/// `git rebase <branch>` records one marker commit on the current branch;
/// existing commits are left untouched.
pub(super) fn rebase(ctx: &mut Context<'_>, upstream: &str) -> Result<String> {
    if !ctx.repo.has_branch(upstream) {
        return Err(Error::unknown_branch(upstream, BranchLookup::Rebase));
    }

    let current = ctx.repo.current_branch().to_string();
    if upstream == current {
        return Ok(format!("Current branch {current} is up to date."));
    }

    let author = ctx.configured_author();
    let commit = ctx.new_commit(
        format!("Rebased {current} onto {upstream}"),
        author,
        current.clone(),
    );
    debug!(id = %commit.id, onto = %upstream, "recorded rebase commit");
    ctx.repo.push_commit(commit);

    Ok(format!(
        "Successfully rebased and updated refs/heads/{current}."
    ))
}
