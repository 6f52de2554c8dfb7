//! Remote commands. There is no network; these print fixed protocol-style
//! text and never touch the repository.

use super::Context;
use crate::error::Result;
use crate::parser::RemoteArgs;

const DEFAULT_REMOTE: &str = "origin";

fn resolve<'a>(ctx: &'a Context<'_>, args: &'a RemoteArgs) -> (&'a str, &'a str) {
    (
        args.remote.as_deref().unwrap_or(DEFAULT_REMOTE),
        args.branch.as_deref().unwrap_or(ctx.repo.current_branch()),
    )
}

pub(super) fn push(ctx: &Context<'_>, args: RemoteArgs) -> Result<String> {
    let (remote, branch) = resolve(ctx, &args);
    Ok(format!(
        "To {remote}\n * [new branch]      {branch} -> {branch}"
    ))
}

pub(super) fn pull(ctx: &Context<'_>, args: RemoteArgs) -> Result<String> {
    let (remote, branch) = resolve(ctx, &args);
    Ok(format!(
        "From {remote}\n * branch            {branch}     -> FETCH_HEAD\nAlready up to date."
    ))
}

pub(super) fn fetch() -> Result<String> {
    Ok("remote: Enumerating objects: 3, done.\n\
        remote: Counting objects: 100% (3/3), done.\n\
        remote: Total 3 (delta 0), reused 0 (delta 0), pack-reused 0"
        .to_string())
}
