use super::Context;
use crate::error::{Error, Result};
use crate::models::Signature;
use crate::parser::AuthorSpec;
use tracing::debug;

const DEFAULT_MESSAGE: &str = "New commit";

pub(super) fn commit(
    ctx: &mut Context<'_>,
    message: Option<String>,
    author: Option<AuthorSpec>,
) -> Result<String> {
    if ctx.repo.staged().is_empty() {
        return Err(Error::NoStagedChanges);
    }

    let message = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
    let author = resolve_author(ctx, author);
    let branch = ctx.repo.current_branch().to_string();

    let commit = ctx.new_commit(message, author, branch.clone());
    let line = format!("[{} {}] {}", branch, commit.id, commit.message);
    debug!(id = %commit.id, branch = %branch, files = ctx.repo.staged().len(), "recorded commit");

    ctx.repo.push_commit(commit);
    ctx.repo.clear_staged();

    Ok(line)
}

/// `--author` wins over `user.name`; the address comes from `<...>` in the
/// flag when present, otherwise from `user.email`.
fn resolve_author(ctx: &Context<'_>, spec: Option<AuthorSpec>) -> Signature {
    let configured = ctx.configured_author();
    match spec {
        Some(spec) if !spec.name.is_empty() => Signature {
            name: spec.name,
            email: spec.email.unwrap_or(configured.email),
        },
        Some(spec) => Signature {
            name: configured.name,
            email: spec.email.unwrap_or(configured.email),
        },
        None => configured,
    }
}
