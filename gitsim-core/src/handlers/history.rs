use super::Context;
use crate::error::{Error, Result};
use crate::models::Commit;
use crate::parser::LogFormat;

pub(super) fn log(ctx: &Context<'_>, format: LogFormat) -> Result<String> {
    let commits = ctx.repo.commits();
    if commits.is_empty() {
        return Err(Error::NoCommits(ctx.repo.current_branch().to_string()));
    }

    let out = match (format.oneline, format.graph) {
        (true, true) => graph(commits),
        (true, false) => commits
            .iter()
            .rev()
            .map(|c| format!("{} {}", c.short_id(), c.message))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => commits
            .iter()
            .rev()
            .map(verbose)
            .collect::<Vec<_>>()
            .join("\n\n"),
    };

    Ok(out.trim_end().to_string())
}

fn verbose(commit: &Commit) -> String {
    format!(
        "commit {}\nAuthor: {} <{}>\nDate: {}\n\n    {}",
        commit.id,
        commit.author,
        commit.email,
        commit.formatted_date(),
        commit.message
    )
}

/// Approximate graph for `--oneline --graph`. Glyphs depend only on whether
/// a commit is a merge and on its position, not on real ancestry.
fn graph(commits: &[Commit]) -> String {
    let mut sorted: Vec<&Commit> = commits.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let last = sorted.len() - 1;
    let mut lines = Vec::new();

    for (index, commit) in sorted.iter().enumerate() {
        let is_merge = commit.is_merge();
        let glyph = if is_merge {
            "*   "
        } else if index != last {
            "| * "
        } else {
            "* "
        };

        let mut line = format!("{glyph}{} {}", commit.short_id(), commit.message);
        if let (Some(from), Some(into)) = (&commit.merge_from, &commit.merge_into) {
            line.push_str(&format!(" ({from} → {into})"));
        }
        lines.push(line);

        if is_merge && index < last {
            lines.push("|\\  ".to_string());
            if let Some(from) = &commit.merge_from {
                lines.push(format!("| * {from} commit"));
            }
        }
    }

    lines.join("\n")
}

/// `git show [<rev>]`. `HEAD` and no argument both mean the latest commit.
pub(super) fn show(ctx: &Context<'_>, revision: Option<&str>) -> Result<String> {
    let Some(latest) = ctx.repo.latest_commit() else {
        return Err(Error::NoDefaultRevision);
    };

    let commit = match revision {
        None | Some("HEAD") => latest,
        Some(prefix) => ctx
            .repo
            .find_commit(prefix)
            .ok_or_else(|| Error::AmbiguousOrUnknownRevision(prefix.to_string()))?,
    };

    let mut out = verbose(commit);
    if let (Some(from), Some(into)) = (&commit.merge_from, &commit.merge_into) {
        out.push_str(&format!("\n\nMerge: {from} → {into}"));
    }
    if let Some(branch) = &commit.branched_from {
        out.push_str(&format!("\n\nBranched from: {branch}"));
    }
    Ok(out)
}
