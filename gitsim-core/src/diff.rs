//! Unified diff rendering for `git diff`.
//!
//! The simulator tracks no file contents, so the diff is always computed
//! between the same two canned revisions of `file1.txt`.

use similar::{ChangeTag, TextDiff};

pub const CANNED_PATH: &str = "file1.txt";
const CANNED_BEFORE: &str = "line 1\nline 2\nline 3\n";
const CANNED_AFTER: &str = "line 1\nline 2\nnew line\nline 3\n";
const CANNED_INDEX: &str = "index 1234567..abcdefg 100644";

#[derive(Debug, Clone)]
pub struct FileDiff {
    pub path: String,
    pub diff_lines: Vec<DiffLine>,
}

#[derive(Debug, Clone)]
pub struct DiffLine {
    pub line_type: DiffLineType,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLineType {
    Context,
    Addition,
    Deletion,
}

impl FileDiff {
    pub fn canned() -> Self {
        Self::between(CANNED_PATH, CANNED_BEFORE, CANNED_AFTER)
    }

    fn between(path: &str, old_text: &str, new_text: &str) -> Self {
        FileDiff {
            path: path.to_string(),
            diff_lines: Self::compute_diff(old_text, new_text),
        }
    }

    fn compute_diff(old_text: &str, new_text: &str) -> Vec<DiffLine> {
        TextDiff::from_lines(old_text, new_text)
            .iter_all_changes()
            .map(|change| DiffLine {
                line_type: match change.tag() {
                    ChangeTag::Delete => DiffLineType::Deletion,
                    ChangeTag::Insert => DiffLineType::Addition,
                    ChangeTag::Equal => DiffLineType::Context,
                },
                content: change.to_string(),
            })
            .collect()
    }

    /// Renders the whole file as a single hunk with a git-style header.
    pub fn format_unified(&self) -> String {
        let old_count = self
            .diff_lines
            .iter()
            .filter(|l| l.line_type != DiffLineType::Addition)
            .count();
        let new_count = self
            .diff_lines
            .iter()
            .filter(|l| l.line_type != DiffLineType::Deletion)
            .count();

        let mut output = String::new();
        output.push_str(&format!("diff --git a/{0} b/{0}\n", self.path));
        output.push_str(CANNED_INDEX);
        output.push('\n');
        output.push_str(&format!("--- a/{}\n", self.path));
        output.push_str(&format!("+++ b/{}\n", self.path));
        output.push_str(&format!("@@ -1,{old_count} +1,{new_count} @@\n"));

        for line in &self.diff_lines {
            let prefix = match line.line_type {
                DiffLineType::Addition => "+",
                DiffLineType::Deletion => "-",
                DiffLineType::Context => " ",
            };
            output.push_str(prefix);
            output.push_str(line.content.trim_end_matches('\n'));
            output.push('\n');
        }

        output.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_computation() {
        let old_text = "line 1\nline 2\nline 3\n";
        let new_text = "line 1\nline 2 modified\nline 3\nline 4\n";

        let diff_lines = FileDiff::compute_diff(old_text, new_text);

        assert!(diff_lines
            .iter()
            .any(|l| l.line_type == DiffLineType::Addition));
        assert!(diff_lines
            .iter()
            .any(|l| l.line_type == DiffLineType::Deletion));
    }

    #[test]
    fn test_hunk_header_counts_each_side() {
        let diff = FileDiff::between("notes.txt", "a\nb\nc\n", "a\nc\n");
        let rendered = diff.format_unified();

        assert!(rendered.starts_with("diff --git a/notes.txt b/notes.txt\n"));
        assert!(rendered.contains("@@ -1,3 +1,2 @@\n a\n-b\n c"));
    }

    #[test]
    fn test_canned_diff_rendering() {
        let rendered = FileDiff::canned().format_unified();

        assert_eq!(
            rendered,
            "diff --git a/file1.txt b/file1.txt\n\
             index 1234567..abcdefg 100644\n\
             --- a/file1.txt\n\
             +++ b/file1.txt\n\
             @@ -1,3 +1,4 @@\n \
             line 1\n \
             line 2\n\
             +new line\n \
             line 3"
        );
    }
}
