//! Command-line grammar for the simulated `git`.
//!
//! A line is split into tokens (honoring `"..."` and `'...'` quoting, which may
//! start mid-token as in `--author="Jane Doe"`), the second token selects the
//! subcommand, and each subcommand parses its own flags and positionals.

use crate::error::{Error, Result};

pub const TOOL: &str = "git";

pub const CONFIG_USAGE: &str =
    "Usage: git config [--global|--local] <key> [<value>] or git config --list";
pub const CONFIG_SCOPED_USAGE: &str = "Usage: git config --global <key> <value>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub quoted: bool,
}

impl Token {
    fn is_flag(&self) -> bool {
        !self.quoted && self.text.starts_with('-') && self.text.len() > 1
    }
}

pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                // Only a token that opens with a quote counts as quoted, so
                // `--author="A B"` still reads as a flag.
                if !in_token {
                    quoted = true;
                }
                in_token = true;
            }
            None if ch.is_whitespace() => {
                if in_token {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        quoted,
                    });
                    in_token = false;
                    quoted = false;
                }
            }
            None => {
                current.push(ch);
                in_token = true;
            }
        }
    }

    if in_token {
        tokens.push(Token {
            text: current,
            quoted,
        });
    }

    tokens
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSpec {
    pub name: String,
    pub email: Option<String>,
}

impl AuthorSpec {
    /// Parses `Name <email>` or a bare `Name`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let (Some(open), Some(close)) = (raw.find('<'), raw.rfind('>')) {
            if open < close {
                return Self {
                    name: raw[..open].trim().to_string(),
                    email: Some(raw[open + 1..close].trim().to_string()),
                };
            }
        }
        Self {
            name: raw.to_string(),
            email: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddTarget {
    All,
    Paths(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchAction {
    List,
    Create(String),
    Delete(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    List,
    Get(String),
    Set { key: String, value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFormat {
    pub oneline: bool,
    pub graph: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteArgs {
    pub remote: Option<String>,
    pub branch: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help {
        topic: Option<String>,
    },
    Commit {
        message: Option<String>,
        author: Option<AuthorSpec>,
    },
    CheckoutNew {
        branch: String,
    },
    Checkout {
        branch: String,
    },
    Merge {
        source: Option<String>,
        target: Option<String>,
    },
    Rebase {
        upstream: String,
    },
    Init,
    Add(AddTarget),
    Status,
    Branch(BranchAction),
    Push(RemoteArgs),
    Pull(RemoteArgs),
    Fetch,
    Diff,
    Config(ConfigAction),
    Log(LogFormat),
    Show {
        revision: Option<String>,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help { .. } => "help",
            Command::Commit { .. } => "commit",
            Command::CheckoutNew { .. } | Command::Checkout { .. } => "checkout",
            Command::Merge { .. } => "merge",
            Command::Rebase { .. } => "rebase",
            Command::Init => "init",
            Command::Add(_) => "add",
            Command::Status => "status",
            Command::Branch(_) => "branch",
            Command::Push(_) => "push",
            Command::Pull(_) => "pull",
            Command::Fetch => "fetch",
            Command::Diff => "diff",
            Command::Config(_) => "config",
            Command::Log(_) => "log",
            Command::Show { .. } => "show",
        }
    }

    /// Whether running this command can change repository state or config.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Commit { .. }
                | Command::CheckoutNew { .. }
                | Command::Checkout { .. }
                | Command::Merge { .. }
                | Command::Rebase { .. }
                | Command::Init
                | Command::Add(_)
                | Command::Branch(BranchAction::Create(_) | BranchAction::Delete(_))
                | Command::Config(ConfigAction::Set { .. })
        )
    }
}

/// Parses one non-blank input line.
pub fn parse(line: &str) -> Result<Command> {
    let tokens = tokenize(line);
    let Some(tool) = tokens.first() else {
        return Err(Error::UnknownTool(String::new()));
    };
    if tool.text != TOOL {
        return Err(Error::UnknownTool(tool.text.clone()));
    }

    let Some(sub) = tokens.get(1) else {
        return Ok(Command::Help { topic: None });
    };
    let args = &tokens[2..];

    match sub.text.as_str() {
        "help" | "--help" | "-h" => {
            return Ok(Command::Help {
                topic: args.first().map(|t| t.text.clone()),
            })
        }
        _ => {}
    }

    let wants_help = args.iter().any(|t| !t.quoted && t.text == "--help")
        || args.first().is_some_and(|t| !t.quoted && t.text == "-h");

    let command = match sub.text.as_str() {
        "commit" => parse_commit(args),
        "checkout" => parse_checkout(args)?,
        "merge" => parse_merge(args),
        "rebase" => Command::Rebase {
            upstream: positionals(args).next().map(str::to_string).unwrap_or_default(),
        },
        "init" => Command::Init,
        "add" => parse_add(args),
        "status" => Command::Status,
        "branch" => parse_branch(args)?,
        "push" => Command::Push(parse_remote(args)),
        "pull" => Command::Pull(parse_remote(args)),
        "fetch" => Command::Fetch,
        "diff" => Command::Diff,
        "config" => Command::Config(parse_config(args)?),
        "log" => Command::Log(LogFormat {
            oneline: has_flag(args, "--oneline"),
            graph: has_flag(args, "--graph"),
        }),
        "show" => Command::Show {
            revision: positionals(args).next().map(str::to_string),
        },
        other => return Err(Error::UnknownSubcommand(other.to_string())),
    };

    if wants_help {
        return Ok(Command::Help {
            topic: Some(command.name().to_string()),
        });
    }

    Ok(command)
}

fn has_flag(args: &[Token], flag: &str) -> bool {
    args.iter().any(|t| t.is_flag() && t.text == flag)
}

fn positionals(args: &[Token]) -> impl Iterator<Item = &str> {
    args.iter().filter(|t| !t.is_flag()).map(|t| t.text.as_str())
}

fn parse_commit(args: &[Token]) -> Command {
    let mut message = None;
    let mut author = None;
    let mut i = 0;

    while i < args.len() {
        let token = &args[i];
        let text = token.text.as_str();

        if token.is_flag() && (text == "-m" || text == "--message") {
            let (value, consumed) = take_message(&args[i + 1..]);
            if value.is_some() {
                message = value;
            }
            i += 1 + consumed;
            continue;
        }

        if token.is_flag() {
            if let Some(value) = text.strip_prefix("--message=") {
                message = Some(value.to_string());
            } else if let Some(value) = text.strip_prefix("--author=") {
                author = Some(AuthorSpec::parse(value));
            } else if text == "--author" {
                if let Some(value) = args.get(i + 1) {
                    author = Some(AuthorSpec::parse(&value.text));
                    i += 1;
                }
            } else if let Some(value) = text.strip_prefix("-m") {
                message = Some(value.to_string());
            }
        }

        i += 1;
    }

    Command::Commit { message, author }
}

/// Reads a `-m` value. A quoted value is one token; an unquoted one runs
/// until the next flag.
fn take_message(rest: &[Token]) -> (Option<String>, usize) {
    let Some(first) = rest.first() else {
        return (None, 0);
    };
    if first.quoted {
        return (Some(first.text.clone()), 1);
    }
    if first.is_flag() {
        return (None, 0);
    }

    let words: Vec<&str> = rest
        .iter()
        .take_while(|t| !t.quoted && !t.is_flag())
        .map(|t| t.text.as_str())
        .collect();
    (Some(words.join(" ")), words.len())
}

fn parse_checkout(args: &[Token]) -> Result<Command> {
    match args.first() {
        Some(first) if first.is_flag() && first.text == "-b" => match args.get(1) {
            Some(name) => Ok(Command::CheckoutNew {
                branch: name.text.clone(),
            }),
            None => Err(Error::MissingBranchName(
                "error: switch `b' requires a value".to_string(),
            )),
        },
        _ => match positionals(args).next() {
            Some(name) => Ok(Command::Checkout {
                branch: name.to_string(),
            }),
            None => Err(Error::MissingBranchName(
                "error: you must specify a branch to checkout".to_string(),
            )),
        },
    }
}

fn parse_merge(args: &[Token]) -> Command {
    let words: Vec<&str> = positionals(args).collect();
    match words.iter().position(|w| *w == "into") {
        Some(at) => Command::Merge {
            source: words[..at].first().map(|s| s.to_string()),
            target: words.get(at + 1).map(|s| s.to_string()),
        },
        None => Command::Merge {
            source: words.first().map(|s| s.to_string()),
            target: None,
        },
    }
}

fn parse_add(args: &[Token]) -> Command {
    match args.first() {
        Some(t) if !t.quoted && matches!(t.text.as_str(), "." | "-A" | "--all") => {
            Command::Add(AddTarget::All)
        }
        _ => Command::Add(AddTarget::Paths(
            args.iter()
                .map(|t| t.text.clone())
                .filter(|t| !t.is_empty())
                .collect(),
        )),
    }
}

fn parse_branch(args: &[Token]) -> Result<Command> {
    let Some(first) = args.first() else {
        return Ok(Command::Branch(BranchAction::List));
    };

    if first.is_flag() {
        return match first.text.as_str() {
            "-d" | "-D" | "--delete" => match args.get(1) {
                Some(name) => Ok(Command::Branch(BranchAction::Delete(name.text.clone()))),
                None => Err(Error::MissingBranchName(
                    "fatal: branch name required".to_string(),
                )),
            },
            _ => Ok(Command::Branch(BranchAction::List)),
        };
    }

    Ok(Command::Branch(BranchAction::Create(first.text.clone())))
}

fn parse_remote(args: &[Token]) -> RemoteArgs {
    let mut words = positionals(args);
    RemoteArgs {
        remote: words.next().map(str::to_string),
        branch: words.next().map(str::to_string),
    }
}

fn parse_config(args: &[Token]) -> Result<ConfigAction> {
    let Some(first) = args.first() else {
        return Err(Error::MissingConfigArgument(CONFIG_USAGE));
    };

    match first.text.as_str() {
        "--list" | "-l" => Ok(ConfigAction::List),
        "--global" | "--local" => {
            if args.len() < 3 {
                return Err(Error::MissingConfigArgument(CONFIG_SCOPED_USAGE));
            }
            Ok(ConfigAction::Set {
                key: args[1].text.clone(),
                value: join_words(&args[2..]),
            })
        }
        key if args.len() >= 2 => Ok(ConfigAction::Set {
            key: key.to_string(),
            value: join_words(&args[1..]),
        }),
        key => Ok(ConfigAction::Get(key.to_string())),
    }
}

fn join_words(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<String> {
        tokenize(line).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_tokenize_quotes() {
        assert_eq!(
            texts(r#"git commit -m "Initial commit" --author="Jane Doe <jane@example.com>""#),
            vec![
                "git",
                "commit",
                "-m",
                "Initial commit",
                "--author=Jane Doe <jane@example.com>"
            ]
        );
        assert_eq!(texts("  git   status  "), vec!["git", "status"]);
        assert_eq!(texts("git commit -m 'it works'"), vec!["git", "commit", "-m", "it works"]);
    }

    #[test]
    fn test_tokenize_unterminated_quote_keeps_rest() {
        assert_eq!(texts(r#"git commit -m "oops"#), vec!["git", "commit", "-m", "oops"]);
    }

    #[test]
    fn test_unknown_tool() {
        assert_eq!(parse("ls -la"), Err(Error::UnknownTool("ls".to_string())));
    }

    #[test]
    fn test_unknown_subcommand() {
        assert_eq!(
            parse("git frobnicate"),
            Err(Error::UnknownSubcommand("frobnicate".to_string()))
        );
    }

    #[test]
    fn test_help_forms() {
        assert_eq!(parse("git"), Ok(Command::Help { topic: None }));
        assert_eq!(parse("git --help"), Ok(Command::Help { topic: None }));
        assert_eq!(
            parse("git help merge"),
            Ok(Command::Help {
                topic: Some("merge".to_string())
            })
        );
        assert_eq!(
            parse("git log --help"),
            Ok(Command::Help {
                topic: Some("log".to_string())
            })
        );
    }

    #[test]
    fn test_commit_message_and_author() {
        let cmd = parse(r#"git commit -m "Fix bug" --author="John Doe""#).unwrap();
        assert_eq!(
            cmd,
            Command::Commit {
                message: Some("Fix bug".to_string()),
                author: Some(AuthorSpec {
                    name: "John Doe".to_string(),
                    email: None
                }),
            }
        );
    }

    #[test]
    fn test_commit_unquoted_message_stops_at_flag() {
        let cmd = parse("git commit -m Fix the bug --author=Jane").unwrap();
        assert_eq!(
            cmd,
            Command::Commit {
                message: Some("Fix the bug".to_string()),
                author: Some(AuthorSpec {
                    name: "Jane".to_string(),
                    email: None
                }),
            }
        );
    }

    #[test]
    fn test_commit_message_forms() {
        let message_of = |line: &str| match parse(line).unwrap() {
            Command::Commit { message, .. } => message,
            other => panic!("unexpected {other:?}"),
        };

        assert_eq!(message_of("git commit --message=Done"), Some("Done".to_string()));
        assert_eq!(message_of("git commit -mDone"), Some("Done".to_string()));
        assert_eq!(message_of("git commit"), None);
        assert_eq!(message_of("git commit -m"), None);
    }

    #[test]
    fn test_author_spec_with_email() {
        let author = AuthorSpec::parse("Jane Smith <jane@example.com>");
        assert_eq!(author.name, "Jane Smith");
        assert_eq!(author.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_checkout_new_branch_takes_precedence() {
        assert_eq!(
            parse("git checkout -b feature"),
            Ok(Command::CheckoutNew {
                branch: "feature".to_string()
            })
        );
        assert_eq!(
            parse("git checkout feature"),
            Ok(Command::Checkout {
                branch: "feature".to_string()
            })
        );
        assert!(matches!(
            parse("git checkout -b"),
            Err(Error::MissingBranchName(_))
        ));
    }

    #[test]
    fn test_merge_into() {
        assert_eq!(
            parse("git merge feature into main"),
            Ok(Command::Merge {
                source: Some("feature".to_string()),
                target: Some("main".to_string()),
            })
        );
        assert_eq!(
            parse("git merge into main"),
            Ok(Command::Merge {
                source: None,
                target: Some("main".to_string()),
            })
        );
        assert_eq!(
            parse("git merge"),
            Ok(Command::Merge {
                source: None,
                target: None,
            })
        );
    }

    #[test]
    fn test_add_forms() {
        assert_eq!(parse("git add ."), Ok(Command::Add(AddTarget::All)));
        assert_eq!(parse("git add -A"), Ok(Command::Add(AddTarget::All)));
        assert_eq!(
            parse("git add a.txt b.txt"),
            Ok(Command::Add(AddTarget::Paths(vec![
                "a.txt".to_string(),
                "b.txt".to_string()
            ])))
        );
        assert_eq!(parse("git add"), Ok(Command::Add(AddTarget::Paths(vec![]))));
    }

    #[test]
    fn test_branch_delete_is_a_flag_not_a_substring() {
        assert_eq!(
            parse("git branch my-dev"),
            Ok(Command::Branch(BranchAction::Create("my-dev".to_string())))
        );
        assert_eq!(
            parse("git branch -d my-dev"),
            Ok(Command::Branch(BranchAction::Delete("my-dev".to_string())))
        );
        assert_eq!(parse("git branch"), Ok(Command::Branch(BranchAction::List)));
    }

    #[test]
    fn test_config_forms() {
        assert_eq!(parse("git config --list"), Ok(Command::Config(ConfigAction::List)));
        assert_eq!(
            parse(r#"git config --global user.name "Global Name""#),
            Ok(Command::Config(ConfigAction::Set {
                key: "user.name".to_string(),
                value: "Global Name".to_string(),
            }))
        );
        assert_eq!(
            parse("git config user.name Ada Lovelace"),
            Ok(Command::Config(ConfigAction::Set {
                key: "user.name".to_string(),
                value: "Ada Lovelace".to_string(),
            }))
        );
        assert_eq!(
            parse("git config user.email"),
            Ok(Command::Config(ConfigAction::Get("user.email".to_string())))
        );
        assert_eq!(
            parse("git config"),
            Err(Error::MissingConfigArgument(CONFIG_USAGE))
        );
        assert_eq!(
            parse("git config --local user.name"),
            Err(Error::MissingConfigArgument(CONFIG_SCOPED_USAGE))
        );
    }

    #[test]
    fn test_log_flags() {
        assert_eq!(
            parse("git log --graph --oneline"),
            Ok(Command::Log(LogFormat {
                oneline: true,
                graph: true
            }))
        );
        assert_eq!(parse("git log"), Ok(Command::Log(LogFormat::default())));
    }

    #[test]
    fn test_remote_args_skip_flags() {
        assert_eq!(
            parse("git push -u origin feature"),
            Ok(Command::Push(RemoteArgs {
                remote: Some("origin".to_string()),
                branch: Some("feature".to_string()),
            }))
        );
    }

    #[test]
    fn test_mutates() {
        assert!(parse("git commit -m x").unwrap().mutates());
        assert!(!parse("git status").unwrap().mutates());
        assert!(!parse("git branch").unwrap().mutates());
    }
}
