use crate::config::GitConfig;
use crate::console::Console;
use crate::error::{Error, Result};
use crate::handlers::{self, Context};
use crate::ident::{IdSource, RandomIds};
use crate::models::LogEntry;
use crate::parser;
use crate::repository::Repository;
use crate::seed::SeedState;
use crate::settings::Settings;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error};

/// One simulated session: repository, `git config` values and transcript.
///
/// Sessions share nothing; each owns its state outright and processes one
/// command at a time.
pub struct Simulator {
    repo: Repository,
    config: GitConfig,
    console: Console,
    settings: Settings,
    ids: Box<dyn IdSource>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Simulator {
    pub fn new(settings: Settings) -> Self {
        Self {
            repo: Repository::new(&settings.default_branch),
            config: settings.git_config(),
            console: Console::new(),
            settings,
            ids: Box::new(RandomIds),
        }
    }

    /// Starts from a challenge's initial state instead of an empty `main`.
    pub fn seeded(settings: Settings, seed: SeedState) -> Result<Self> {
        let mut sim = Self::new(settings);
        sim.load_seed(seed)?;
        Ok(sim)
    }

    /// Replaces the repository with a seed. Configuration and transcript are
    /// kept. On error the current repository is left as it was.
    pub fn load_seed(&mut self, seed: SeedState) -> Result<()> {
        self.repo = seed.into_repository(&self.config, self.ids.as_mut())?;
        Ok(())
    }

    pub fn with_id_source(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    pub fn config(&self) -> &GitConfig {
        &self.config
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Parses and applies one line without touching the transcript.
    pub fn evaluate(&mut self, line: &str) -> Result<String> {
        let command = parser::parse(line)?;
        debug!(command = command.name(), mutates = command.mutates(), "dispatching");

        let mut ctx = Context {
            repo: &mut self.repo,
            config: &mut self.config,
            ids: self.ids.as_mut(),
            settings: &self.settings,
        };
        handlers::dispatch(&mut ctx, command)
    }

    /// Runs one input line: echoes it, applies it, and records the result.
    /// Returns the entries this line appended. Blank lines are ignored.
    pub fn execute(&mut self, line: &str) -> &[LogEntry] {
        let start = self.console.len();
        let line = line.trim();
        if line.is_empty() {
            return self.console.since(start);
        }

        self.console.push(LogEntry::input(format!("$ {line}")));

        let result = match panic::catch_unwind(AssertUnwindSafe(|| self.evaluate(line))) {
            Ok(result) => result,
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "Unknown error".to_string());
                error!(command = %line, reason = %reason, "handler panicked");
                Err(Error::Internal(reason))
            }
        };

        let entry = match result {
            Ok(output) => LogEntry::output(output),
            Err(err) => {
                debug!(error = %err, "command rejected");
                LogEntry::error(err.to_string())
            }
        };
        self.console.push(entry);

        self.console.since(start)
    }

    /// Runs several lines in order, e.g. a challenge's solution.
    pub fn execute_all<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = self.console.len();
        for line in lines {
            self.execute(line.as_ref());
        }
        self.console.len() - start
    }
}
