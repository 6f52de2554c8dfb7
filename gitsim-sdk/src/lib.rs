//! # gitsim-sdk
//!
//! Blocking client for a running `gitsim serve` instance.
//!
//! ## Example
//!
//! ```no_run
//! use gitsim_sdk::SimClient;
//!
//! let client = SimClient::new("http://localhost:3030");
//! let session = client.create_session().unwrap();
//!
//! session.run("git add .").unwrap();
//! let entries = session.run(r#"git commit -m "Initial commit""#).unwrap();
//! println!("{}", entries[1].message);
//!
//! session.close().unwrap();
//! ```

use anyhow::Result;
use gitsim_core::{GitConfig, LogEntry, Repository, SeedState};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone)]
pub struct SimClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct CreateSessionRequest<'a> {
    seed: Option<&'a SeedState>,
}

#[derive(Deserialize)]
struct SessionCreated {
    id: Uuid,
    state: Repository,
}

#[derive(Serialize)]
struct CommandRequest<'a> {
    command: &'a str,
}

impl SimClient {
    /// Create a new client
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the gitsim server (e.g., "http://localhost:3030")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Start a session on an empty repository
    pub fn create_session(&self) -> Result<Session> {
        self.open(None)
    }

    /// Start a session from a challenge's initial state
    pub fn create_seeded_session(&self, seed: &SeedState) -> Result<Session> {
        self.open(Some(seed))
    }

    fn open(&self, seed: Option<&SeedState>) -> Result<Session> {
        let created: SessionCreated = self
            .client
            .post(format!("{}/sessions", self.base_url))
            .json(&CreateSessionRequest { seed })
            .send()?
            .error_for_status()?
            .json()?;

        Ok(Session {
            id: created.id,
            initial_state: created.state,
            client: self.clone(),
        })
    }

    /// Check server health
    pub fn health_check(&self) -> Result<bool> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()?;

        Ok(response.status().is_success())
    }
}

/// Handle to one server-side simulator session.
pub struct Session {
    id: Uuid,
    initial_state: Repository,
    client: SimClient,
}

impl Session {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Repository state as it was when the session was created.
    pub fn initial_state(&self) -> &Repository {
        &self.initial_state
    }

    fn url(&self, path: &str) -> String {
        format!("{}/sessions/{}{}", self.client.base_url, self.id, path)
    }

    /// Run one command line; returns the log entries it produced.
    pub fn run(&self, command: &str) -> Result<Vec<LogEntry>> {
        let entries = self
            .client
            .client
            .post(self.url("/commands"))
            .json(&CommandRequest { command })
            .send()?
            .error_for_status()?
            .json()?;

        Ok(entries)
    }

    /// Run several lines in order and collect every entry produced.
    pub fn run_all<I, S>(&self, commands: I) -> Result<Vec<LogEntry>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        for command in commands {
            entries.extend(self.run(command.as_ref())?);
        }
        Ok(entries)
    }

    /// Current repository state
    pub fn state(&self) -> Result<Repository> {
        self.get("/state")
    }

    /// Full transcript of the session
    pub fn log(&self) -> Result<Vec<LogEntry>> {
        self.get("/log")
    }

    /// Current `git config` values
    pub fn config(&self) -> Result<GitConfig> {
        self.get("/config")
    }

    fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self
            .client
            .client
            .get(self.url(path))
            .send()?
            .error_for_status()?
            .json()?;

        Ok(value)
    }

    /// End the session on the server
    pub fn close(self) -> Result<()> {
        self.client
            .client
            .delete(self.url(""))
            .send()?
            .error_for_status()?;

        Ok(())
    }
}
