pub mod repl;
pub mod run;
pub mod serve;

use anyhow::{Context, Result};
use gitsim_core::{SeedState, SequentialIds, Settings, Simulator};
use std::path::PathBuf;

pub struct SessionOptions {
    pub seed: Option<PathBuf>,
    pub settings: Option<PathBuf>,
    pub deterministic: bool,
}

impl SessionOptions {
    pub fn load_settings(&self) -> Result<Settings> {
        match &self.settings {
            Some(path) => Settings::load(path)
                .with_context(|| format!("Failed to load settings from {}", path.display())),
            None => Ok(Settings::default()),
        }
    }

    pub fn load_seed(&self) -> Result<Option<SeedState>> {
        self.seed
            .as_ref()
            .map(|path| {
                SeedState::load(path)
                    .with_context(|| format!("Failed to load seed from {}", path.display()))
            })
            .transpose()
    }

    pub fn build_simulator(&self) -> Result<Simulator> {
        let mut sim = Simulator::new(self.load_settings()?);
        if self.deterministic {
            sim = sim.with_id_source(SequentialIds::new());
        }
        if let Some(seed) = self.load_seed()? {
            sim.load_seed(seed)?;
        }
        Ok(sim)
    }
}
