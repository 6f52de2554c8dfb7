use crate::api::{create_router, AppState};
use gitsim_core::{SeedState, Settings};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub struct SimServer {
    state: AppState,
}

impl SimServer {
    pub fn new(settings: Settings, deterministic: bool) -> Self {
        Self {
            state: AppState {
                deterministic,
                ..AppState::new(settings)
            },
        }
    }

    /// Seed used for sessions created without one of their own. It is
    /// checked here so a bad seed stops the server before it listens.
    pub fn with_default_seed(mut self, seed: SeedState) -> gitsim_core::Result<Self> {
        self.state.default_seed = Some(Arc::new(seed));
        self.state.spawn(None)?;
        Ok(self)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn serve(self, addr: SocketAddr) -> anyhow::Result<()> {
        let app = create_router(self.state.clone());

        info!("Server listening on {}", addr);
        info!("Default branch: {}", self.state.settings.default_branch);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
