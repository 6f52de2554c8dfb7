use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get, post},
    Router,
};
use gitsim_core::{GitConfig, LogEntry, Repository, SeedState, SequentialIds, Settings, Simulator};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::cors::CorsLayer;
use tracing::{debug, info};
use uuid::Uuid;

type ApiError = (StatusCode, String);

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Simulator>>>,
    pub settings: Arc<Settings>,
    pub default_seed: Option<Arc<SeedState>>,
    pub deterministic: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            settings: Arc::new(settings),
            default_seed: None,
            deterministic: false,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Simulator>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Session store is unavailable".to_string(),
            )
        })
    }

    /// Builds a fresh simulator; an explicit seed wins over the server default.
    pub(crate) fn spawn(&self, seed: Option<SeedState>) -> gitsim_core::Result<Simulator> {
        let mut sim = Simulator::new(Settings::clone(&self.settings));
        if self.deterministic {
            sim = sim.with_id_source(SequentialIds::new());
        }
        match seed.or_else(|| self.default_seed.as_deref().cloned()) {
            Some(seed) => {
                sim.load_seed(seed)?;
                Ok(sim)
            }
            None => Ok(sim),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/sessions", post(create_session))
        .route("/sessions/:id", delete(delete_session))
        .route("/sessions/:id/state", get(get_state))
        .route("/sessions/:id/log", get(get_log))
        .route("/sessions/:id/config", get(get_config))
        .route("/sessions/:id/commands", post(run_command))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[derive(Debug, Default, Deserialize)]
struct CreateSessionRequest {
    seed: Option<SeedState>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionCreated {
    pub id: Uuid,
    pub state: Repository,
}

async fn create_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SessionCreated>, ApiError> {
    let req = if body.iter().all(u8::is_ascii_whitespace) {
        CreateSessionRequest::default()
    } else {
        serde_json::from_slice::<CreateSessionRequest>(&body)
            .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?
    };

    let sim = state
        .spawn(req.seed)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    let id = Uuid::new_v4();
    let created = SessionCreated {
        id,
        state: sim.repository().clone(),
    };
    state.lock()?.insert(id, sim);
    info!(session = %id, "session created");

    Ok(Json(created))
}

fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| (StatusCode::BAD_REQUEST, "Invalid UUID".to_string()))
}

fn not_found(id: &Uuid) -> ApiError {
    (StatusCode::NOT_FOUND, format!("Session not found: {}", id))
}

async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state
        .lock()?
        .remove(&id)
        .map(|_| {
            info!(session = %id, "session closed");
            StatusCode::NO_CONTENT
        })
        .ok_or_else(|| not_found(&id))
}

async fn get_state(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Repository>, ApiError> {
    let id = parse_id(&id)?;
    let sessions = state.lock()?;
    sessions
        .get(&id)
        .map(|sim| Json(sim.repository().clone()))
        .ok_or_else(|| not_found(&id))
}

async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<LogEntry>>, ApiError> {
    let id = parse_id(&id)?;
    let sessions = state.lock()?;
    sessions
        .get(&id)
        .map(|sim| Json(sim.console().entries().to_vec()))
        .ok_or_else(|| not_found(&id))
}

async fn get_config(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GitConfig>, ApiError> {
    let id = parse_id(&id)?;
    let sessions = state.lock()?;
    sessions
        .get(&id)
        .map(|sim| Json(sim.config().clone()))
        .ok_or_else(|| not_found(&id))
}

#[derive(Debug, Deserialize)]
struct CommandRequest {
    command: String,
}

async fn run_command(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CommandRequest>,
) -> Result<Json<Vec<LogEntry>>, ApiError> {
    let id = parse_id(&id)?;
    let mut sessions = state.lock()?;
    let sim = sessions.get_mut(&id).ok_or_else(|| not_found(&id))?;

    debug!(session = %id, command = %req.command, "running command");
    Ok(Json(sim.execute(&req.command).to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use gitsim_core::{LogKind, SeedCommit};
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState {
            deterministic: true,
            ..AppState::new(Settings::default())
        }
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn create(app: &Router, body: Option<serde_json::Value>) -> SessionCreated {
        let (status, bytes) = send(app, "POST", "/sessions", body).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(state());
        let (status, bytes) = send(&app, "GET", "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_session_starts_on_main() {
        let app = create_router(state());
        let created = create(&app, None).await;

        assert_eq!(created.state.current_branch(), "main");
        assert!(created.state.commits().is_empty());
    }

    #[tokio::test]
    async fn test_create_session_with_seed() {
        let app = create_router(state());
        let seed = SeedState {
            branches: vec!["main".to_string(), "feature".to_string()],
            commits: vec![SeedCommit::new("main", "Initial commit")],
            current_branch: Some("feature".to_string()),
            staged: vec![],
        };
        let created = create(&app, Some(serde_json::json!({ "seed": seed }))).await;

        assert_eq!(created.state.current_branch(), "feature");
        assert_eq!(created.state.commits()[0].id, "0000001");
    }

    #[tokio::test]
    async fn test_invalid_seed_is_rejected() {
        let app = create_router(state());
        let body = serde_json::json!({ "seed": { "branches": [] } });
        let (status, _) = send(&app, "POST", "/sessions", Some(body)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_commands_append_to_session_log() {
        let app = create_router(state());
        let id = create(&app, None).await.id;
        let uri = format!("/sessions/{}/commands", id);

        let (_, bytes) = send(&app, "POST", &uri, Some(serde_json::json!({"command": "git add ."}))).await;
        let entries: Vec<LogEntry> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(entries[0], LogEntry::input("$ git add ."));

        let commit = serde_json::json!({"command": "git commit -m \"Initial commit\""});
        let (status, bytes) = send(&app, "POST", &uri, Some(commit)).await;
        assert_eq!(status, StatusCode::OK);
        let entries: Vec<LogEntry> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(entries[1], LogEntry::output("[main 0000001] Initial commit"));

        let (_, bytes) = send(&app, "GET", &format!("/sessions/{}/log", id), None).await;
        let log: Vec<LogEntry> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(log.len(), 4);

        let (_, bytes) = send(&app, "GET", &format!("/sessions/{}/state", id), None).await;
        let repo: Repository = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(repo.commits().len(), 1);
        assert!(repo.staged().is_empty());
    }

    #[tokio::test]
    async fn test_failed_command_is_logged_not_http_error() {
        let app = create_router(state());
        let id = create(&app, None).await.id;
        let uri = format!("/sessions/{}/commands", id);

        let (status, bytes) = send(&app, "POST", &uri, Some(serde_json::json!({"command": "git commit -m x"}))).await;
        assert_eq!(status, StatusCode::OK);
        let entries: Vec<LogEntry> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(entries[1].kind, LogKind::Error);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let app = create_router(state());
        let first = create(&app, None).await.id;
        let second = create(&app, None).await.id;

        let body = serde_json::json!({"command": "git config user.name Ada"});
        send(&app, "POST", &format!("/sessions/{}/commands", first), Some(body)).await;

        let (_, bytes) = send(&app, "GET", &format!("/sessions/{}/config", second), None).await;
        let config: GitConfig = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(config.user_name(), "Git Learner");
    }

    #[tokio::test]
    async fn test_unknown_and_deleted_sessions() {
        let app = create_router(state());
        let id = create(&app, None).await.id;

        let (status, _) = send(&app, "GET", "/sessions/not-a-uuid/state", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "DELETE", &format!("/sessions/{}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "GET", &format!("/sessions/{}/state", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
