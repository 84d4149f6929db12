use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::gate::extract::CurrentSession;
use crate::gate::{Session, Theme};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub authenticated: bool,
    pub theme: Theme,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            session_id: session.id,
            authenticated: session.authenticated,
            theme: session.theme,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UnlockRequest {
    pub passphrase: String,
}

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub theme: Theme,
}

/// POST /api/v1/session
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let session = state.sessions.create().await;
    (StatusCode::CREATED, Json(session.into()))
}

/// GET /api/v1/session
pub async fn handle_get_session(CurrentSession(session): CurrentSession) -> Json<SessionResponse> {
    Json(session.into())
}

/// POST /api/v1/session/unlock
///
/// A wrong passphrase leaves the session locked; the visitor simply retries.
pub async fn handle_unlock(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    AppJson(req): AppJson<UnlockRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    if !state.gate.verify(&req.passphrase) {
        warn!(session_id = %session.id, "Rejected access passphrase");
        return Err(AppError::InvalidPassphrase);
    }

    let session = state
        .sessions
        .update(session.id, |s| s.authenticated = true)
        .await
        .ok_or(AppError::Unauthorized)?;

    info!(session_id = %session.id, "Session unlocked");
    Ok(Json(session.into()))
}

/// PUT /api/v1/session/theme
pub async fn handle_set_theme(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    AppJson(req): AppJson<ThemeRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state
        .sessions
        .update(session.id, |s| s.theme = req.theme)
        .await
        .ok_or(AppError::Unauthorized)?;
    Ok(Json(session.into()))
}

/// POST /api/v1/session/theme/toggle
pub async fn handle_toggle_theme(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state
        .sessions
        .update(session.id, |s| s.theme = s.theme.toggle())
        .await
        .ok_or(AppError::Unauthorized)?;
    Ok(Json(session.into()))
}
