//! Request extractors that resolve the `x-session-id` header against the session store.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::gate::{Session, SESSION_HEADER};
use crate::state::AppState;

/// Any live session, locked or not.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

/// A live session that has passed the access gate.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession(pub Session);

fn session_id(parts: &Parts) -> Result<Uuid, AppError> {
    parts
        .headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v.trim()).ok())
        .ok_or(AppError::Unauthorized)
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = session_id(parts)?;
        let state = AppState::from_ref(state);
        state
            .sessions
            .touch(id)
            .await
            .map(CurrentSession)
            .ok_or(AppError::Unauthorized)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentSession(session) = CurrentSession::from_request_parts(parts, state).await?;
        if !session.authenticated {
            return Err(AppError::Forbidden);
        }
        Ok(AuthenticatedSession(session))
    }
}
