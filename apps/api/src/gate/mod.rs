//! Access gate and per-visitor session state.
//!
//! A visitor creates a session, unlocks it with the site passphrase, and the
//! authenticated flag lives on that session until it idles out. The colour
//! theme preference rides on the same session object.

pub mod extract;
pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// Header carrying the session id on every gated request.
pub const SESSION_HEADER: &str = "x-session-id";

/// Session table size used when `MAX_SESSIONS` is unset.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Compares submitted passphrases against the configured one, ignoring case.
#[derive(Debug, Clone)]
pub struct AccessGate {
    passphrase: String,
}

impl AccessGate {
    pub fn new(passphrase: &str) -> Self {
        Self {
            passphrase: passphrase.to_lowercase(),
        }
    }

    pub fn verify(&self, submitted: &str) -> bool {
        submitted.to_lowercase() == self.passphrase
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub authenticated: bool,
    pub theme: Theme,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

impl Session {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            authenticated: false,
            theme: Theme::default(),
            created_at: now,
            last_seen_at: now,
        }
    }

    fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.last_seen_at > ttl
    }
}

/// In-memory session table shared through `AppState`.
///
/// Holds at most `max_sessions` entries; when full, creating a session evicts
/// the one idle the longest.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    ttl: Duration,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    pub async fn create(&self) -> Session {
        self.create_at(Utc::now()).await
    }

    async fn create_at(&self, now: DateTime<Utc>) -> Session {
        let session = Session::new(now);
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| !s.is_expired(now, self.ttl));
        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions
                .values()
                .min_by_key(|s| s.last_seen_at)
                .map(|s| s.id)
            else {
                break;
            };
            sessions.remove(&oldest);
            debug!(session_id = %oldest, "Session evicted, table full");
        }
        sessions.insert(session.id, session.clone());
        info!(session_id = %session.id, active = sessions.len(), "Session created");
        session
    }

    /// Returns the live session and refreshes its idle timer.
    pub async fn touch(&self, id: Uuid) -> Option<Session> {
        self.touch_at(id, Utc::now()).await
    }

    async fn touch_at(&self, id: Uuid, now: DateTime<Utc>) -> Option<Session> {
        self.update_at(id, now, |_| {}).await
    }

    /// Applies `f` to a live session. Expired sessions are dropped and reported absent.
    pub async fn update<F>(&self, id: Uuid, f: F) -> Option<Session>
    where
        F: FnOnce(&mut Session),
    {
        self.update_at(id, Utc::now(), f).await
    }

    async fn update_at<F>(&self, id: Uuid, now: DateTime<Utc>, f: F) -> Option<Session>
    where
        F: FnOnce(&mut Session),
    {
        let mut sessions = self.sessions.write().await;
        let expired = sessions.get(&id)?.is_expired(now, self.ttl);
        if expired {
            sessions.remove(&id);
            debug!(session_id = %id, "Session expired");
            return None;
        }
        let session = sessions.get_mut(&id)?;
        session.last_seen_at = now;
        f(session);
        Some(session.clone())
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
