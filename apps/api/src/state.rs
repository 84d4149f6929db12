use std::sync::Arc;

use crate::contact::mailer::Mailer;
use crate::demos::classifier::MessageClassifier;
use crate::demos::latency::SimulatedLatency;
use crate::demos::recommender::QuestionRecommender;
use crate::gate::{AccessGate, SessionStore};
use crate::portfolio::Portfolio;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Static profile records, loaded once at startup.
    pub portfolio: Arc<Portfolio>,
    pub gate: AccessGate,
    pub sessions: SessionStore,
    /// Pluggable contact delivery. Default: LogMailer (demo mode).
    pub mailer: Arc<dyn Mailer>,
    pub classifier: Arc<MessageClassifier>,
    pub recommender: Arc<QuestionRecommender>,
    /// Cosmetic delay around the demo rule engines.
    pub latency: SimulatedLatency,
}
