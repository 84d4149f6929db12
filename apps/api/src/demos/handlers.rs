//! Axum route handlers for the AI demo widgets. Gated like the rest of the site content.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::demos::classifier::ClassificationResult;
use crate::demos::recommender::{RecommendationEntry, INDUSTRIES};
use crate::demos::SAMPLE_EMAIL;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::gate::extract::AuthenticatedSession;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub category: String,
    pub questions: Vec<RecommendationEntry>,
}

/// One selector option; `tailored` is false when the generic questions apply.
#[derive(Debug, Serialize)]
pub struct IndustryOption {
    pub label: &'static str,
    pub tailored: bool,
}

#[derive(Debug, Serialize)]
pub struct SampleEmailResponse {
    pub text: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/demos/classify
pub async fn handle_classify(
    State(state): State<AppState>,
    AuthenticatedSession(session): AuthenticatedSession,
    AppJson(request): AppJson<ClassifyRequest>,
) -> Result<Json<ClassificationResult>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let classifier = state.classifier.clone();
    let result = state
        .latency
        .run(move || classifier.classify(&request.text))
        .await;

    debug!(
        session_id = %session.id,
        priority = ?result.priority,
        tags = ?result.tags,
        "Message classified"
    );
    Ok(Json(result))
}

/// POST /api/v1/demos/recommend
pub async fn handle_recommend(
    State(state): State<AppState>,
    AuthenticatedSession(session): AuthenticatedSession,
    AppJson(request): AppJson<RecommendRequest>,
) -> Json<RecommendResponse> {
    let recommender = state.recommender.clone();
    let category = request.category;
    let questions = state
        .latency
        .run(|| recommender.recommend(&category).to_vec())
        .await;

    debug!(session_id = %session.id, category = %category, "Questions recommended");

    Json(RecommendResponse {
        category,
        questions,
    })
}

/// GET /api/v1/demos/industries
pub async fn handle_industries(
    State(state): State<AppState>,
    _session: AuthenticatedSession,
) -> Json<Vec<IndustryOption>> {
    Json(
        INDUSTRIES
            .iter()
            .map(|&label| IndustryOption {
                label,
                tailored: state.recommender.is_configured(label),
            })
            .collect(),
    )
}

/// GET /api/v1/demos/sample-email
pub async fn handle_sample_email(_session: AuthenticatedSession) -> Json<SampleEmailResponse> {
    Json(SampleEmailResponse { text: SAMPLE_EMAIL })
}
