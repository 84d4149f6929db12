//! Axum route handlers for the Portfolio API. Every route sits behind the access gate.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::extract::AppQuery;
use crate::gate::extract::AuthenticatedSession;
use crate::models::portfolio::{
    Award, CaseStudy, Certification, Experience, Profile, Skill, SkillCategory,
};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub profile: Profile,
    pub current_role: Option<Experience>,
    pub years_of_experience: u32,
}

#[derive(Debug, Deserialize)]
pub struct SkillsQuery {
    pub category: Option<SkillCategory>,
}

#[derive(Debug, Deserialize)]
pub struct CaseStudiesQuery {
    #[serde(default)]
    pub featured: bool,
}

/// GET /api/v1/portfolio/overview
pub async fn handle_overview(
    State(state): State<AppState>,
    _session: AuthenticatedSession,
) -> Json<OverviewResponse> {
    let portfolio = &state.portfolio;
    Json(OverviewResponse {
        profile: portfolio.profile().clone(),
        current_role: portfolio.current_role().cloned(),
        years_of_experience: portfolio.years_of_experience(Utc::now().date_naive()),
    })
}

/// GET /api/v1/portfolio/profile
pub async fn handle_profile(
    State(state): State<AppState>,
    _session: AuthenticatedSession,
) -> Json<Profile> {
    Json(state.portfolio.profile().clone())
}

/// GET /api/v1/portfolio/experience
pub async fn handle_experience(
    State(state): State<AppState>,
    _session: AuthenticatedSession,
) -> Json<Vec<Experience>> {
    Json(state.portfolio.experience().to_vec())
}

/// GET /api/v1/portfolio/skills?category=Sales
pub async fn handle_skills(
    State(state): State<AppState>,
    _session: AuthenticatedSession,
    AppQuery(params): AppQuery<SkillsQuery>,
) -> Json<Vec<Skill>> {
    let skills = match params.category {
        Some(category) => state
            .portfolio
            .skills_by_category(category)
            .into_iter()
            .cloned()
            .collect(),
        None => state.portfolio.skills().to_vec(),
    };
    Json(skills)
}

/// GET /api/v1/portfolio/awards
pub async fn handle_awards(
    State(state): State<AppState>,
    _session: AuthenticatedSession,
) -> Json<Vec<Award>> {
    Json(state.portfolio.awards().to_vec())
}

/// GET /api/v1/portfolio/certifications
pub async fn handle_certifications(
    State(state): State<AppState>,
    _session: AuthenticatedSession,
) -> Json<Vec<Certification>> {
    Json(state.portfolio.certifications().to_vec())
}

/// GET /api/v1/portfolio/case-studies?featured=true
pub async fn handle_case_studies(
    State(state): State<AppState>,
    _session: AuthenticatedSession,
    AppQuery(params): AppQuery<CaseStudiesQuery>,
) -> Json<Vec<CaseStudy>> {
    Json(
        state
            .portfolio
            .case_studies(params.featured)
            .into_iter()
            .cloned()
            .collect(),
    )
}
