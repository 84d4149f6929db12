pub mod health;

use axum::{
    http::Uri,
    routing::{get, post, put},
    Router,
};

use crate::contact::handlers as contact;
use crate::demos::handlers as demos;
use crate::errors::AppError;
use crate::gate::handlers as gate;
use crate::portfolio::handlers as portfolio;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session + access gate
        .route(
            "/api/v1/session",
            post(gate::handle_create_session).get(gate::handle_get_session),
        )
        .route("/api/v1/session/unlock", post(gate::handle_unlock))
        .route("/api/v1/session/theme", put(gate::handle_set_theme))
        .route(
            "/api/v1/session/theme/toggle",
            post(gate::handle_toggle_theme),
        )
        // Contact form
        .route("/api/contact", post(contact::handle_contact))
        // Portfolio (gated)
        .route("/api/v1/portfolio/overview", get(portfolio::handle_overview))
        .route("/api/v1/portfolio/profile", get(portfolio::handle_profile))
        .route(
            "/api/v1/portfolio/experience",
            get(portfolio::handle_experience),
        )
        .route("/api/v1/portfolio/skills", get(portfolio::handle_skills))
        .route("/api/v1/portfolio/awards", get(portfolio::handle_awards))
        .route(
            "/api/v1/portfolio/certifications",
            get(portfolio::handle_certifications),
        )
        .route(
            "/api/v1/portfolio/case-studies",
            get(portfolio::handle_case_studies),
        )
        // AI demos (gated)
        .route("/api/v1/demos/classify", post(demos::handle_classify))
        .route("/api/v1/demos/recommend", post(demos::handle_recommend))
        .route("/api/v1/demos/industries", get(demos::handle_industries))
        .route(
            "/api/v1/demos/sample-email",
            get(demos::handle_sample_email),
        )
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::build_router;
    use crate::contact::mailer::LogMailer;
    use crate::demos::classifier::MessageClassifier;
    use crate::demos::latency::SimulatedLatency;
    use crate::demos::recommender::QuestionRecommender;
    use crate::gate::{AccessGate, SessionStore, DEFAULT_MAX_SESSIONS, SESSION_HEADER};
    use crate::portfolio::fixtures;
    use crate::state::AppState;

    const PASSPHRASE: &str = "harbor";

    fn test_app() -> Router {
        let state = AppState {
            gate: AccessGate::new(PASSPHRASE),
            sessions: SessionStore::new(chrono::Duration::hours(1), DEFAULT_MAX_SESSIONS),
            portfolio: Arc::new(fixtures::portfolio()),
            mailer: Arc::new(LogMailer),
            classifier: Arc::new(MessageClassifier::default()),
            recommender: Arc::new(QuestionRecommender::default()),
            latency: SimulatedLatency::none(),
        };
        build_router(state)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        session: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        send_raw(app, method, uri, session, body.map(|json| json.to_string())).await
    }

    /// Like `send`, but the body goes out verbatim so tests can post broken JSON.
    async fn send_raw(
        app: &Router,
        method: Method,
        uri: &str,
        session: Option<&str>,
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(id) = session {
            builder = builder.header(SESSION_HEADER, id);
        }
        let request = match body {
            Some(raw) => builder
                .header("content-type", "application/json")
                .body(Body::from(raw))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn new_session(app: &Router) -> String {
        let (status, body) = send(app, Method::POST, "/api/v1/session", None, None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["authenticated"], false);
        body["session_id"].as_str().unwrap().to_string()
    }

    async fn unlocked_session(app: &Router) -> String {
        let id = new_session(app).await;
        let (status, _) = send(
            app,
            Method::POST,
            "/api/v1/session/unlock",
            Some(&id),
            Some(json!({ "passphrase": "HARBOR" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        id
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["active_sessions"], 0);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/api/v1/nothing", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_gated_route_requires_session() {
        let app = test_app();
        let (status, body) =
            send(&app, Method::GET, "/api/v1/portfolio/profile", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_locked_session_is_forbidden() {
        let app = test_app();
        let id = new_session(&app).await;
        let (status, _) =
            send(&app, Method::GET, "/api/v1/demos/industries", Some(&id), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_wrong_passphrase_keeps_session_locked() {
        let app = test_app();
        let id = new_session(&app).await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/session/unlock",
            Some(&id),
            Some(json!({ "passphrase": "nope" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body["error"]["message"],
            "Incorrect password. Please try again."
        );

        let (_, session) = send(&app, Method::GET, "/api/v1/session", Some(&id), None).await;
        assert_eq!(session["authenticated"], false);
    }

    #[tokio::test]
    async fn test_unlock_persists_for_session() {
        let app = test_app();
        let id = unlocked_session(&app).await;
        let (status, session) = send(&app, Method::GET, "/api/v1/session", Some(&id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(session["authenticated"], true);
    }

    #[tokio::test]
    async fn test_theme_toggle_and_set() {
        let app = test_app();
        let id = new_session(&app).await;
        let (_, body) = send(
            &app,
            Method::POST,
            "/api/v1/session/theme/toggle",
            Some(&id),
            None,
        )
        .await;
        assert_eq!(body["theme"], "dark");

        let (_, body) = send(
            &app,
            Method::PUT,
            "/api/v1/session/theme",
            Some(&id),
            Some(json!({ "theme": "light" })),
        )
        .await;
        assert_eq!(body["theme"], "light");
    }

    #[tokio::test]
    async fn test_classify_route() {
        let app = test_app();
        let id = unlocked_session(&app).await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/demos/classify",
            Some(&id),
            Some(json!({ "text": "Hi, this is urgent, we need to discuss the contract renewal ASAP" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["priority"], "High");
        assert_eq!(body["tags"], json!(["renewal", "meeting-request"]));
    }

    #[tokio::test]
    async fn test_classify_rejects_blank_text() {
        let app = test_app();
        let id = unlocked_session(&app).await;
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/demos/classify",
            Some(&id),
            Some(json!({ "text": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_recommend_route_falls_back() {
        let app = test_app();
        let id = unlocked_session(&app).await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/demos/recommend",
            Some(&id),
            Some(json!({ "category": "Retail" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "Retail");
        assert_eq!(body["questions"].as_array().unwrap().len(), 2);
        assert_eq!(body["questions"][0]["category"], "Strategic Priorities");
    }

    #[tokio::test]
    async fn test_industries_route() {
        let app = test_app();
        let id = unlocked_session(&app).await;
        let (_, body) = send(&app, Method::GET, "/api/v1/demos/industries", Some(&id), None).await;
        assert_eq!(body.as_array().unwrap().len(), 7);
        assert_eq!(body[0]["label"], "Financial Services");
        assert_eq!(body[0]["tailored"], true);
        assert_eq!(body[3]["label"], "Manufacturing");
        assert_eq!(body[3]["tailored"], false);
    }

    #[tokio::test]
    async fn test_portfolio_overview() {
        let app = test_app();
        let id = unlocked_session(&app).await;
        let (status, body) = send(
            &app,
            Method::GET,
            "/api/v1/portfolio/overview",
            Some(&id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["name"], "Jordan Avery");
        assert_eq!(body["current_role"]["id"], "current");
    }

    #[tokio::test]
    async fn test_skills_filtered_by_category() {
        let app = test_app();
        let id = unlocked_session(&app).await;
        let (_, body) = send(
            &app,
            Method::GET,
            "/api/v1/portfolio/skills?category=Platforms",
            Some(&id),
            None,
        )
        .await;
        let skills = body.as_array().unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0]["id"], "salesforce");
    }

    #[tokio::test]
    async fn test_featured_case_studies_route() {
        let app = test_app();
        let id = unlocked_session(&app).await;
        let (_, body) = send(
            &app,
            Method::GET,
            "/api/v1/portfolio/case-studies?featured=true",
            Some(&id),
            None,
        )
        .await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_contact_demo_mode() {
        let app = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/contact",
            None,
            Some(json!({ "name": "Dana", "email": "dana@example.com", "message": "Hello" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Message received (demo mode)");
    }

    #[tokio::test]
    async fn test_contact_missing_fields() {
        let app = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/contact",
            None,
            Some(json!({ "name": "Dana", "email": "dana@example.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Missing required fields");
    }

    #[tokio::test]
    async fn test_contact_invalid_email() {
        let app = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/contact",
            None,
            Some(json!({ "name": "Dana", "email": "not-an-email", "message": "Hello" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Invalid email format");
    }

    #[tokio::test]
    async fn test_contact_padded_email_rejected() {
        let app = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/contact",
            None,
            Some(json!({ "name": "Dana", "email": " dana@example.com ", "message": "Hello" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Invalid email format");
    }

    #[tokio::test]
    async fn test_malformed_contact_body_is_json_error() {
        let app = test_app();
        let (status, body) = send_raw(
            &app,
            Method::POST,
            "/api/contact",
            None,
            Some(r#"{"name": "Dana", "email": "#.to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].is_string());
    }

    #[tokio::test]
    async fn test_wrongly_typed_contact_field_is_json_error() {
        let app = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/contact",
            None,
            Some(json!({ "name": 123, "email": "dana@example.com", "message": "Hello" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_classify_without_content_type_is_json_error() {
        let app = test_app();
        let id = unlocked_session(&app).await;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/demos/classify")
            .header(SESSION_HEADER, id.as_str())
            .body(Body::from(r#"{"text":"hello"}"#))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_skill_category_is_json_error() {
        let app = test_app();
        let id = unlocked_session(&app).await;
        let (status, body) = send(
            &app,
            Method::GET,
            "/api/v1/portfolio/skills?category=Marketing",
            Some(&id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
