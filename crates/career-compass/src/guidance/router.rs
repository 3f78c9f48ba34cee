use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::assistant::{AssistantError, ChatMessage};
use super::catalog::CareerId;
use super::profile::Profile;
use super::questionnaire::interest_categories_for;
use super::report::RecommendationReport;
use super::service::{GuidanceService, GuidanceServiceError};
use super::store::ProfileStore;

/// Router builder exposing the questionnaire, recommendations, catalog and assistant.
pub fn guidance_router<S>(service: Arc<GuidanceService<S>>) -> Router
where
    S: ProfileStore + 'static,
{
    Router::new()
        .route("/api/v1/questionnaire", get(questionnaire_handler::<S>))
        .route(
            "/api/v1/questionnaire/interests",
            get(interest_categories_handler),
        )
        .route(
            "/api/v1/profile",
            get(profile_handler::<S>)
                .put(save_profile_handler::<S>)
                .delete(reset_profile_handler::<S>),
        )
        .route(
            "/api/v1/recommendations",
            get(stored_recommendations_handler::<S>).post(recommendations_handler::<S>),
        )
        .route("/api/v1/report", post(report_handler::<S>))
        .route("/api/v1/careers", get(careers_handler::<S>))
        .route("/api/v1/careers/:career_id", get(career_handler::<S>))
        .route("/api/v1/assistant/chat", post(chat_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct InterestQuery {
    #[serde(default)]
    stream: String,
    #[serde(default)]
    show_all: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    #[serde(default)]
    history: Vec<ChatMessage>,
    #[serde(default)]
    profile: Option<Profile>,
}

#[derive(Debug, Serialize)]
struct ReportResponse {
    file_name: String,
    report: RecommendationReport,
    text: String,
}

fn error_response(error: GuidanceServiceError) -> Response {
    let status = match &error {
        GuidanceServiceError::Profile(_)
        | GuidanceServiceError::Assistant(AssistantError::EmptyConversation) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        GuidanceServiceError::CareerNotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn questionnaire_handler<S>(
    State(service): State<Arc<GuidanceService<S>>>,
) -> Response
where
    S: ProfileStore + 'static,
{
    (StatusCode::OK, axum::Json(service.questionnaire())).into_response()
}

pub(crate) async fn interest_categories_handler(Query(query): Query<InterestQuery>) -> Response {
    let categories = interest_categories_for(query.stream.trim(), query.show_all);
    (StatusCode::OK, axum::Json(categories)).into_response()
}

pub(crate) async fn profile_handler<S>(State(service): State<Arc<GuidanceService<S>>>) -> Response
where
    S: ProfileStore + 'static,
{
    match service.saved_profile() {
        Ok(Some(saved)) => {
            let completeness = saved.profile.completeness();
            let payload = json!({
                "profile": saved.profile,
                "saved_at": saved.saved_at,
                "completeness": completeness,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(None) => {
            let payload = json!({
                "error": "no assessment saved",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn save_profile_handler<S>(
    State(service): State<Arc<GuidanceService<S>>>,
    axum::Json(profile): axum::Json<Profile>,
) -> Response
where
    S: ProfileStore + 'static,
{
    match service.save_profile(&profile) {
        Ok(saved) => (StatusCode::OK, axum::Json(saved)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reset_profile_handler<S>(
    State(service): State<Arc<GuidanceService<S>>>,
) -> Response
where
    S: ProfileStore + 'static,
{
    match service.reset_profile() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn stored_recommendations_handler<S>(
    State(service): State<Arc<GuidanceService<S>>>,
) -> Response
where
    S: ProfileStore + 'static,
{
    match service.stored_recommendations() {
        Ok(recommendations) => (StatusCode::OK, axum::Json(recommendations)).into_response(),
        Err(error) => error_response(error),
    }
}

/// Scores an inline profile. Unreadable bodies score as "no profile".
pub(crate) async fn recommendations_handler<S>(
    State(service): State<Arc<GuidanceService<S>>>,
    body: Bytes,
) -> Response
where
    S: ProfileStore + 'static,
{
    let profile = match serde_json::from_slice::<Profile>(&body) {
        Ok(profile) => Some(profile),
        Err(error) => {
            warn!(error = %error, "unreadable profile payload, returning empty recommendations");
            None
        }
    };
    let recommendations = service.recommend(profile.as_ref());
    (StatusCode::OK, axum::Json(recommendations)).into_response()
}

pub(crate) async fn report_handler<S>(
    State(service): State<Arc<GuidanceService<S>>>,
    axum::Json(profile): axum::Json<Profile>,
) -> Response
where
    S: ProfileStore + 'static,
{
    let report = service.report(&profile, Utc::now().date_naive());
    let payload = ReportResponse {
        file_name: report.file_name(),
        text: report.render_text(),
        report,
    };
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn careers_handler<S>(State(service): State<Arc<GuidanceService<S>>>) -> Response
where
    S: ProfileStore + 'static,
{
    (StatusCode::OK, axum::Json(service.catalog().records())).into_response()
}

pub(crate) async fn career_handler<S>(
    State(service): State<Arc<GuidanceService<S>>>,
    Path(career_id): Path<String>,
) -> Response
where
    S: ProfileStore + 'static,
{
    match service.career(&CareerId(career_id)) {
        Ok(career) => (StatusCode::OK, axum::Json(career)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn chat_handler<S>(
    State(service): State<Arc<GuidanceService<S>>>,
    axum::Json(request): axum::Json<ChatRequest>,
) -> Response
where
    S: ProfileStore + 'static,
{
    match service.chat(&request.history, request.profile.as_ref()) {
        Ok(reply) => (StatusCode::OK, axum::Json(reply)).into_response(),
        Err(error) => error_response(error),
    }
}
