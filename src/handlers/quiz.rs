// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    catalog::Catalog,
    config::RESULTS_PAGE_SIZE,
    error::AppError,
    models::{
        question::Question,
        result::{ResultEntry, SubmitRequest, SubmitResponse},
    },
    scorer,
    state::AppState,
    store::ResultStore,
};

/// Returns the full question list, in fixed order.
///
/// The answer field is part of the payload; existing clients depend on
/// it, so it is served as-is rather than hidden behind a DTO.
#[utoipa::path(
    get,
    path = "/api/questions",
    responses(
        (status = 200, description = "List of questions", body = [Question])
    )
)]
pub async fn get_questions(State(catalog): State<Catalog>) -> impl IntoResponse {
    Json(catalog.questions().to_vec())
}

/// Accepts a participant's answers, scores them and records the result.
///
/// * Parses the untyped payload into a typed request at the boundary.
/// * Answers are matched positionally against the catalog.
/// * The row is committed before the response is sent.
#[utoipa::path(
    post,
    path = "/api/submit",
    request_body = SubmitRequest,
    responses(
        (status = 200, description = "Quiz submission result", body = SubmitResponse),
        (status = 400, description = "Missing or malformed answers"),
        (status = 500, description = "Result could not be persisted")
    )
)]
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    // 1. Decode the payload; a mistyped or missing field is a 400, not a crash.
    let req: SubmitRequest = serde_json::from_value(payload)?;

    if let Err(validation_errors) = req.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let answers = req
        .answers
        .ok_or_else(|| AppError::BadRequest("answers is required".to_string()))?;
    let name = req.name.unwrap_or_else(|| "Unknown".to_string());

    // 2. Score against the catalog. A short answer list stops here;
    // nothing is written.
    let score = scorer::score(state.catalog.questions(), &answers)?;

    // 3. Persist the result. On storage failure the client gets a 500;
    // the computed score is never silently dropped into a 200.
    let stored = state
        .store
        .record(&name, score.correct, score.total, score.percentage)
        .await?;

    tracing::info!(
        "Recorded result #{} for '{}': {}/{}",
        stored.id,
        stored.name,
        stored.score,
        stored.total
    );

    Ok(Json(SubmitResponse {
        name: stored.name,
        score: stored.score,
        percentage: stored.percentage,
    }))
}

/// Returns the most recent results, newest first.
#[utoipa::path(
    get,
    path = "/api/results",
    responses(
        (status = 200, description = "Latest quiz results", body = [ResultEntry]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_results(
    State(store): State<Arc<dyn ResultStore>>,
) -> Result<impl IntoResponse, AppError> {
    let results = store.list_recent(RESULTS_PAGE_SIZE).await?;

    let entries: Vec<ResultEntry> = results.into_iter().map(ResultEntry::from).collect();

    Ok(Json(entries))
}
