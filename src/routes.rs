// src/routes.rs

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::quiz,
    models::{
        question::Question,
        result::{ResultEntry, SubmitRequest, SubmitResponse},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quiz App API",
        description = "API Documentation for Quiz Application"
    ),
    paths(quiz::get_questions, quiz::submit, quiz::get_results),
    components(schemas(Question, SubmitRequest, SubmitResponse, ResultEntry))
)]
pub struct ApiDoc;

/// Assembles the main application router.
///
/// * Mounts the quiz endpoints under /api and Swagger UI under /docs.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (catalog + result store).
pub fn create_router(state: AppState) -> Router {
    // Browser clients are served from arbitrary origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let quiz_routes = Router::new()
        .route("/questions", get(quiz::get_questions))
        .route("/submit", post(quiz::submit))
        .route("/results", get(quiz::get_results));

    Router::new()
        .nest("/api", quiz_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
