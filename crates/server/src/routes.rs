use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub mod students;

pub use students::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: health check plus the student CRUD routes
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let student_routes = Router::new()
        .route("/students", get(students::list_students).post(students::register_student))
        .route(
            "/students/:id",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(student_routes)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
