use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/participants", get(handlers::get_participants))
        .route("/api/report", get(handlers::get_report))
        .with_state(state)
}
