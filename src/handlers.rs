use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;

use crate::aggregate;
use crate::errors::AppError;
use crate::models::{ParticipantsResponse, ReportResponse, Selection};
use crate::normalize::normalize_rows;
use crate::state::AppState;
use crate::ui::render_index;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.snapshots.ttl()))
}

pub async fn get_participants(
    State(state): State<AppState>,
) -> Result<Json<ParticipantsResponse>, AppError> {
    let rows = state.snapshots.rows().await?;
    let records = normalize_rows(&rows);
    Ok(Json(ParticipantsResponse {
        participants: aggregate::participants(&records),
        row_count: records.len(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct ReportParams {
    participant: Option<String>,
}

pub async fn get_report(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Result<Json<ReportResponse>, AppError> {
    let selection = Selection::from_query(params.participant.as_deref());
    let rows = state.snapshots.rows().await?;
    let records = normalize_rows(&rows);
    Ok(Json(aggregate::report(&records, &selection)))
}
