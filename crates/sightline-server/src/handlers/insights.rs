//! Insight generation handler

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::{AppError, AppState};
use sightline_core::models::{InsightRequest, InsightResponse};
use sightline_core::{format_chart_data, insights};

/// POST /api/insights, POST /generate-insights - Generate one answer per question
///
/// The body is deserialized through an explicit rejection so schema failures
/// surface as a 422-style JSON error naming the offending field, before any
/// business logic runs.
pub async fn generate_insights(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InsightRequest>, JsonRejection>,
) -> Result<Json<InsightResponse>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::invalid_body(rejection.status(), &rejection.body_text()))?;

    let request_num = state.requests.fetch_add(1, Ordering::Relaxed) + 1;
    info!(
        request = request_num,
        declared_questions = request.number_of_questions,
        questions = request.questions.len(),
        category1 = request.data.category1_data.len(),
        category2 = request.data.category2_data.len(),
        measures = request.data.measures_data.len(),
        raw_rows = request.data.raw_data.len(),
        "Generating insights"
    );

    let data_block = format_chart_data(&request.data);

    let generated =
        insights::generate_insights(state.provider.as_ref(), &data_block, &request.questions)
            .await;

    info!(
        request = request_num,
        insights = generated.len(),
        "Request completed"
    );

    Ok(Json(InsightResponse {
        insights: generated,
    }))
}
