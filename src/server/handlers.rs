use super::types::ErrorResponse;
use crate::{
    Error,
    analysis::{ColorMood, ImageSubmission, MbtiAnalysis, QuizSubmission, SpiritAnimalAnalysis},
    pipeline::Analyzer,
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn mbti_analysis(
    State(state): State<AppState>,
    payload: Result<Json<QuizSubmission>, JsonRejection>,
) -> Result<Json<MbtiAnalysis>, ApiError> {
    let Json(submission) = payload.map_err(|rejection| {
        warn!("Rejected MBTI request body: {}", rejection.body_text());
        bad_request("Invalid request")
    })?;

    info!(
        "Received MBTI analysis request with {} answers",
        submission.answers.len()
    );

    state
        .analyzer
        .analyze_personality(submission)
        .await
        .map(Json)
        .map_err(|e| error_response(e, Some("Failed to analyze personality")))
}

pub async fn spirit_animal(
    State(state): State<AppState>,
    payload: Result<Json<ImageSubmission>, JsonRejection>,
) -> Result<Json<SpiritAnimalAnalysis>, ApiError> {
    let Json(submission) = payload.map_err(reject_image_body)?;

    info!("Received spirit animal request");

    state
        .analyzer
        .find_spirit_animal(submission)
        .await
        .map(Json)
        .map_err(|e| error_response(e, None))
}

pub async fn color_mood(
    State(state): State<AppState>,
    payload: Result<Json<ImageSubmission>, JsonRejection>,
) -> Result<Json<ColorMood>, ApiError> {
    let Json(submission) = payload.map_err(reject_image_body)?;

    info!("Received color mood request");

    state
        .analyzer
        .analyze_colors(submission)
        .await
        .map(Json)
        .map_err(|e| error_response(e, None))
}

fn reject_image_body(rejection: JsonRejection) -> ApiError {
    warn!("Rejected image request body: {}", rejection.body_text());
    bad_request("Missing JSON in request")
}

fn bad_request(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

/// Flattens any pipeline error into the `{error}` envelope. Server-side failures
/// may be prefixed with `context`; client errors are reported as-is.
fn error_response(e: Error, context: Option<&str>) -> ApiError {
    let status = e.status_code();

    let message = match context {
        Some(context) if !e.is_client_error() => format!("{}: {}", context, e),
        _ => e.to_string(),
    };

    if e.is_client_error() {
        warn!("Client error: {}", message);
    } else {
        error!("Analysis failed: {}", message);
    }

    (status, Json(ErrorResponse::new(message)))
}
