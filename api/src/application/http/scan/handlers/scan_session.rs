use axum::extract::{Path, State};
use labelguard_core::domain::{
    ocr::entities::{OcrProgressSink, drain_recognition_percentages},
    scan::{entities::ScanReport, ports::ScanService},
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScanResponse {
    #[serde(flatten)]
    pub report: ScanReport,
    /// Recognition percentages reported by the local engine, in order.
    /// Empty when the remote provider answered.
    pub ocr_progress: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/{session_id}/scan",
    tag = "scan",
    summary = "Scan the session image",
    description = "Runs OCR with local fallback, extracts ingredients, classifies them and records the scan in history",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = ScanResponse),
        (status = 400, description = "No image attached"),
        (status = 404, description = "Session not found"),
        (status = 502, description = "Both OCR providers failed")
    )
)]
pub async fn scan_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<ScanResponse>, ApiError> {
    let (progress, mut updates) = OcrProgressSink::channel();

    let report = state
        .service
        .scan(session_id, progress)
        .await
        .map_err(ApiError::from)?;

    let ocr_progress = drain_recognition_percentages(&mut updates);
    debug!(?ocr_progress, "scan finished");

    Ok(Response::OK(ScanResponse {
        report,
        ocr_progress,
    }))
}
