use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use clipstore_core::models::{VideoId, VideoStatus};
use clipstore_core::AppError;
use futures::StreamExt;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/v0/videos/{id}/data",
    tag = "videos",
    params(
        ("id" = i64, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Video data stream", content_type = "application/octet-stream"),
        (status = 404, description = "Video not found, or no data uploaded yet", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(video_id = %id, operation = "download_video_data"))]
pub async fn download_video_data(
    State(state): State<Arc<AppState>>,
    Path(id): Path<VideoId>,
) -> Result<Response, HttpAppError> {
    let video = state
        .catalog
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Video not found: {}", id)))?;

    // Distinguishable from an unknown record: the record exists but no blob
    // has been committed yet.
    if video.status == VideoStatus::NotReady {
        return Err(AppError::DataNotReady(format!(
            "No data uploaded yet for video: {}",
            id
        ))
        .into());
    }

    let stream = state.storage.read_stream(id).await?;

    let body_stream = stream
        .map(|result| result.map_err(|e| std::io::Error::other(format!("Storage stream error: {}", e))));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, video.content_type)
        .body(Body::from_stream(body_stream))
        .map_err(|e| HttpAppError(AppError::Internal(format!("Failed to build response: {}", e))))
}
