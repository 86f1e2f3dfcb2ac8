use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use clipstore_core::models::{UploadStatus, VideoId};
use clipstore_core::AppError;
use futures::TryStreamExt;
use std::sync::Arc;
use tokio_util::io::StreamReader;

#[utoipa::path(
    post,
    path = "/api/v0/videos/{id}/data",
    tag = "videos",
    params(
        ("id" = i64, Path, description = "Video ID")
    ),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Video data stored", body = UploadStatus),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 500, description = "Storage failure; the record stays not_ready", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, body), fields(video_id = %id, operation = "upload_video_data"))]
pub async fn upload_video_data(
    State(state): State<Arc<AppState>>,
    Path(id): Path<VideoId>,
    body: Body,
) -> Result<impl IntoResponse, HttpAppError> {
    if state.catalog.get(id).is_none() {
        return Err(AppError::NotFound(format!("Video not found: {}", id)).into());
    }

    // The request body flows into the blob store in bounded chunks; nothing
    // here buffers the whole payload.
    let stream = body.into_data_stream().map_err(std::io::Error::other);
    let reader = StreamReader::new(stream);

    let received_bytes = state.storage.write(id, Box::pin(reader)).await?;

    // A failed write above leaves the record not_ready and any previously
    // committed blob intact; the error is surfaced, not retried.
    let video = state.catalog.mark_ready(id)?;

    tracing::info!(
        video_id = %id,
        size_bytes = received_bytes,
        status = %video.status,
        "Video data stored"
    );

    Ok(Json(UploadStatus {
        status: video.status,
        received_bytes,
    }))
}
