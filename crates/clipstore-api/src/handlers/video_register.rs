use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use clipstore_core::models::{NewVideo, Video};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/v0/videos",
    tag = "videos",
    request_body = NewVideo,
    responses(
        (status = 200, description = "Video registered; record carries the assigned id and data locator", body = Video),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, new), fields(operation = "register_video"))]
pub async fn register_video(
    State(state): State<Arc<AppState>>,
    ValidatedJson(new): ValidatedJson<NewVideo>,
) -> Result<impl IntoResponse, HttpAppError> {
    let video = state.catalog.create(new, &state.config.base_url());

    tracing::info!(video_id = %video.id, title = %video.title, "Video registered");

    Ok(Json(video))
}
