//! OpenAPI documentation aggregation.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "clipstore",
        description = "Video metadata registration and data streaming service"
    ),
    paths(
        crate::handlers::video_register::register_video,
        crate::handlers::video_get::get_video,
        crate::handlers::video_get::list_videos,
        crate::handlers::video_upload::upload_video_data,
        crate::handlers::video_download::download_video_data,
    ),
    components(schemas(
        clipstore_core::models::Video,
        clipstore_core::models::NewVideo,
        clipstore_core::models::UploadStatus,
        clipstore_core::models::VideoStatus,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "videos", description = "Video metadata and data endpoints")
    )
)]
pub struct ApiDoc;
