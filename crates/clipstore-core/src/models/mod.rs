mod video;

pub use video::{NewVideo, UploadStatus, Video, VideoId, VideoStatus};
