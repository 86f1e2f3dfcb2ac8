use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

/// Identifier minted for each registered video.
///
/// A non-negative 63-bit random value, also used as the storage key for the
/// video's blob. Allocation lives in the catalog, which redraws on collision
/// under its write lock; ids are never client-supplied.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i64)]
pub struct VideoId(i64);

impl VideoId {
    pub fn from_raw(raw: i64) -> Self {
        VideoId(raw)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for VideoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Whether a video's binary data has been stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VideoStatus {
    NotReady,
    Ready,
}

impl Display for VideoStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            VideoStatus::NotReady => write!(f, "not_ready"),
            VideoStatus::Ready => write!(f, "ready"),
        }
    }
}

/// A registered video record.
///
/// `data_url` is computed once at registration time and tells clients where
/// to upload and download the binary data for this record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub duration_secs: Option<f64>,
    pub content_type: String,
    pub data_url: String,
    pub status: VideoStatus,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied body for registering a video.
///
/// Id, locator, and status are assigned by the server and are not part of
/// this type.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewVideo {
    pub title: String,
    #[serde(default)]
    pub duration_secs: Option<f64>,
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Result of a successful data upload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadStatus {
    pub status: VideoStatus,
    pub received_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_id_serializes_as_number() {
        let id = VideoId::from_raw(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");

        let parsed: VideoId = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_status_serde_names() {
        assert_eq!(
            serde_json::to_string(&VideoStatus::NotReady).unwrap(),
            "\"not_ready\""
        );
        assert_eq!(
            serde_json::to_string(&VideoStatus::Ready).unwrap(),
            "\"ready\""
        );
    }

    #[test]
    fn test_status_display_matches_serde() {
        assert_eq!(VideoStatus::NotReady.to_string(), "not_ready");
        assert_eq!(VideoStatus::Ready.to_string(), "ready");
    }

    #[test]
    fn test_new_video_optional_fields_default() {
        let new: NewVideo = serde_json::from_str(r#"{"title":"clip"}"#).unwrap();
        assert_eq!(new.title, "clip");
        assert_eq!(new.duration_secs, None);
        assert_eq!(new.content_type, None);
    }

    #[test]
    fn test_video_round_trips_through_json() {
        let video = Video {
            id: VideoId::from_raw(7),
            title: "holiday.mp4".to_string(),
            duration_secs: Some(12.5),
            content_type: "video/mp4".to_string(),
            data_url: "http://localhost:8080/api/v0/videos/7/data".to_string(),
            status: VideoStatus::NotReady,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&video).unwrap();
        let back: Video = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, video.id);
        assert_eq!(back.status, VideoStatus::NotReady);
        assert_eq!(back.data_url, video.data_url);
    }
}
