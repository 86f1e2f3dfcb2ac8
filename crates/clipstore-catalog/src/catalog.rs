use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use clipstore_core::models::{NewVideo, Video, VideoId, VideoStatus};
use thiserror::Error;

use crate::locator;

const DEFAULT_CONTENT_TYPE: &str = "video/mp4";

/// Catalog operation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Video not found: {0}")]
    NotFound(VideoId),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// In-memory index of registered videos.
///
/// A single lock guards both the record map and the id space: allocation and
/// insertion happen as one atomic step, so two concurrent `create` calls can
/// never return the same id and an existing record is never overwritten.
///
/// Process-scoped, not global: constructed once at startup and shared by
/// reference, so tests can build isolated instances.
pub struct VideoCatalog {
    videos: RwLock<HashMap<VideoId, Video>>,
}

impl VideoCatalog {
    pub fn new() -> Self {
        VideoCatalog {
            videos: RwLock::new(HashMap::new()),
        }
    }

    /// Register a video: mint a fresh id, derive the data locator, insert the
    /// record with status `not_ready`, and return the stored record.
    pub fn create(&self, new: NewVideo, base_url: &str) -> Video {
        let mut videos = self
            .videos
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let id = loop {
            let candidate = random_id();
            if !videos.contains_key(&candidate) {
                break candidate;
            }
        };

        let video = Video {
            id,
            title: new.title,
            duration_secs: new.duration_secs,
            content_type: new
                .content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            data_url: locator::data_url(base_url, id),
            status: VideoStatus::NotReady,
            created_at: Utc::now(),
        };

        videos.insert(id, video.clone());
        tracing::debug!(video_id = %id, title = %video.title, "Video registered in catalog");

        video
    }

    /// Point-in-time snapshot of all known records.
    pub fn list(&self) -> Vec<Video> {
        self.videos
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    /// Look up a record by id.
    pub fn get(&self, id: VideoId) -> Option<Video> {
        self.videos
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    /// Transition a record to `ready` and return the updated record.
    ///
    /// Unknown ids are reported as `NotFound` so callers can detect
    /// programming errors; re-marking an already-ready record is benign.
    pub fn mark_ready(&self, id: VideoId) -> CatalogResult<Video> {
        let mut videos = self
            .videos
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let video = videos.get_mut(&id).ok_or(CatalogError::NotFound(id))?;
        video.status = VideoStatus::Ready;
        Ok(video.clone())
    }

    pub fn len(&self) -> usize {
        self.videos
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for VideoCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw a fresh candidate id from the OS-seeded CSPRNG.
///
/// The top bit is cleared so ids are non-negative; the remaining 63 bits make
/// collisions vanishingly rare and ids unguessable.
fn random_id() -> VideoId {
    VideoId::from_raw((rand::random::<u64>() >> 1) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    const BASE_URL: &str = "http://localhost:8080";

    fn new_video(title: &str) -> NewVideo {
        NewVideo {
            title: title.to_string(),
            duration_secs: Some(30.0),
            content_type: None,
        }
    }

    #[test]
    fn test_create_assigns_unique_nonnegative_ids() {
        let catalog = VideoCatalog::new();
        let mut seen = HashSet::new();

        for i in 0..1000 {
            let video = catalog.create(new_video(&format!("clip-{}", i)), BASE_URL);
            assert!(video.id.as_i64() >= 0);
            assert!(seen.insert(video.id), "duplicate id: {}", video.id);
        }

        assert_eq!(catalog.len(), 1000);
    }

    #[test]
    fn test_concurrent_creates_never_collide() {
        let catalog = Arc::new(VideoCatalog::new());
        let mut handles = Vec::new();

        for t in 0..8 {
            let catalog = catalog.clone();
            handles.push(std::thread::spawn(move || {
                (0..100)
                    .map(|i| {
                        catalog
                            .create(new_video(&format!("clip-{}-{}", t, i)), BASE_URL)
                            .id
                    })
                    .collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().expect("create thread panicked") {
                assert!(seen.insert(id), "duplicate id: {}", id);
            }
        }
        assert_eq!(seen.len(), 800);
        assert_eq!(catalog.len(), 800);
    }

    #[test]
    fn test_create_populates_locator_and_status() {
        let catalog = VideoCatalog::new();
        let video = catalog.create(new_video("holiday"), BASE_URL);

        assert_eq!(video.status, VideoStatus::NotReady);
        assert_eq!(video.content_type, "video/mp4");
        assert_eq!(
            video.data_url,
            format!("{}/api/v0/videos/{}/data", BASE_URL, video.id)
        );
    }

    #[test]
    fn test_create_keeps_client_content_type() {
        let catalog = VideoCatalog::new();
        let video = catalog.create(
            NewVideo {
                title: "clip".to_string(),
                duration_secs: None,
                content_type: Some("video/webm".to_string()),
            },
            BASE_URL,
        );
        assert_eq!(video.content_type, "video/webm");
    }

    #[test]
    fn test_get_unknown_id_returns_none() {
        let catalog = VideoCatalog::new();
        assert!(catalog.get(VideoId::from_raw(12345)).is_none());
    }

    #[test]
    fn test_mark_ready_transitions_status() {
        let catalog = VideoCatalog::new();
        let video = catalog.create(new_video("clip"), BASE_URL);

        let updated = catalog.mark_ready(video.id).unwrap();
        assert_eq!(updated.status, VideoStatus::Ready);
        assert_eq!(catalog.get(video.id).unwrap().status, VideoStatus::Ready);

        // Re-marking is benign
        let again = catalog.mark_ready(video.id).unwrap();
        assert_eq!(again.status, VideoStatus::Ready);
    }

    #[test]
    fn test_mark_ready_unknown_id_fails() {
        let catalog = VideoCatalog::new();
        let result = catalog.mark_ready(VideoId::from_raw(999));
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let catalog = VideoCatalog::new();
        catalog.create(new_video("a"), BASE_URL);
        catalog.create(new_video("b"), BASE_URL);

        let snapshot = catalog.list();
        assert_eq!(snapshot.len(), 2);

        catalog.create(new_video("c"), BASE_URL);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(catalog.list().len(), 3);
    }
}
