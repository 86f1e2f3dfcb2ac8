//! Shared locator construction for registered videos.
//!
//! Locator format: `{base}/api/v0/videos/{id}/data`. Computed once at
//! registration time and stored on the record; must match the data routes
//! exposed by the API layer.

use clipstore_core::models::VideoId;

/// Build the data locator for the given base address and video id.
pub fn data_url(base_url: &str, id: VideoId) -> String {
    format!(
        "{}/api/v0/videos/{}/data",
        base_url.trim_end_matches('/'),
        id
    )
}
