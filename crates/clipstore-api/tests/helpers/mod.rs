//! Shared test setup for API integration tests.
//!
//! Each test gets an isolated application: its own catalog and a blob store
//! rooted in a fresh temporary directory.

use std::sync::Arc;

use axum_test::TestServer;
use clipstore_api::setup::routes::setup_routes;
use clipstore_api::state::AppState;
use clipstore_catalog::VideoCatalog;
use clipstore_core::models::Video;
use clipstore_core::Config;
use clipstore_storage::create_blob_store;
use tempfile::TempDir;

pub struct TestApp {
    pub server: TestServer,
    /// Keeps the storage root alive for the duration of the test.
    pub _storage_dir: TempDir,
}

pub async fn setup_test_app() -> TestApp {
    let storage_dir = tempfile::tempdir().expect("create temp storage root");
    let config = Config::for_tests(storage_dir.path().to_str().expect("utf-8 temp path"));

    let storage = create_blob_store(&config).await.expect("create blob store");
    let state = Arc::new(AppState {
        config: config.clone(),
        catalog: Arc::new(VideoCatalog::new()),
        storage,
    });

    let router = setup_routes(&config, state).expect("build router");
    let server = TestServer::new(router).expect("start test server");

    TestApp {
        server,
        _storage_dir: storage_dir,
    }
}

pub async fn register_video(server: &TestServer, title: &str) -> Video {
    let response = server
        .post("/api/v0/videos")
        .json(&serde_json::json!({ "title": title, "duration_secs": 12.5 }))
        .await;
    response.assert_status_ok();
    response.json::<Video>()
}
