//! Configuration module
//!
//! Environment-driven configuration for the API server and the blob storage
//! layer. Values are read once at startup via [`Config::from_env`].

use std::env;

const SERVER_PORT: u16 = 8080;
const MAX_VIDEO_SIZE_MB: usize = 500;
const STORAGE_ROOT: &str = "./data";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    server_port: u16,
    environment: String,
    cors_origins: Vec<String>,
    storage_root: String,
    public_base_url: Option<String>,
    max_video_size_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| SERVER_PORT.to_string())
            .parse::<u16>()
            .unwrap_or(SERVER_PORT);

        let storage_root = env::var("STORAGE_ROOT").unwrap_or_else(|_| STORAGE_ROOT.to_string());

        let public_base_url = env::var("PUBLIC_BASE_URL").ok();

        let max_video_size_mb = env::var("MAX_VIDEO_SIZE_MB")
            .unwrap_or_else(|_| MAX_VIDEO_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_VIDEO_SIZE_MB);

        Ok(Config {
            server_port,
            environment,
            cors_origins,
            storage_root,
            public_base_url,
            max_video_size_bytes: max_video_size_mb * 1024 * 1024,
        })
    }

    /// Configuration for tests: isolated storage root, localhost base URL.
    pub fn for_tests(storage_root: &str) -> Self {
        Config {
            server_port: 0,
            environment: "test".to_string(),
            cors_origins: vec!["*".to_string()],
            storage_root: storage_root.to_string(),
            public_base_url: Some("http://localhost:8080".to_string()),
            max_video_size_bytes: MAX_VIDEO_SIZE_MB * 1024 * 1024,
        }
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn storage_root(&self) -> &str {
        &self.storage_root
    }

    pub fn max_video_size_bytes(&self) -> usize {
        self.max_video_size_bytes
    }

    /// Base address used to derive each record's data locator.
    ///
    /// Host/port resolution is the deployment's concern; when unset, the
    /// locator points at the local server.
    pub fn base_url(&self) -> String {
        match &self.public_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.server_port),
        }
    }
}
