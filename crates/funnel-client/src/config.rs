//! # Funnel Configuration
//!
//! Backend base URL, package identifier, and poll tuning. Loaded from
//! `config/funnel.toml` when present, otherwise from environment
//! variables. The base URL lives on the constructed client and is passed
//! by reference to each component; there is no ambient global.

use funnel_core::{FunnelError, FunnelResult};
use serde::Deserialize;
use std::time::Duration;

/// Package identifier sent with every checkout session request
pub const DEFAULT_PACKAGE_ID: &str = "vaga_blindada";

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Client configuration
#[derive(Debug, Clone)]
pub struct FunnelConfig {
    /// Backend host; the API lives under `{backend_url}/api`
    pub backend_url: String,

    /// Package identifier for the course being sold
    pub package_id: String,

    /// Per-request HTTP timeout
    pub request_timeout: Duration,

    /// Pause between successive status queries
    pub poll_interval: Duration,

    /// Status query budget per polling run
    pub poll_max_attempts: u32,
}

/// On-disk shape of `config/funnel.toml`; every field optional
#[derive(Debug, Deserialize)]
struct FunnelConfigFile {
    backend_url: Option<String>,
    package_id: Option<String>,
    request_timeout_secs: Option<u64>,
    poll_interval_ms: Option<u64>,
    poll_max_attempts: Option<u32>,
}

impl FunnelConfig {
    /// Create a config with defaults for everything but the backend URL
    pub fn new(backend_url: impl Into<String>) -> FunnelResult<Self> {
        let config = Self {
            backend_url: normalize_base_url(backend_url.into())?,
            package_id: DEFAULT_PACKAGE_ID.to_string(),
            request_timeout: Duration::from_secs(30),
            poll_interval: Duration::from_millis(2000),
            poll_max_attempts: 5,
        };
        Ok(config)
    }

    /// Load configuration, trying `config/funnel.toml` search paths first
    /// and falling back to the environment.
    pub fn load() -> FunnelResult<Self> {
        let config_paths = [
            "config/funnel.toml",
            "../config/funnel.toml",
            "../../config/funnel.toml",
        ];

        for path in config_paths {
            if let Ok(content) = std::fs::read_to_string(path) {
                let file: FunnelConfigFile = toml::from_str(&content).map_err(|e| {
                    FunnelError::Configuration(format!("Failed to parse {}: {}", path, e))
                })?;
                tracing::info!("Loaded funnel config from {}", path);
                return Self::from_file(file);
            }
        }

        Self::from_env()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized env vars (all optional):
    /// - `BACKEND_URL`
    /// - `FUNNEL_PACKAGE_ID`
    pub fn from_env() -> FunnelResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let backend_url =
            std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        let mut config = Self::new(backend_url)?;

        if let Ok(package_id) = std::env::var("FUNNEL_PACKAGE_ID") {
            if !package_id.is_empty() {
                config.package_id = package_id;
            }
        }

        Ok(config)
    }

    fn from_file(file: FunnelConfigFile) -> FunnelResult<Self> {
        let mut config = Self::new(
            file.backend_url
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
        )?;

        if let Some(package_id) = file.package_id {
            config.package_id = package_id;
        }
        if let Some(secs) = file.request_timeout_secs {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(ms) = file.poll_interval_ms {
            config.poll_interval = Duration::from_millis(ms);
        }
        if let Some(attempts) = file.poll_max_attempts {
            config.poll_max_attempts = attempts;
        }

        Ok(config)
    }

    /// Builder: set the package identifier
    pub fn with_package_id(mut self, package_id: impl Into<String>) -> Self {
        self.package_id = package_id.into();
        self
    }

    /// Builder: set the poll interval
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Builder: set the status query budget
    pub fn with_poll_max_attempts(mut self, attempts: u32) -> Self {
        self.poll_max_attempts = attempts;
        self
    }

    /// Full URL for an API path, e.g. `api_url("/course/info")`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.backend_url, path)
    }
}

fn normalize_base_url(url: String) -> FunnelResult<String> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(FunnelError::Configuration(format!(
            "backend URL must start with http:// or https://: {}",
            url
        )));
    }
    Ok(url.trim_end_matches('/').to_string())
}
