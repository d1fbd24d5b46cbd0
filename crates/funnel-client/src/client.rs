//! # API Client
//!
//! Shared HTTP plumbing for the funnel backend. Holds the base URL
//! explicitly; every component borrows this client instead of reading an
//! ambient global.

use crate::config::FunnelConfig;
use funnel_core::{CourseInfo, FunnelError, FunnelResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, instrument};

/// HTTP client for the funnel backend API
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<FunnelConfig>,
    http: Client,
}

impl ApiClient {
    /// Create a client from an explicit configuration
    pub fn new(config: FunnelConfig) -> Self {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config: Arc::new(config),
            http,
        }
    }

    /// Create from `config/funnel.toml` / environment
    pub fn from_env() -> FunnelResult<Self> {
        Ok(Self::new(FunnelConfig::load()?))
    }

    pub fn config(&self) -> &FunnelConfig {
        &self.config
    }

    /// Fetch the promotional content structure for the landing page
    #[instrument(skip(self))]
    pub async fn fetch_course_info(&self) -> FunnelResult<CourseInfo> {
        self.get_json("/course/info").await
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> FunnelResult<T> {
        let response = self
            .http
            .get(self.api_url(path))
            .send()
            .await
            .map_err(|e| FunnelError::Request(e.to_string()))?;

        read_json(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> FunnelResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.api_url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| FunnelError::Request(e.to_string()))?;

        read_json(response).await
    }
}

/// Check the status, read the body, and parse it as JSON.
pub(crate) async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> FunnelResult<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FunnelError::Request(e.to_string()))?;

    if !status.is_success() {
        error!("API error: status={}, body={}", status, body);
        return Err(FunnelError::Request(format!("HTTP {}: {}", status, body)));
    }

    serde_json::from_str(&body)
        .map_err(|e| FunnelError::Serialization(format!("Failed to parse response: {}", e)))
}
