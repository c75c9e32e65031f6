//! HTTP client for the dashboard API
//!
//! Thin wrapper over reqwest. Application-level failures
//! (`status: error` bodies) are folded into [`ApiError`] so callers
//! see a single error channel per fetch.

use super::types::{ApiStatus, ProgramsResponse, StatsResponse};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by the dashboard API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, decode)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Non-2xx HTTP response
    #[error("server returned HTTP {0}")]
    Status(reqwest::StatusCode),
    /// Server answered with status=error; carries the server message
    #[error("{0}")]
    Api(String),
}

/// Client for the /api/stats and /api/programs endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch aggregate statistics
    pub async fn get_stats(&self) -> Result<StatsResponse, ApiError> {
        let url = format!("{}/api/stats", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let body: StatsResponse = response.json().await?;
        match body.status {
            ApiStatus::Success => Ok(body),
            ApiStatus::Error => Err(ApiError::Api(
                body.message
                    .unwrap_or_else(|| "unknown server error".to_string()),
            )),
        }
    }

    /// Fetch the program list
    pub async fn get_programs(&self) -> Result<ProgramsResponse, ApiError> {
        let url = format!("{}/api/programs", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let body: ProgramsResponse = response.json().await?;
        match body.status {
            ApiStatus::Success => Ok(body),
            ApiStatus::Error => Err(ApiError::Api(
                body.message
                    .unwrap_or_else(|| "unknown server error".to_string()),
            )),
        }
    }
}
