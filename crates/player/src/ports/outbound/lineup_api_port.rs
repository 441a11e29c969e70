//! Lineup API Port - transport for saving a lineup.
//!
//! The port carries the raw HTTP outcome (status + parsed body). Interpreting
//! the body (error message priority, authoritative data) is the persistence
//! service's job, so every adapter behaves the same.

use async_trait::async_trait;
use thiserror::Error;

use lineup_shared::{SaveLineupRequest, SaveLineupResponse};

/// Transport-level failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// A response that reached us, successful or not.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: SaveLineupResponse,
}

impl ApiResponse {
    pub fn new(status: u16, body: SaveLineupResponse) -> Self {
        Self { status, body }
    }

    /// 2xx status.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait LineupApiPort: Send + Sync {
    /// POST the lineup to `save_url` with the given CSRF token.
    async fn post_lineup(
        &self,
        save_url: &str,
        csrf_token: &str,
        request: &SaveLineupRequest,
    ) -> Result<ApiResponse, ApiError>;
}
