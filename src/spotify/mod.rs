//! # Spotify Integration Module
//!
//! Outbound side of the relay server. Everything that talks to Spotify lives
//! here:
//!
//! ```text
//! Relay handlers (api)
//!          ↓
//! SpotifyClient
//!     ├── auth    (authorize URL, authorization-code exchange)
//!     ├── player  (play, pause, resume on the registered device)
//!     └── search  (album and artist search, flattened results)
//!          ↓
//! reqwest → accounts.spotify.com / api.spotify.com
//! ```
//!
//! Every call is issued exactly once. A non-2xx answer becomes
//! [`SpotifyError::Status`] carrying the upstream status and body, so the
//! handlers can relay the status and log the body. No retries, no token
//! refresh.

pub mod auth;
pub mod player;
pub mod search;

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response};

use crate::{config::Config, error::SpotifyError};

/// HTTP client for Spotify's accounts service and Web API.
///
/// Cheap to clone: the underlying connection pool and configuration are shared.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    config: Arc<Config>,
}

impl SpotifyClient {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url.trim_end_matches('/'), path)
    }
}

/// Sends a request and turns any non-2xx answer into [`SpotifyError::Status`].
async fn send(request: RequestBuilder) -> Result<Response, SpotifyError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(SpotifyError::Status { status, body })
    }
}
