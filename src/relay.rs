use std::fmt;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::types::{AlbumResult, ArtistResult, PlayRequest, ProblemDetails};

/// Failure of a command sent to the relay server.
#[derive(Debug)]
pub enum ClientError {
    /// The relay server could not be reached at all.
    Connect { base_url: String },
    /// The relay server answered with a non-2xx status.
    Status { status: StatusCode, detail: String },
    Other(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Connect { base_url } => write!(
                f,
                "Could not connect to web player. Is it running on {}?",
                base_url
            ),
            ClientError::Status { status, detail } if detail.is_empty() => write!(f, "{}", status),
            ClientError::Status { status, detail } => write!(f, "{} ({})", status, detail),
            ClientError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

/// HTTP client for the local relay server's command endpoints.
#[derive(Debug, Clone)]
pub struct RelayClient {
    base_url: String,
    http: Client,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// `POST /api/play` with `{"uri": uri}`.
    pub async fn play(&self, uri: &str) -> Result<(), ClientError> {
        let body = PlayRequest {
            uri: Some(uri.to_string()),
        };
        let request = self.http.post(self.url("/api/play")).json(&body);
        self.send(request).await.map(|_| ())
    }

    /// `POST /api/pause` without a body.
    pub async fn pause(&self) -> Result<(), ClientError> {
        let request = self.http.post(self.url("/api/pause"));
        self.send(request).await.map(|_| ())
    }

    /// `POST /api/resume` without a body.
    pub async fn resume(&self) -> Result<(), ClientError> {
        let request = self.http.post(self.url("/api/resume"));
        self.send(request).await.map(|_| ())
    }

    pub async fn search_albums(
        &self,
        query: &str,
        limit: Option<i64>,
    ) -> Result<Vec<AlbumResult>, ClientError> {
        self.search("/api/search/albums", query, limit).await
    }

    pub async fn search_artists(
        &self,
        query: &str,
        limit: Option<i64>,
    ) -> Result<Vec<ArtistResult>, ClientError> {
        self.search("/api/search/artists", query, limit).await
    }

    async fn search<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
        limit: Option<i64>,
    ) -> Result<Vec<T>, ClientError> {
        let mut request = self.http.get(self.url(path)).query(&[("q", query)]);
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }

        let response = self.send(request).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| ClientError::Other(e.to_string()))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Relay failures carry problem details; anything else is reported by status only.
        let detail = response
            .json::<ProblemDetails>()
            .await
            .map(|problem| problem.detail)
            .unwrap_or_default();

        Err(ClientError::Status { status, detail })
    }

    fn classify(&self, err: reqwest::Error) -> ClientError {
        if err.is_connect() {
            ClientError::Connect {
                base_url: self.base_url.clone(),
            }
        } else {
            ClientError::Other(err.to_string())
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
