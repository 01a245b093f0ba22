use std::fmt;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::types::ProblemDetails;

/// Failure of a call to Spotify's accounts service or Web API.
#[derive(Debug)]
pub enum SpotifyError {
    /// Transport failure: connection refused, TLS, timeout.
    Http(reqwest::Error),
    /// Spotify answered with a non-2xx status.
    Status { status: StatusCode, body: String },
    /// The response did not have the expected JSON shape.
    Decode(String),
}

impl fmt::Display for SpotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpotifyError::Http(e) => write!(f, "request to Spotify failed: {}", e),
            SpotifyError::Status { status, body } => write!(f, "{} - {}", status, body),
            SpotifyError::Decode(msg) => write!(f, "unexpected response from Spotify: {}", msg),
        }
    }
}

impl std::error::Error for SpotifyError {}

impl From<reqwest::Error> for SpotifyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SpotifyError::Decode(err.to_string())
        } else {
            SpotifyError::Http(err)
        }
    }
}

impl SpotifyError {
    /// Upstream status code, if Spotify answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SpotifyError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error returned by the relay server's JSON API.
///
/// Rendered as an `application/problem+json` body whose `status` matches the
/// HTTP status of the response.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Upstream { status: StatusCode, detail: String },
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Maps a failed Spotify call, prefixing the detail with what was attempted
    /// (`"Failed to play"`, `"Spotify search failed"`).
    pub fn from_spotify(context: &str, err: SpotifyError) -> Self {
        match err {
            SpotifyError::Status { status, .. } => ApiError::Upstream {
                status,
                detail: format!("{}: {}", context, status),
            },
            other => ApiError::Internal(format!("{}: {}", context, other)),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "{}", msg),
            ApiError::Upstream { detail, .. } => write!(f, "{}", detail),
            ApiError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let problem = ProblemDetails {
            kind: "about:blank".to_string(),
            title: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
            status: status.as_u16(),
            detail: self.to_string(),
        };

        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(problem),
        )
            .into_response()
    }
}
