use axum::{
    Extension,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use super::AppState;
use crate::{error::ApiError, success, types::CallbackParams, utils, warning};

/// Sends the browser to Spotify's authorize endpoint with a `302 Found`.
pub async fn login(Extension(state): Extension<AppState>) -> Result<Response, ApiError> {
    let url = state
        .spotify
        .authorize_url()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(found(url.as_str()))
}

/// Completes the authorization-code flow.
///
/// On success the access token replaces whatever the session held and the
/// browser is sent back to `/`, which now serves the player page. Any
/// failure leaves the session untouched and answers with plain text; the
/// user has to start over from `/login`.
pub async fn callback(
    Extension(state): Extension<AppState>,
    Query(params): Query<CallbackParams>,
) -> Response {
    if let Some(error) = params.error {
        warning!("Authorization denied: {}", error);
        return (
            StatusCode::BAD_REQUEST,
            format!("Authorization failed: {}", error),
        )
            .into_response();
    }

    let Some(code) = params.code.filter(|code| !code.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "Missing authorization code.").into_response();
    };

    match state.spotify.exchange_code(&code).await {
        Ok(token) => {
            success!(
                "Obtained access token {}",
                utils::token_preview(&token.access_token)
            );
            state.session.set_token(token.access_token).await;
            found("/")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            let reason = match e.status() {
                Some(status) => status.to_string(),
                None => e.to_string(),
            };
            (
                StatusCode::BAD_GATEWAY,
                format!("Error getting token: {}", reason),
            )
                .into_response()
        }
    }
}

fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
