use axum::{Extension, Json, extract::rejection::JsonRejection, http::StatusCode};

use super::AppState;
use crate::{
    error::ApiError,
    info, success,
    types::{DeviceRequest, PlayRequest, PlaybackStatus, StatusBody},
    warning,
};

/// Stores the device id reported by the browser player. Last write wins;
/// a missing or null `deviceId` clears it.
pub async fn register_device(
    Extension(state): Extension<AppState>,
    payload: Result<Json<DeviceRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let device_id = request.device_id.unwrap_or_default();

    info!("Device registered: {}", device_id);
    state.session.set_device_id(device_id).await;
    Ok(StatusCode::OK)
}

/// Starts playback of the `uri` in the body as `context_uri` on the
/// registered device.
pub async fn play(
    Extension(state): Extension<AppState>,
    payload: Result<Json<PlayRequest>, JsonRejection>,
) -> Result<Json<StatusBody>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let Some(uri) = request.uri.filter(|uri| !uri.trim().is_empty()) else {
        return Err(ApiError::BadRequest("Body field 'uri' is required.".to_string()));
    };

    let session = state.session.snapshot().await;
    match state
        .spotify
        .play(&session.access_token, &session.device_id, &uri)
        .await
    {
        Ok(()) => {
            success!("Playing: {}", uri);
            Ok(Json(StatusBody {
                status: PlaybackStatus::Playing,
            }))
        }
        Err(e) => {
            warning!("Play error: {}", e);
            Err(ApiError::from_spotify("Failed to play", e))
        }
    }
}

pub async fn pause(Extension(state): Extension<AppState>) -> Result<Json<StatusBody>, ApiError> {
    let session = state.session.snapshot().await;
    match state
        .spotify
        .pause(&session.access_token, &session.device_id)
        .await
    {
        Ok(()) => {
            success!("Paused");
            Ok(Json(StatusBody {
                status: PlaybackStatus::Paused,
            }))
        }
        Err(e) => {
            warning!("Pause error: {}", e);
            Err(ApiError::from_spotify("Failed to pause", e))
        }
    }
}

pub async fn resume(Extension(state): Extension<AppState>) -> Result<Json<StatusBody>, ApiError> {
    let session = state.session.snapshot().await;
    match state
        .spotify
        .resume(&session.access_token, &session.device_id)
        .await
    {
        Ok(()) => {
            success!("Resumed");
            Ok(Json(StatusBody {
                status: PlaybackStatus::Playing,
            }))
        }
        Err(e) => {
            warning!("Resume error: {}", e);
            Err(ApiError::from_spotify("Failed to resume", e))
        }
    }
}
