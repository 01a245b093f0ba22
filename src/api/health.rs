use axum::{Extension, response::Json};
use serde_json::{Value, json};

use super::AppState;

/// Liveness plus where the session stands: logged in, player registered.
pub async fn health(Extension(state): Extension<AppState>) -> Json<Value> {
    let session = state.session.snapshot().await;

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "authenticated": !session.access_token.is_empty(),
        "deviceRegistered": !session.device_id.is_empty()
    }))
}
