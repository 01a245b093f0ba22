use axum::{
    Extension, Json,
    http::header,
    response::{Html, IntoResponse},
};

use super::AppState;
use crate::{info, pages, types::TokenBody};

pub async fn home(Extension(state): Extension<AppState>) -> Html<&'static str> {
    let has_token = state.session.has_token().await;
    info!("Home page requested. Has token: {}", has_token);

    if has_token {
        Html(pages::PLAYER_PAGE)
    } else {
        Html(pages::LOGIN_PAGE)
    }
}

pub async fn player_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        pages::PLAYER_SCRIPT,
    )
}

/// Returns the stored access token, empty before login.
pub async fn token(Extension(state): Extension<AppState>) -> Json<TokenBody> {
    Json(TokenBody {
        token: state.session.token().await,
    })
}
