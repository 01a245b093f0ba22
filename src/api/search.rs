use axum::{
    Extension, Json,
    extract::{Query, rejection::QueryRejection},
};

use super::AppState;
use crate::{
    error::ApiError,
    types::{AlbumResult, ArtistResult, SearchParams},
    utils, warning,
};

const MISSING_QUERY: &str = "Query parameter 'q' is required.";

pub async fn search_albums(
    Extension(state): Extension<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<AlbumResult>>, ApiError> {
    let (q, limit) = search_input(params)?;
    let token = state.session.token().await;

    match state.spotify.search_albums(&token, &q, limit).await {
        Ok(results) => Ok(Json(results)),
        Err(e) => {
            warning!("Album search error: {}", e);
            Err(ApiError::from_spotify("Spotify search failed", e))
        }
    }
}

pub async fn search_artists(
    Extension(state): Extension<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<ArtistResult>>, ApiError> {
    let (q, limit) = search_input(params)?;
    let token = state.session.token().await;

    match state.spotify.search_artists(&token, &q, limit).await {
        Ok(results) => Ok(Json(results)),
        Err(e) => {
            warning!("Artist search error: {}", e);
            Err(ApiError::from_spotify("Spotify search failed", e))
        }
    }
}

fn search_input(
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<(String, u32), ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let q = utils::required_query(params.q.as_deref())
        .ok_or_else(|| ApiError::BadRequest(MISSING_QUERY.to_string()))?
        .to_string();

    Ok((q, utils::clamp_search_limit(params.limit)))
}
