/// Context played by `consolify play` when no URI is given.
pub const DEFAULT_PLAY_URI: &str = "spotify:playlist:2gAzGXzCz4wVHKlKDR57z7";

pub const DEFAULT_SEARCH_LIMIT: i64 = 10;
pub const MIN_SEARCH_LIMIT: i64 = 1;
pub const MAX_SEARCH_LIMIT: i64 = 20;

/// Clamps the optional `limit` query parameter into `[1, 20]`, defaulting to 10.
pub fn clamp_search_limit(limit: Option<i64>) -> u32 {
    limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .clamp(MIN_SEARCH_LIMIT, MAX_SEARCH_LIMIT) as u32
}

/// URI to send for `play`: the given one, or [`DEFAULT_PLAY_URI`] when absent or blank.
pub fn resolve_play_uri(uri: Option<String>) -> String {
    match uri {
        Some(uri) if !uri.trim().is_empty() => uri,
        _ => DEFAULT_PLAY_URI.to_string(),
    }
}

/// The query as given, or `None` when missing or whitespace-only.
pub fn required_query(q: Option<&str>) -> Option<&str> {
    q.filter(|q| !q.trim().is_empty())
}

/// First characters of a token, for logs.
pub fn token_preview(token: &str) -> String {
    let preview: String = token.chars().take(8).collect();
    format!("{}...", preview)
}
