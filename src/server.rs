use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{io, net::SocketAddr, str::FromStr, sync::Arc};
use tokio::net::TcpListener;

use crate::{
    api::{self, AppState},
    config::Config,
    info,
    session::SessionStore,
    spotify::SpotifyClient,
    warning,
};

/// Builds the relay server's router around the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::home))
        .route("/player.js", get(api::player_script))
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/api/token", get(api::token))
        .route("/api/device", post(api::register_device))
        .route("/api/play", post(api::play))
        .route("/api/pause", post(api::pause))
        .route("/api/resume", post(api::resume))
        .route("/api/search/albums", get(api::search_albums))
        .route("/api/search/artists", get(api::search_artists))
        .layer(Extension(state))
}

/// Fresh state for a relay server: empty session, client for `config`.
pub fn app_state(config: Config) -> AppState {
    AppState {
        session: SessionStore::new(),
        spotify: SpotifyClient::new(Arc::new(config)),
    }
}

/// Serves the relay on an already bound listener until the process ends.
pub async fn serve(listener: TcpListener, state: AppState) -> io::Result<()> {
    axum::serve(listener, router(state)).await
}

/// Binds the configured address and serves the relay.
///
/// With `open_browser` set, the home page is opened in the default browser
/// once the listener is bound.
///
/// # Errors
///
/// Fails if the address does not parse, cannot be bound, or the serve loop
/// stops with an I/O error.
pub async fn run(config: Config, open_browser: bool) -> io::Result<()> {
    let addr = SocketAddr::from_str(&config.server_address)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let listener = TcpListener::bind(&addr).await?;
    let home = format!("http://{}", listener.local_addr()?);
    info!("Relay server listening on {}", home);

    if open_browser && webbrowser::open(&home).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            home
        );
    }

    serve(listener, app_state(config)).await
}
