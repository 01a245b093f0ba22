//! # API Module
//!
//! HTTP handlers of the local relay server. Two audiences call these
//! endpoints: the browser (pages, player script, token, device registration,
//! search) and the command client (play, pause, resume).
//!
//! ## Endpoints
//!
//! ### Pages
//!
//! - [`home`] - login page until a token is held, player page afterwards
//! - [`player_script`] - the Web Playback SDK integration script
//!
//! ### Authentication
//!
//! - [`login`] - redirects to Spotify's authorize endpoint
//! - [`callback`] - exchanges the authorization code and stores the token
//! - [`token`] - hands the stored token to the browser player
//!
//! ### Playback
//!
//! - [`register_device`] - stores the browser player's device id
//! - [`play`], [`pause`], [`resume`] - forwarded to Spotify's player API
//!
//! ### Search
//!
//! - [`search_albums`], [`search_artists`] - flattened Spotify search results
//!
//! ### Monitoring
//!
//! - [`health`] - status and version
//!
//! ## State
//!
//! Handlers receive an [`AppState`] through an `Extension` layer. It carries
//! the [`SessionStore`] and the [`SpotifyClient`]; neither holds request
//! specific data, so cloning per request is cheap.

mod callback;
mod health;
mod home;
mod player;
mod search;

pub use callback::{callback, login};
pub use health::health;
pub use home::{home, player_script, token};
pub use player::{pause, play, register_device, resume};
pub use search::{search_albums, search_artists};

use crate::{session::SessionStore, spotify::SpotifyClient};

#[derive(Debug, Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub spotify: SpotifyClient,
}
