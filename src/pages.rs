//! Static content served by the relay server.
//!
//! The pages and the player script are compiled into the binary so the relay
//! has no runtime dependency on a static files directory.

pub const LOGIN_PAGE: &str = include_str!("../assets/login.html");

/// Player page. Loads the Web Playback SDK and then [`PLAYER_SCRIPT`].
pub const PLAYER_PAGE: &str = include_str!("../assets/player.html");

/// Browser player script: token retrieval, device registration, controls.
pub const PLAYER_SCRIPT: &str = include_str!("../assets/player.js");
