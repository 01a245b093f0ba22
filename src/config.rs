//! Configuration management for Consolify.
//!
//! This module handles loading configuration values from environment
//! variables and an optional `.env` file. The relay server reads its
//! configuration exactly once at startup into a [`Config`] value which is
//! never mutated afterwards.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

/// Address the relay server binds to and the command client talks to.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";

/// Base URL of the relay server as seen by the command client.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8888";

/// Redirect URI registered with the Spotify application.
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";

pub const DEFAULT_SPOTIFY_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Scopes requested on login. `streaming` is what the Web Playback SDK needs,
/// the playback-state scopes cover the relayed player commands.
pub const SPOTIFY_SCOPES: &str = "streaming user-read-email user-read-private user-modify-playback-state user-read-playback-state";

pub const ENV_CLIENT_ID: &str = "spotify_client_id";
pub const ENV_CLIENT_SECRET: &str = "spotify_client_secret";
pub const ENV_SERVER_ADDRESS: &str = "CONSOLIFY_SERVER_ADDRESS";
pub const ENV_SERVER_URL: &str = "CONSOLIFY_SERVER_URL";
pub const ENV_REDIRECT_URI: &str = "CONSOLIFY_REDIRECT_URI";
pub const ENV_SPOTIFY_ACCOUNTS_URL: &str = "CONSOLIFY_SPOTIFY_ACCOUNTS_URL";
pub const ENV_SPOTIFY_API_URL: &str = "CONSOLIFY_SPOTIFY_API_URL";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `consolify/.env` inside the platform-specific
/// local data directory. Variables already present in the process
/// environment are not overridden.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/consolify/.env`
/// - macOS: `~/Library/Application Support/consolify/.env`
/// - Windows: `%LOCALAPPDATA%/consolify/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
///
/// A missing `.env` file is not an error: credentials may come straight from
/// the environment.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Location of the optional `.env` file.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("consolify/.env");
    path
}

/// Relay server configuration.
///
/// Holds the OAuth client credentials and every URL the relay server needs.
/// Built once at startup by [`Config::from_env`] and shared read-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub server_address: String,
    pub accounts_url: String,
    pub api_url: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable if `spotify_client_id` or
    /// `spotify_client_secret` is missing or empty.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            client_id: required(ENV_CLIENT_ID)?,
            client_secret: required(ENV_CLIENT_SECRET)?,
            redirect_uri: optional(ENV_REDIRECT_URI, DEFAULT_REDIRECT_URI),
            server_address: optional(ENV_SERVER_ADDRESS, DEFAULT_SERVER_ADDRESS),
            accounts_url: optional(ENV_SPOTIFY_ACCOUNTS_URL, DEFAULT_SPOTIFY_ACCOUNTS_URL),
            api_url: optional(ENV_SPOTIFY_API_URL, DEFAULT_SPOTIFY_API_URL),
        })
    }

    /// Configuration with the given credentials and every other value at its default.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            accounts_url: DEFAULT_SPOTIFY_ACCOUNTS_URL.to_string(),
            api_url: DEFAULT_SPOTIFY_API_URL.to_string(),
        }
    }

    /// Spotify's authorize endpoint, where `/login` sends the browser.
    pub fn authorize_url(&self) -> String {
        format!("{}/authorize", self.accounts_url.trim_end_matches('/'))
    }

    /// Spotify's token endpoint, used to exchange the authorization code.
    pub fn token_url(&self) -> String {
        format!("{}/api/token", self.accounts_url.trim_end_matches('/'))
    }
}

/// Returns the relay server base URL for the command client.
///
/// Falls back to [`DEFAULT_SERVER_URL`] when `CONSOLIFY_SERVER_URL` is unset.
pub fn server_url() -> String {
    optional(ENV_SERVER_URL, DEFAULT_SERVER_URL)
}

fn required(key: &str) -> Result<String, String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("{} must be set", key)),
    }
}

fn optional(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
