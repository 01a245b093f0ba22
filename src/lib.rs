//! Consolify Library
//!
//! This library bridges a command-line client to a Spotify Web Playback SDK
//! player running in the browser. A small local relay server performs the
//! OAuth authorization-code exchange, keeps the access token and the browser
//! device id for the session, and forwards playback commands to Spotify's Web
//! API. The command client talks to that relay server over plain HTTP.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local relay server
//! - `cli` - Command-line client command implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error types for the relay server and its upstream calls
//! - `pages` - Embedded login page, player page and player script
//! - `relay` - HTTP client used by the command client to reach the relay server
//! - `server` - Router assembly and the serve loop
//! - `session` - Shared session state (access token, device id)
//! - `spotify` - Spotify accounts service and Web API client
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use consolify::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), String> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     server::run(config, false).await.map_err(|e| e.to_string())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod pages;
pub mod relay;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Relay server listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to confirm a command or an upstream call that went through.
///
/// # Example
///
/// ```
/// success!("Playing: {}", uri);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Only for failures that leave
/// nothing useful to do, such as missing credentials or an unbindable address.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues: a rejected command, an upstream error that is
/// relayed back to the caller, a failed token exchange.
///
/// # Example
///
/// ```
/// warning!("Play error: {} - {}", status, body);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
