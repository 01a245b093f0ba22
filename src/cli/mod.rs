//! Command client operations.
//!
//! Each command issues exactly one request to the relay server through a
//! [`RelayClient`](crate::relay::RelayClient) and prints a single line
//! describing the outcome. Failures terminate the process with exit code 1.

mod playback;
mod search;

pub use playback::{pause, play, resume};
pub use search::{search_albums, search_artists};

use crate::{error, relay::ClientError};

/// Prints the failure of `action` and exits.
///
/// An unreachable relay server gets the fixed connection message; a rejected
/// command reports the status the relay answered with.
pub(crate) fn fail(action: &str, err: ClientError) -> ! {
    match err {
        ClientError::Status { status, .. } => error!("Failed to {}: {}", action, status),
        other => error!("Error: {}", other),
    }
}
