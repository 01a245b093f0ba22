use super::fail;
use crate::{relay::RelayClient, success, utils};

/// Plays `uri`, or the default playlist when none is given.
pub async fn play(client: &RelayClient, uri: Option<String>) {
    let uri = utils::resolve_play_uri(uri);

    match client.play(&uri).await {
        Ok(()) => success!("Playing: {}", uri),
        Err(e) => fail("play", e),
    }
}

pub async fn pause(client: &RelayClient) {
    match client.pause().await {
        Ok(()) => success!("Paused"),
        Err(e) => fail("pause", e),
    }
}

pub async fn resume(client: &RelayClient) {
    match client.resume().await {
        Ok(()) => success!("Resumed"),
        Err(e) => fail("resume", e),
    }
}
