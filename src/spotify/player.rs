use reqwest::RequestBuilder;

use super::{SpotifyClient, send};
use crate::{error::SpotifyError, types::ContextPlayRequest};

impl SpotifyClient {
    /// Starts playback of a context (playlist, album, artist) on the device.
    ///
    /// Issues `PUT /me/player/play` with `{"context_uri": uri}`.
    pub async fn play(&self, token: &str, device_id: &str, uri: &str) -> Result<(), SpotifyError> {
        let body = ContextPlayRequest {
            context_uri: uri.to_string(),
        };
        let request = self.player_request("/me/player/play", token, device_id).json(&body);
        send(request).await.map(|_| ())
    }

    /// Pauses playback via `PUT /me/player/pause`.
    pub async fn pause(&self, token: &str, device_id: &str) -> Result<(), SpotifyError> {
        let request = self
            .player_request("/me/player/pause", token, device_id)
            .header(reqwest::header::CONTENT_LENGTH, 0);
        send(request).await.map(|_| ())
    }

    /// Resumes the current context via `PUT /me/player/play` without a body.
    pub async fn resume(&self, token: &str, device_id: &str) -> Result<(), SpotifyError> {
        let request = self
            .player_request("/me/player/play", token, device_id)
            .header(reqwest::header::CONTENT_LENGTH, 0);
        send(request).await.map(|_| ())
    }

    // Empty device id means no browser player registered yet; Spotify then
    // targets the user's currently active device.
    fn player_request(&self, path: &str, token: &str, device_id: &str) -> RequestBuilder {
        let request = self.http.put(self.api_url(path)).bearer_auth(token);
        if device_id.is_empty() {
            request
        } else {
            request.query(&[("device_id", device_id)])
        }
    }
}
