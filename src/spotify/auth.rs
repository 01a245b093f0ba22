use reqwest::Url;

use super::{SpotifyClient, send};
use crate::{config, error::SpotifyError, types::TokenResponse};

impl SpotifyClient {
    /// Builds the URL of Spotify's authorize endpoint that `/login` redirects to.
    ///
    /// The redirect URI and the scopes are URL-encoded. The resulting URL asks
    /// for an authorization code (`response_type=code`) which Spotify later
    /// sends to the configured redirect URI.
    ///
    /// # Errors
    ///
    /// Fails only if the configured accounts URL is not a valid URL.
    pub fn authorize_url(&self) -> Result<Url, SpotifyError> {
        let config = self.config();
        Url::parse_with_params(
            &config.authorize_url(),
            &[
                ("client_id", config.client_id.as_str()),
                ("response_type", "code"),
                ("redirect_uri", config.redirect_uri.as_str()),
                ("scope", config::SPOTIFY_SCOPES),
            ],
        )
        .map_err(|e| SpotifyError::Decode(format!("invalid authorize URL: {}", e)))
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// Completes the authorization-code flow using the client secret. Codes are
    /// single-use: presenting the same code twice makes Spotify answer with an
    /// error status, which is returned as [`SpotifyError::Status`] rather than
    /// a previously obtained token.
    ///
    /// # Returns
    ///
    /// - `Ok(TokenResponse)` - the parsed token response
    /// - `Err(SpotifyError)` - transport failure, upstream error, or a body
    ///   without `access_token`
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, SpotifyError> {
        let config = self.config();
        let request = self.http.post(config.token_url()).form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
        ]);

        let response = send(request).await?;
        let token = response.json::<TokenResponse>().await?;
        Ok(token)
    }
}
