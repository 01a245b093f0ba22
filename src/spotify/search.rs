use super::{SpotifyClient, send};
use crate::{
    error::SpotifyError,
    types::{AlbumResult, ArtistResult, SearchKind, SearchResponse},
};

impl SpotifyClient {
    /// Searches albums and flattens them into [`AlbumResult`] records.
    ///
    /// `limit` is sent as-is; callers clamp it beforehand.
    pub async fn search_albums(
        &self,
        token: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<AlbumResult>, SpotifyError> {
        let res = self.search(token, query, SearchKind::Album, limit).await?;
        let albums = res
            .albums
            .ok_or_else(|| SpotifyError::Decode("missing `albums` in search response".into()))?;

        Ok(albums.items.into_iter().map(AlbumResult::from).collect())
    }

    /// Searches artists and flattens them into [`ArtistResult`] records.
    pub async fn search_artists(
        &self,
        token: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<ArtistResult>, SpotifyError> {
        let res = self.search(token, query, SearchKind::Artist, limit).await?;
        let artists = res
            .artists
            .ok_or_else(|| SpotifyError::Decode("missing `artists` in search response".into()))?;

        Ok(artists.items.into_iter().map(ArtistResult::from).collect())
    }

    async fn search(
        &self,
        token: &str,
        query: &str,
        kind: SearchKind,
        limit: u32,
    ) -> Result<SearchResponse, SpotifyError> {
        let limit = limit.to_string();
        let request = self
            .http
            .get(self.api_url("/search"))
            .bearer_auth(token)
            .query(&[
                ("q", query),
                ("type", kind.as_str()),
                ("limit", limit.as_str()),
            ]);

        let response = send(request).await?;
        Ok(response.json::<SearchResponse>().await?)
    }
}
