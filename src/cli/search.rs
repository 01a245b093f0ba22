use tabled::Table;

use super::fail;
use crate::{
    info,
    relay::RelayClient,
    types::{AlbumTableRow, ArtistTableRow},
};

/// Searches albums through the relay and prints them as a table.
///
/// The URI column is what `consolify play` accepts, so a result can be
/// played straight away.
pub async fn search_albums(client: &RelayClient, query: &str, limit: Option<i64>) {
    let albums = match client.search_albums(query, limit).await {
        Ok(albums) => albums,
        Err(e) => fail("search albums", e),
    };

    if albums.is_empty() {
        info!("No albums found for '{}'", query);
        return;
    }

    let rows: Vec<AlbumTableRow> = albums
        .into_iter()
        .map(|album| AlbumTableRow {
            name: album.name,
            artists: album.artists,
            uri: album.uri,
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}

pub async fn search_artists(client: &RelayClient, query: &str, limit: Option<i64>) {
    let artists = match client.search_artists(query, limit).await {
        Ok(artists) => artists,
        Err(e) => fail("search artists", e),
    };

    if artists.is_empty() {
        info!("No artists found for '{}'", query);
        return;
    }

    let rows: Vec<ArtistTableRow> = artists
        .into_iter()
        .map(|artist| ArtistTableRow {
            name: artist.name,
            uri: artist.uri,
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}
