#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    net::SocketAddr,
    sync::Arc,
};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use consolify::{api::AppState, config::Config, server};
use reqwest::Url;
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::Mutex};

pub const GOOD_CODE: &str = "good-code";

/// A request received by the stand-in Spotify service.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn form(&self) -> HashMap<String, String> {
        parse_pairs(&self.body)
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

/// Stand-in for Spotify's accounts service and Web API.
///
/// Mounted at the root: `/authorize` and `/api/token` play the accounts
/// service, everything under `/v1` plays the Web API.
#[derive(Debug, Clone, Default)]
pub struct FakeSpotify {
    requests: Arc<Mutex<Vec<Recorded>>>,
    used_codes: Arc<Mutex<HashSet<String>>>,
    fail_with: Arc<Mutex<Option<StatusCode>>>,
}

impl FakeSpotify {
    pub async fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().await.clone()
    }

    pub async fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests()
            .await
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    /// Makes every Web API call answer with `status` from now on.
    pub async fn fail_with(&self, status: StatusCode) {
        *self.fail_with.lock().await = Some(status);
    }
}

pub struct Harness {
    pub relay: String,
    pub spotify: FakeSpotify,
    pub spotify_url: String,
    pub state: AppState,
    pub http: reqwest::Client,
}

impl Harness {
    pub async fn start() -> Self {
        let spotify = FakeSpotify::default();
        let spotify_addr = spawn(
            Router::new()
                .fallback(fake_spotify)
                .with_state(spotify.clone()),
        )
        .await;
        let spotify_url = format!("http://{}", spotify_addr);

        let mut config = Config::new("client-id", "client-secret");
        config.accounts_url = spotify_url.clone();
        config.api_url = format!("{}/v1", spotify_url);

        let state = server::app_state(config);
        let relay_addr = spawn(server::router(state.clone())).await;

        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        Harness {
            relay: format!("http://{}", relay_addr),
            spotify,
            spotify_url,
            state,
            http,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.relay, path)
    }

    pub async fn login(&self, token: &str, device_id: &str) {
        self.state.session.set_token(token).await;
        self.state.session.set_device_id(device_id).await;
    }
}

/// Serves `router` on an ephemeral local port.
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn parse_pairs(encoded: &str) -> HashMap<String, String> {
    let url = Url::parse(&format!("http://pairs.invalid/?{}", encoded)).unwrap();
    url.query_pairs().into_owned().collect()
}

async fn fake_spotify(
    State(fake): State<FakeSpotify>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let recorded = Recorded {
        method: method.clone(),
        path: uri.path().to_string(),
        query: parse_pairs(uri.query().unwrap_or_default()),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    fake.requests.lock().await.push(recorded.clone());

    if recorded.path == "/api/token" && method == Method::POST {
        return token_response(&fake, &recorded).await;
    }

    if let Some(status) = *fake.fail_with.lock().await {
        return (
            status,
            Json(json!({ "error": { "status": status.as_u16(), "message": "rejected" } })),
        )
            .into_response();
    }

    match (method, recorded.path.as_str()) {
        (Method::PUT, "/v1/me/player/play") | (Method::PUT, "/v1/me/player/pause") => {
            StatusCode::NO_CONTENT.into_response()
        }
        (Method::GET, "/v1/search") => match recorded.query.get("type").map(String::as_str) {
            Some("album") => Json(album_page()).into_response(),
            Some("artist") => Json(artist_page()).into_response(),
            _ => StatusCode::BAD_REQUEST.into_response(),
        },
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn token_response(fake: &FakeSpotify, recorded: &Recorded) -> Response {
    let form = recorded.form();
    let code = form.get("code").cloned().unwrap_or_default();

    let first_use = fake.used_codes.lock().await.insert(code.clone());
    if code == GOOD_CODE && first_use {
        Json(json!({
            "access_token": format!("token-{}", code),
            "token_type": "Bearer",
            "scope": "streaming",
            "expires_in": 3600,
            "refresh_token": "unused"
        }))
        .into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid authorization code"
            })),
        )
            .into_response()
    }
}

fn album_page() -> Value {
    json!({
        "albums": {
            "href": "https://api.spotify.com/v1/search",
            "items": [
                {
                    "id": "album-1",
                    "name": "The Fragile",
                    "uri": "spotify:album:album-1",
                    "album_type": "album",
                    "images": [
                        { "url": "https://i.scdn.co/image/large", "height": 640, "width": 640 },
                        { "url": "https://i.scdn.co/image/small", "height": 64, "width": 64 }
                    ],
                    "artists": [
                        { "id": "artist-1", "name": "Nine Inch Nails" },
                        { "id": "artist-2", "name": "Guest" }
                    ]
                },
                {
                    "id": "album-2",
                    "name": "Bare",
                    "uri": "spotify:album:album-2",
                    "images": [],
                    "artists": [
                        { "id": "artist-1", "name": "Nine Inch Nails" }
                    ]
                }
            ],
            "limit": 2,
            "total": 2
        }
    })
}

fn artist_page() -> Value {
    json!({
        "artists": {
            "items": [
                {
                    "id": "artist-1",
                    "name": "Nine Inch Nails",
                    "uri": "spotify:artist:artist-1",
                    "genres": ["industrial"],
                    "images": [ { "url": "https://i.scdn.co/image/nin" } ]
                },
                {
                    "id": "artist-3",
                    "name": "Unpictured",
                    "uri": "spotify:artist:artist-3",
                    "images": []
                }
            ]
        }
    })
}
