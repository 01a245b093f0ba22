use std::sync::Arc;

use tokio::sync::Mutex;

use crate::types::Session;

/// Shared session state of the relay server.
///
/// Holds the access token obtained from the OAuth callback and the device id
/// reported by the browser player. Every handler reads and writes through
/// this store, so the callback writing a token and a playback command reading
/// it are serialized by the lock. Cloning the store shares the same state.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current access token, empty until the first successful callback.
    pub async fn token(&self) -> String {
        self.inner.lock().await.access_token.clone()
    }

    /// Replaces the access token. Last write wins.
    pub async fn set_token(&self, token: impl Into<String>) {
        self.inner.lock().await.access_token = token.into();
    }

    pub async fn has_token(&self) -> bool {
        !self.inner.lock().await.access_token.is_empty()
    }

    /// Current playback device id, empty until the browser player registers.
    pub async fn device_id(&self) -> String {
        self.inner.lock().await.device_id.clone()
    }

    /// Replaces the playback device id. Last write wins.
    pub async fn set_device_id(&self, device_id: impl Into<String>) {
        self.inner.lock().await.device_id = device_id.into();
    }

    /// Token and device id read under a single lock, so a playback command
    /// never pairs a token with a device from a different moment.
    pub async fn snapshot(&self) -> Session {
        self.inner.lock().await.clone()
    }
}
