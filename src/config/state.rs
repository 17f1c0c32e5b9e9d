// Application state module
// Holds the shared file body, the stop signal and the loaded configuration

use std::sync::Arc;
use tokio::sync::RwLock;

use super::path::WatchedFile;
use super::types::Config;
use crate::refresh::StopSignal;

/// Application state shared by the HTTP handlers and the refresher.
///
/// `body` is the only mutable slot: the refresher is its single writer,
/// every request handler a reader. The value is published as an `Arc` swap
/// under the write lock, so readers always see a complete snapshot.
pub struct AppState {
    pub config: Config,
    pub watched: WatchedFile,
    body: RwLock<Arc<String>>,
    pub stop: StopSignal,
}

impl AppState {
    /// Create `AppState` with an empty body.
    ///
    /// The body stays empty until the first refresh tick completes, so a
    /// request racing startup sees `""` rather than an error.
    pub fn new(config: Config, watched: WatchedFile) -> Self {
        Self {
            config,
            watched,
            body: RwLock::new(Arc::new(String::new())),
            stop: StopSignal::new(),
        }
    }

    /// Current body snapshot (cheap `Arc` clone under the read lock)
    pub async fn body_snapshot(&self) -> Arc<String> {
        Arc::clone(&*self.body.read().await)
    }

    /// Replace the body with a freshly read value.
    ///
    /// Only the refresher calls this; each publish fully supersedes the
    /// previous value.
    pub async fn publish_body(&self, body: String) {
        *self.body.write().await = Arc::new(body);
    }
}
