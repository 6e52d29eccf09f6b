//! Map search sessions keyed by map view.
//!
//! Each browser map view gets its own [`MapSearchSession`], so a new search
//! only supersedes searches from the same view. Idle sessions expire.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use super::session::MapSearchSession;

/// Zoom level a new map view starts at.
pub const DEFAULT_ZOOM_LEVEL: i32 = 12;

/// Session key used when a client does not name its map view.
pub const ANONYMOUS_SESSION: &str = "anonymous";

/// Configuration for the session registry.
#[derive(Debug, Clone)]
pub struct SessionRegistryConfig {
    /// Drop a session after this long without a request.
    pub idle_timeout: Duration,

    /// Maximum number of live sessions.
    pub max_capacity: u64,
}

impl Default for SessionRegistryConfig {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(30 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Live map search sessions.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: MokaCache<String, Arc<MapSearchSession>>,
}

impl SessionRegistry {
    pub fn new(config: &SessionRegistryConfig) -> Self {
        let sessions = MokaCache::builder()
            .time_to_idle(config.idle_timeout)
            .max_capacity(config.max_capacity)
            .build();

        Self { sessions }
    }

    /// The session for `key`, created on first use.
    ///
    /// An empty key maps to [`ANONYMOUS_SESSION`].
    pub async fn session(&self, key: &str) -> Arc<MapSearchSession> {
        let key = match key.trim() {
            "" => ANONYMOUS_SESSION,
            key => key,
        };
        self.sessions
            .get_with(key.to_string(), async {
                Arc::new(MapSearchSession::new(DEFAULT_ZOOM_LEVEL))
            })
            .await
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(&SessionRegistryConfig::default())
    }
}
