//! HTTP server configuration object.

use std::net::SocketAddr;
use std::path::PathBuf;

use exercise_tracker::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) views_dir: Option<PathBuf>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            views_dir: None,
        }
    }

    /// Attach a database pool. Without one the server keeps data in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Directory holding the landing page's `index.html`.
    #[must_use]
    pub fn with_views_dir(mut self, views_dir: Option<PathBuf>) -> Self {
        self.views_dir = views_dir;
        self
    }
}
