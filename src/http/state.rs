//! Application state for the HTTP server.

use crate::db::repository::TempleRepository;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for temple roster access
    pub repository: Arc<dyn TempleRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn TempleRepository>) -> Self {
        Self { repository }
    }
}
