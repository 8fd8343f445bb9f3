use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::models::Resume;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single resume being edited. "Clear all" swaps in a fresh one.
    pub resume: Arc<RwLock<Resume>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            resume: Arc::new(RwLock::new(Resume::new())),
            config,
        }
    }
}
