pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod hn_client;
pub mod service;

use std::sync::Arc;

use service::StoryService;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<StoryService>,
}
