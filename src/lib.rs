use std::sync::Arc;

pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod storage;
pub mod utils;

use services::{EventService, FeedService, Repository};
use storage::Storage;

/// Shared handler state. Both services write through one [`Repository`],
/// so their load/save cycles never interleave.
#[derive(Clone)]
pub struct AppState {
    pub events: EventService,
    pub feeds: FeedService,
}

impl AppState {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        let repo = Repository::new(store);
        Self {
            events: EventService::new(repo.clone()),
            feeds: FeedService::new(repo),
        }
    }
}
