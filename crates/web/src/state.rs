use std::sync::Arc;

use osu_api::OsuClient;
use storage::Database;
use tracker::Tracker;

pub type AppTracker = Tracker<OsuClient, Database>;

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<AppTracker>,
}

impl AppState {
    pub fn new(tracker: AppTracker) -> Self {
        Self {
            tracker: Arc::new(tracker),
        }
    }

    pub fn db(&self) -> &Database {
        self.tracker.store()
    }
}
