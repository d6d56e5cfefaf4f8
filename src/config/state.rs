// Application state module
// Shared, read-only state handed to every request

use std::path::PathBuf;

use super::types::Config;
use crate::routing::RouteTable;

/// Application state
pub struct AppState {
    pub config: Config,
    pub workspace_dir: PathBuf,
    pub routes: RouteTable,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            workspace_dir: PathBuf::from(&config.bee.workspace_dir),
            routes: RouteTable::worker(),
        }
    }

    pub const fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }
}
