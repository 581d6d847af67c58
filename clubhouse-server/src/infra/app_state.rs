use std::{fmt, sync::Arc};

use clubhouse_core::ActivityDirectory;

use crate::infra::config::Config;

/// Shared handler state. Built once at startup; tests build a fresh one per
/// case so rosters never leak between them.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<ActivityDirectory>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("activities", &self.directory.len())
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(directory: ActivityDirectory, config: Config) -> Self {
        Self {
            directory: Arc::new(directory),
            config: Arc::new(config),
        }
    }

    pub fn directory(&self) -> &ActivityDirectory {
        &self.directory
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
