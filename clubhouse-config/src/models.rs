use std::path::{Path, PathBuf};

use clubhouse_core::CapacityPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub directory: DirectoryConfig,
    pub static_assets: StaticAssetsConfig,
    pub cors: CorsConfig,
    pub dev_mode: bool,
    pub metadata: ConfigMetadata,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_assets.dir
    }

    pub fn landing_page(&self) -> &str {
        &self.static_assets.landing_page
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default)]
pub struct DirectoryConfig {
    /// Seed file replacing the built-in activity list.
    pub seed_path: Option<PathBuf>,
    pub enforce_capacity: bool,
}

impl DirectoryConfig {
    pub fn capacity_policy(&self) -> CapacityPolicy {
        if self.enforce_capacity {
            CapacityPolicy::Enforce
        } else {
            CapacityPolicy::Informational
        }
    }
}

#[derive(Debug, Clone)]
pub struct StaticAssetsConfig {
    pub dir: PathBuf,
    /// Redirect target for `GET /`.
    pub landing_page: String,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn is_wildcard_included(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin.trim() == "*")
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
