use serde::Deserialize;
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub directory: FileDirectoryConfig,
    #[serde(default)]
    pub static_assets: FileStaticAssetsConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
    pub dev_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileDirectoryConfig {
    pub seed_path: Option<PathBuf>,
    pub enforce_capacity: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileStaticAssetsConfig {
    pub dir: Option<PathBuf>,
    pub landing_page: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileCorsConfig {
    pub allowed_origins: Option<Vec<String>>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub seed_path: Option<PathBuf>,
    pub enforce_capacity: Option<bool>,
    pub static_dir: Option<PathBuf>,
    pub landing_page: Option<String>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub dev_mode: Option<bool>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            config_path: lookup("CLUBHOUSE_CONFIG_PATH").map(PathBuf::from),
            server_host: lookup("SERVER_HOST"),
            server_port: lookup("SERVER_PORT").and_then(|s| s.parse().ok()),
            seed_path: lookup("ACTIVITIES_SEED_PATH").map(PathBuf::from),
            enforce_capacity: lookup("ENFORCE_CAPACITY")
                .as_deref()
                .and_then(parse_bool),
            static_dir: lookup("STATIC_DIR").map(PathBuf::from),
            landing_page: lookup("LANDING_PAGE"),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .as_deref()
                .map(parse_csv),
            dev_mode: lookup("DEV_MODE").as_deref().and_then(parse_bool),
        }
    }
}

fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
