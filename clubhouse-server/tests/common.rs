use std::path::PathBuf;

use anyhow::{Result, anyhow};
use axum_test::TestServer;
use clubhouse_core::{ActivityDirectory, api::routes::paths};
use clubhouse_server::{
    AppState, create_app,
    infra::config::{
        Config, ConfigMetadata, CorsConfig, DirectoryConfig, ServerConfig,
        StaticAssetsConfig,
    },
};

// Code is used by test modules, but not in this scope
#[allow(unused)]
pub fn test_config(static_dir: PathBuf) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        directory: DirectoryConfig::default(),
        static_assets: StaticAssetsConfig {
            dir: static_dir,
            landing_page: paths::DEFAULT_LANDING_PAGE.into(),
        },
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".into()],
        },
        dev_mode: true,
        metadata: ConfigMetadata::default(),
    }
}

/// Fresh state over the built-in seed; nothing is shared between tests.
#[allow(unused)]
pub fn test_state() -> AppState {
    AppState::new(
        ActivityDirectory::default(),
        test_config(PathBuf::from("does-not-exist")),
    )
}

#[allow(unused)]
pub fn build_test_server(state: AppState) -> Result<TestServer> {
    TestServer::new(create_app(state)).map_err(|err| anyhow!(err.to_string()))
}
