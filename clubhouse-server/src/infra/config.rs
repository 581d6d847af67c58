pub use clubhouse_config::{
    Config, ConfigLoad, ConfigLoader, ConfigMetadata, ConfigWarnings,
    CorsConfig, DirectoryConfig, ServerConfig, StaticAssetsConfig,
};
