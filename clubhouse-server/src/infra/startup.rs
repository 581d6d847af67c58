use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clubhouse_core::{ActivityDirectory, load_seed_file};

use crate::infra::config::{Config, ConfigWarnings};

/// Install the global tracing subscriber. Override the filter via `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub fn log_config_warnings(warnings: &ConfigWarnings) {
    if warnings.is_empty() {
        return;
    }

    warn!(count = warnings.len(), "configuration loaded with warnings");
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }
}

/// Build the activity directory from the configured seed file, or the
/// built-in seed when none is configured.
pub fn build_directory(config: &Config) -> Result<ActivityDirectory> {
    let directory = match &config.directory.seed_path {
        Some(path) => {
            let seeds = load_seed_file(path).with_context(|| {
                format!("failed to load activity seed {}", path.display())
            })?;
            let directory =
                ActivityDirectory::from_seeds(seeds).with_context(|| {
                    format!("invalid activity seed {}", path.display())
                })?;
            info!(path = %path.display(), "activity directory seeded from file");
            directory
        }
        None => {
            info!("activity directory seeded with built-in activities");
            ActivityDirectory::default()
        }
    };

    let directory =
        directory.with_capacity_policy(config.directory.capacity_policy());

    info!(
        activities = directory.len(),
        capacity = ?directory.capacity_policy(),
        "activity directory ready"
    );

    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubhouse_core::CapacityPolicy;

    use crate::infra::config::{
        ConfigMetadata, CorsConfig, DirectoryConfig, ServerConfig,
        StaticAssetsConfig,
    };

    const SEED: &str = r#"
[[activities]]
name = "Robotics"
description = "Build and program robots"
schedule = "Mondays, 3:30 PM - 5:00 PM"
max_participants = 1
participants = ["ada@mergington.edu"]

[[activities]]
name = "Choir"
description = "Sing in the school choir"
schedule = "Fridays, 4:00 PM - 5:00 PM"
max_participants = 30
"#;

    fn config(directory: DirectoryConfig) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 0,
            },
            directory,
            static_assets: StaticAssetsConfig {
                dir: "static".into(),
                landing_page: "/static/index.html".into(),
            },
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:3000".into()],
            },
            dev_mode: false,
            metadata: ConfigMetadata::default(),
        }
    }

    #[test]
    fn seed_file_builds_directory_with_enforced_capacity() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("activities.toml");
        std::fs::write(&path, SEED)?;

        let directory = build_directory(&config(DirectoryConfig {
            seed_path: Some(path),
            enforce_capacity: true,
        }))?;

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.capacity_policy(), CapacityPolicy::Enforce);
        assert_eq!(
            directory.names().collect::<Vec<_>>(),
            vec!["Robotics", "Choir"]
        );
        assert!(directory.enroll("Robotics", "bob@mergington.edu").is_err());
        Ok(())
    }

    #[test]
    fn built_in_seed_is_used_without_seed_path() -> Result<()> {
        let directory = build_directory(&config(DirectoryConfig::default()))?;
        assert_eq!(directory.len(), 9);
        assert_eq!(directory.capacity_policy(), CapacityPolicy::Informational);
        Ok(())
    }

    #[test]
    fn missing_seed_file_fails_startup() {
        let err = build_directory(&config(DirectoryConfig {
            seed_path: Some("/nonexistent/activities.toml".into()),
            enforce_capacity: false,
        }))
        .unwrap_err();
        assert!(err.to_string().contains("failed to load activity seed"));
    }
}
