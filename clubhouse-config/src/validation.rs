use thiserror::Error;

use super::models::Config;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("CORS wildcard origins are not allowed when DEV_MODE is false")]
    DangerousCorsWildcard,
    #[error("landing page '{0}' must be an absolute path starting with '/'")]
    RelativeLandingPage(String),
    #[error("CORS origin '{0}' must look like http(s)://host[:port]")]
    InvalidCorsOrigin(String),
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if !config.static_assets.landing_page.starts_with('/') {
        return Err(ConfigGuardRailError::RelativeLandingPage(
            config.static_assets.landing_page.clone(),
        ));
    }

    if !config.dev_mode && config.cors.is_wildcard_included() {
        return Err(ConfigGuardRailError::DangerousCorsWildcard);
    }

    if let Some(origin) = config
        .cors
        .allowed_origins
        .iter()
        .find(|origin| origin.trim() != "*" && !is_valid_origin(origin))
    {
        return Err(ConfigGuardRailError::InvalidCorsOrigin(origin.clone()));
    }

    if config.directory.enforce_capacity {
        warnings.push_with_hint(
            "ENFORCE_CAPACITY is enabled; sign-ups beyond max_participants will be rejected",
            "Unset ENFORCE_CAPACITY to keep capacity informational only",
        );
    }

    if let Some(seed) = &config.directory.seed_path
        && !seed.exists()
    {
        warnings.push_with_hint(
            format!("activity seed file {} does not exist", seed.display()),
            "Startup will fail when the directory is built; fix ACTIVITIES_SEED_PATH",
        );
    }

    Ok(warnings)
}

// Scheme plus host, no path, visible ASCII only
fn is_valid_origin(origin: &str) -> bool {
    let Some(rest) = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"))
    else {
        return false;
    };

    !rest.is_empty()
        && !rest.contains('/')
        && rest.chars().all(|c| c.is_ascii_graphic())
}
