use axum::{
    Router,
    http::{HeaderValue, Method},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::warn;

use clubhouse_core::api::routes::paths;

use crate::{infra::app_state::AppState, routes};

/// Assemble the full application: routes, static landing assets, and
/// middleware, with `state` attached.
pub fn create_app(state: AppState) -> Router {
    let mut app = routes::create_router();

    let static_dir = state.config().static_dir().to_path_buf();
    if static_dir.is_dir() {
        app = app.nest_service(paths::STATIC, ServeDir::new(static_dir));
    } else {
        warn!(
            dir = %static_dir.display(),
            "static directory missing; landing page will not be served"
        );
    }

    app.layer(cors_layer(&state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Permissive in dev, allow-list in prod
fn cors_layer(state: &AppState) -> CorsLayer {
    let config = state.config();
    if config.dev_mode {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "dropping unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
}
