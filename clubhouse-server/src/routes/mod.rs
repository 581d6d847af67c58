use axum::{
    Router,
    routing::{delete, get, post},
};

use clubhouse_core::api::routes::paths;

use crate::{
    handlers::{activities, system},
    infra::app_state::AppState,
};

/// All Clubhouse routes, without middleware or state attached.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route(paths::ROOT, get(system::root_redirect_handler))
        .route(paths::HEALTH, get(system::health_handler))
        .route(
            paths::activities::COLLECTION,
            get(activities::list_activities_handler),
        )
        .route(
            paths::activities::SIGNUP,
            post(activities::signup_handler),
        )
        .route(
            paths::activities::UNREGISTER,
            delete(activities::unregister_handler),
        )
}
