use axum::{Json, extract::State, response::Redirect};
use serde_json::{Value, json};

use crate::infra::app_state::AppState;

/// `GET /` sends browsers to the static landing page with a 307.
pub async fn root_redirect_handler(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(state.config().landing_page())
}

pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "activities": state.directory().len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
