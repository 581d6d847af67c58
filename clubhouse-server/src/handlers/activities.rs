use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::info;

use clubhouse_core::{
    DirectorySnapshot,
    api::{EmailQuery, MessageResponse},
};

use crate::infra::{app_state::AppState, errors::AppResult};

/// Every activity with its roster, keyed by name.
pub async fn list_activities_handler(
    State(state): State<AppState>,
) -> Json<DirectorySnapshot> {
    Json(state.directory().list_all())
}

pub async fn signup_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(EmailQuery { email }): Query<EmailQuery>,
) -> AppResult<Json<MessageResponse>> {
    let enrollment = state
        .directory()
        .enroll(&activity_name, &email)
        .inspect_err(|err| {
            info!(
                activity = %activity_name,
                email = %email,
                reason = %err,
                "signup rejected"
            )
        })?;

    Ok(Json(MessageResponse::new(enrollment.message())))
}

pub async fn unregister_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(EmailQuery { email }): Query<EmailQuery>,
) -> AppResult<Json<MessageResponse>> {
    let removal = state
        .directory()
        .remove(&activity_name, &email)
        .inspect_err(|err| {
            info!(
                activity = %activity_name,
                email = %email,
                reason = %err,
                "unregister rejected"
            )
        })?;

    Ok(Json(MessageResponse::new(removal.message())))
}
