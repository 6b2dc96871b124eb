use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::info;

use crate::app::AppState;
use crate::middleware::auth::AuthTeacher;
use crate::models::Activity;
use crate::registry::RegistryError;

/// Query parameters for the roster mutation endpoints
#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub email: String,
}

pub async fn get_activities(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, Activity>>, (StatusCode, Json<Value>)> {
    let activities = state
        .activities
        .list_all()
        .await
        .map_err(registry_error_response)?;

    Ok(Json(activities))
}

pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    Extension(teacher): Extension<AuthTeacher>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    state
        .activities
        .signup(&activity_name, &query.email)
        .await
        .map_err(registry_error_response)?;

    info!(
        "{} signed up {} for {}",
        teacher.username, query.email, activity_name
    );

    Ok(Json(json!({
        "message": format!("Signed up {} for {}", query.email, activity_name)
    })))
}

pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    Extension(teacher): Extension<AuthTeacher>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    state
        .activities
        .unregister(&activity_name, &query.email)
        .await
        .map_err(registry_error_response)?;

    info!(
        "{} unregistered {} from {}",
        teacher.username, query.email, activity_name
    );

    Ok(Json(json!({
        "message": format!("Unregistered {} from {}", query.email, activity_name)
    })))
}

/// Translate registry errors to HTTP status codes
fn registry_error_response(err: RegistryError) -> (StatusCode, Json<Value>) {
    let status = match err {
        RegistryError::ActivityNotFound => StatusCode::NOT_FOUND,
        RegistryError::AlreadyRegistered | RegistryError::NotRegistered => StatusCode::BAD_REQUEST,
    };

    (status, Json(json!({ "error": err.to_string() })))
}
