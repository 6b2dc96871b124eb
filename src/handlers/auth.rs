use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use cookie::{Cookie, SameSite};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::app::AppState;
use crate::middleware::auth::session_token_from_headers;
use crate::models::{AuthStatus, LoginRequest, LoginResponse};
use crate::session::{SESSION_COOKIE, SESSION_COOKIE_MAX_AGE_SECS};

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    let valid = matches!(
        state.credentials.get(&payload.username),
        Some(expected) if expected == &payload.password
    );

    if !valid {
        warn!("Failed login attempt for {}", payload.username);
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid username or password"
            })),
        ));
    }

    let session = state
        .sessions
        .create_session(&payload.username)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": format!("Failed to create session: {}", e)
                })),
            )
        })?;

    info!("Teacher {} logged in", payload.username);

    let cookie = Cookie::build((SESSION_COOKIE, session.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(cookie::time::Duration::seconds(SESSION_COOKIE_MAX_AGE_SECS))
        .build();

    Ok((
        [(SET_COOKIE, cookie.to_string())],
        Json(LoginResponse {
            message: format!("Logged in as {}", payload.username),
            username: payload.username,
        }),
    ))
}

/// Idempotent: succeeds whether or not a session cookie is attached
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session_token_from_headers(&headers) {
        if let Err(e) = state.sessions.destroy(&token).await {
            warn!("Failed to destroy session: {}", e);
        }
    }

    // Expire the cookie client-side even if no session existed
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(cookie::time::Duration::ZERO)
        .build();

    (
        [(SET_COOKIE, cookie.to_string())],
        Json(json!({ "message": "Logged out" })),
    )
}

pub async fn auth_status(State(state): State<AppState>, headers: HeaderMap) -> Json<AuthStatus> {
    let username = match session_token_from_headers(&headers) {
        Some(token) => state.sessions.resolve(&token).await.unwrap_or_else(|e| {
            warn!("Session lookup failed: {}", e);
            None
        }),
        None => None,
    };

    Json(AuthStatus {
        authenticated: username.is_some(),
        username,
    })
}
