use axum::{
    extract::{Request, State},
    http::{header::COOKIE, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use cookie::Cookie;
use serde_json::{json, Value};
use tracing::warn;

use crate::app::AppState;
use crate::session::SESSION_COOKIE;

/// Extension carrying the authenticated teacher through the request
#[derive(Clone)]
pub struct AuthTeacher {
    pub username: String,
}

/// Extract the session token from the request's cookie header, if any
pub fn session_token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .into_iter()
        .filter_map(|value| value.to_str().ok())
        .map(std::borrow::ToOwned::to_owned)
        .flat_map(Cookie::split_parse)
        .filter_map(std::result::Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(|cookie| cookie.value().to_owned())
}

/// Gate for the mutating roster endpoints.
///
/// Resolves the session cookie and stores the teacher in the request
/// extensions; requests without a valid session are rejected with 401.
pub async fn require_teacher(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let username = match session_token_from_headers(request.headers()) {
        Some(token) => match state.sessions.resolve(&token).await {
            Ok(username) => username,
            Err(e) => {
                warn!("Session lookup failed: {}", e);
                None
            }
        },
        None => None,
    };

    match username {
        Some(username) => {
            request.extensions_mut().insert(AuthTeacher { username });
            Ok(next.run(request).await)
        }
        None => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Only logged-in teachers can register or unregister students"
            })),
        )),
    }
}
