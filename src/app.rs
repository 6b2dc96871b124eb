// Application state and router assembly

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::seed_activities;
use crate::registry::{ActivityStore, MemoryActivityRegistry};
use crate::session::{MemorySessionStorage, SessionManager};

/// Shared application state, injected into the request layer
#[derive(Clone)]
pub struct AppState {
    /// Teacher credentials, read-only after startup
    pub credentials: Arc<HashMap<String, String>>,
    /// Active teacher sessions
    pub sessions: Arc<SessionManager>,
    /// Activity catalog and rosters
    pub activities: Arc<dyn ActivityStore>,
}

impl AppState {
    /// Build the state with the seed activity catalog and an empty session table
    pub fn new(credentials: Arc<HashMap<String, String>>) -> Self {
        let storage = Arc::new(MemorySessionStorage::new());

        Self {
            credentials,
            sessions: Arc::new(SessionManager::new(storage)),
            activities: Arc::new(MemoryActivityRegistry::with_activities(seed_activities())),
        }
    }
}

/// Build the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root::index))
        .route("/health", get(handlers::health::health_check))
        .route("/activities", get(handlers::activities::get_activities))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/status", get(handlers::auth::auth_status))
        // Protected roster mutations
        .route(
            "/activities/:activity_name/signup",
            post(handlers::activities::signup).layer(axum::middleware::from_fn_with_state(
                state.clone(),
                crate::middleware::auth::require_teacher,
            )),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(handlers::activities::unregister).layer(
                axum::middleware::from_fn_with_state(
                    state.clone(),
                    crate::middleware::auth::require_teacher,
                ),
            ),
        )
        // Static assets are served as opaque files
        .nest_service("/static", ServeDir::new("static"))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
