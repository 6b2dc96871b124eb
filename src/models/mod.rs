pub mod activity;
pub mod auth;

pub use activity::{seed_activities, Activity};
pub use auth::{AuthStatus, LoginRequest, LoginResponse};
