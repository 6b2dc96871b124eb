pub mod auth;

pub use auth::{require_teacher, session_token_from_headers, AuthTeacher};
