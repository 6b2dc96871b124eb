// Session types and data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "teacher_session";

/// Client-side cookie lifetime hint (8 hours). The server never expires
/// sessions on its own; a token stays valid until logout or restart.
pub const SESSION_COOKIE_MAX_AGE_SECS: i64 = 8 * 60 * 60;

/// Bytes of entropy behind each session token
pub const TOKEN_ENTROPY_BYTES: usize = 32;

/// An authenticated teacher session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque URL-safe token, also the storage key
    pub token: String,
    /// Username of the teacher this session belongs to
    pub username: String,
    /// When the session was created
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: String, username: String) -> Self {
        Self {
            token,
            username,
            created_at: Utc::now(),
        }
    }
}
