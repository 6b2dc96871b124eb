// Session manager for high-level session operations

use super::storage::SessionStorage;
use super::types::{Session, TOKEN_ENTROPY_BYTES};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;
use std::sync::Arc;
use tracing::{debug, info};

/// Session manager for handling session lifecycle
pub struct SessionManager {
    storage: Arc<dyn SessionStorage>,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Create a new session for a teacher and return it
    pub async fn create_session(&self, username: &str) -> Result<Session, String> {
        let session = Session::new(generate_token(), username.to_string());

        self.storage.insert(session.clone()).await?;

        info!("Created session for teacher {}", username);

        Ok(session)
    }

    /// Resolve a token to the teacher it belongs to.
    ///
    /// Returns `None` for tokens that are absent or were never issued.
    /// Sessions carry no server-side expiry; a token stays valid until it is
    /// destroyed or the process restarts.
    pub async fn resolve(&self, token: &str) -> Result<Option<String>, String> {
        let session = self.storage.get(token).await?;
        Ok(session.map(|s| s.username))
    }

    /// Destroy a session. Destroying an unknown token is a no-op.
    pub async fn destroy(&self, token: &str) -> Result<(), String> {
        self.storage.remove(token).await?;
        debug!("Destroyed session token");
        Ok(())
    }
}

/// Generate a cryptographically random, URL-safe session token
fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_ENTROPY_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
