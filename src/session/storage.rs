// Session storage backends

use super::types::Session;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Trait for session storage backends
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Store a new session, keyed by its token
    async fn insert(&self, session: Session) -> Result<(), String>;

    /// Get a session by token
    async fn get(&self, token: &str) -> Result<Option<Session>, String>;

    /// Remove a session; removing an absent token is not an error
    async fn remove(&self, token: &str) -> Result<(), String>;
}

/// In-memory session storage implementation
pub struct MemorySessionStorage {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemorySessionStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStorage for MemorySessionStorage {
    async fn insert(&self, session: Session) -> Result<(), String> {
        let mut sessions = self.sessions.write().await;
        debug!("Storing session for teacher {}", session.username);
        sessions.insert(session.token.clone(), session);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<Session>, String> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<(), String> {
        let mut sessions = self.sessions.write().await;
        if sessions.remove(token).is_some() {
            debug!("Removed session");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get_session() {
        let storage = MemorySessionStorage::new();

        let session = Session::new("token-123".to_string(), "mr.smith".to_string());
        storage.insert(session).await.unwrap();

        let retrieved = storage.get("token-123").await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().username, "mr.smith");
    }

    #[tokio::test]
    async fn test_get_unknown_token() {
        let storage = MemorySessionStorage::new();

        let retrieved = storage.get("never-issued").await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let storage = MemorySessionStorage::new();

        let session = Session::new("token-123".to_string(), "mr.smith".to_string());
        storage.insert(session).await.unwrap();

        storage.remove("token-123").await.unwrap();
        assert!(storage.get("token-123").await.unwrap().is_none());

        // A second removal succeeds silently
        storage.remove("token-123").await.unwrap();
    }
}
