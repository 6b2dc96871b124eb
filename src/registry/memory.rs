// In-memory activity registry

use super::{ActivityStore, RegistryError};
use crate::models::Activity;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// In-memory activity store. All reads and mutations are serialized through
/// a single read-write lock; nothing is persisted across restarts.
pub struct MemoryActivityRegistry {
    activities: Arc<RwLock<HashMap<String, Activity>>>,
}

impl MemoryActivityRegistry {
    pub fn new() -> Self {
        Self {
            activities: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a registry pre-populated with a catalog
    pub fn with_activities(activities: HashMap<String, Activity>) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }
}

impl Default for MemoryActivityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityStore for MemoryActivityRegistry {
    async fn list_all(&self) -> Result<HashMap<String, Activity>, RegistryError> {
        let activities = self.activities.read().await;
        Ok(activities.clone())
    }

    async fn signup(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.activities.write().await;

        let activity = activities
            .get_mut(activity_name)
            .ok_or(RegistryError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RegistryError::AlreadyRegistered);
        }

        activity.participants.push(email.to_string());

        info!("Signed up {} for {}", email, activity_name);

        Ok(())
    }

    async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.activities.write().await;

        let activity = activities
            .get_mut(activity_name)
            .ok_or(RegistryError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RegistryError::NotRegistered)?;

        activity.participants.remove(position);

        info!("Unregistered {} from {}", email, activity_name);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_registry() -> MemoryActivityRegistry {
        let mut activities = HashMap::new();
        activities.insert(
            "Chess Club".to_string(),
            Activity {
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 2,
                participants: vec!["michael@mergington.edu".to_string()],
            },
        );
        MemoryActivityRegistry::with_activities(activities)
    }

    #[tokio::test]
    async fn test_signup_appends_in_order() {
        let registry = test_registry();

        registry
            .signup("Chess Club", "new@mergington.edu")
            .await
            .unwrap();
        registry
            .signup("Chess Club", "later@mergington.edu")
            .await
            .unwrap();

        let activities = registry.list_all().await.unwrap();
        assert_eq!(
            activities["Chess Club"].participants,
            vec![
                "michael@mergington.edu",
                "new@mergington.edu",
                "later@mergington.edu"
            ]
        );
    }

    #[tokio::test]
    async fn test_duplicate_signup_is_rejected() {
        let registry = test_registry();

        let result = registry.signup("Chess Club", "michael@mergington.edu").await;
        assert_eq!(result, Err(RegistryError::AlreadyRegistered));

        let activities = registry.list_all().await.unwrap();
        assert_eq!(activities["Chess Club"].participants.len(), 1);
    }

    #[tokio::test]
    async fn test_signup_does_not_check_capacity() {
        let registry = test_registry();

        // max_participants is 2; a third and fourth signup still succeed
        for email in ["a@mergington.edu", "b@mergington.edu", "c@mergington.edu"] {
            registry.signup("Chess Club", email).await.unwrap();
        }

        let activities = registry.list_all().await.unwrap();
        assert_eq!(activities["Chess Club"].participants.len(), 4);
    }

    #[tokio::test]
    async fn test_unregister_removes_participant() {
        let registry = test_registry();

        registry
            .unregister("Chess Club", "michael@mergington.edu")
            .await
            .unwrap();

        let activities = registry.list_all().await.unwrap();
        assert!(activities["Chess Club"].participants.is_empty());
    }

    #[tokio::test]
    async fn test_unregister_absent_email_is_rejected() {
        let registry = test_registry();

        let result = registry.unregister("Chess Club", "ghost@mergington.edu").await;
        assert_eq!(result, Err(RegistryError::NotRegistered));

        let activities = registry.list_all().await.unwrap();
        assert_eq!(activities["Chess Club"].participants.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_activity_is_not_found() {
        let registry = test_registry();

        assert_eq!(
            registry.signup("Knitting Club", "a@mergington.edu").await,
            Err(RegistryError::ActivityNotFound)
        );
        assert_eq!(
            registry
                .unregister("Knitting Club", "a@mergington.edu")
                .await,
            Err(RegistryError::ActivityNotFound)
        );
    }

    #[tokio::test]
    async fn test_list_all_returns_snapshot() {
        let registry = test_registry();

        let mut snapshot = registry.list_all().await.unwrap();
        snapshot
            .get_mut("Chess Club")
            .unwrap()
            .participants
            .push("mutated@mergington.edu".to_string());

        // Mutating the snapshot does not touch the store
        let activities = registry.list_all().await.unwrap();
        assert_eq!(activities["Chess Club"].participants.len(), 1);
    }
}
