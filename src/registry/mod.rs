// Activity registry abstraction
// Provides pluggable storage for the activity catalog and its rosters.
// The registry is auth-agnostic; authentication is enforced by the HTTP layer.

pub mod memory;

pub use memory::MemoryActivityRegistry;

use crate::models::Activity;
use async_trait::async_trait;
use std::collections::HashMap;

/// Registry errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Unknown activity name
    ActivityNotFound,
    /// The email is already on the roster
    AlreadyRegistered,
    /// The email is not on the roster
    NotRegistered,
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::ActivityNotFound => write!(f, "Activity not found"),
            RegistryError::AlreadyRegistered => write!(f, "Student is already signed up"),
            RegistryError::NotRegistered => {
                write!(f, "Student is not signed up for this activity")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Storage trait for the activity catalog
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Full snapshot of the catalog, keyed by activity name
    async fn list_all(&self) -> Result<HashMap<String, Activity>, RegistryError>;

    /// Add an email to an activity's roster; signup order is preserved
    async fn signup(&self, activity_name: &str, email: &str) -> Result<(), RegistryError>;

    /// Remove an email from an activity's roster
    async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RegistryError>;
}
