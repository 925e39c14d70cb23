use crate::domain::repository::{MockDatabase, RepositoryError};
use crate::domain::user::User;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Mock database kept entirely in process memory.
///
/// Clones share the same underlying maps, so the handle given to the server
/// and the one kept by a test observe the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMockDatabase {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryMockDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MockDatabase for InMemoryMockDatabase {
    async fn save_user(&self, user: &User) -> Result<(), RepositoryError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(RepositoryError::Conflict(format!(
                "User with email {} already exists",
                user.email
            )));
        }
        if users.contains_key(&user.id) {
            return Err(RepositoryError::Conflict(format!(
                "User with id {} already exists",
                user.id
            )));
        }

        users.insert(user.id, user.clone());

        Ok(())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;

        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, RepositoryError> {
        let users = self.users.read().await;
        let mut items: Vec<User> = users.values().cloned().collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        Ok(items)
    }

    async fn clear_all_data(&self) -> Result<(), RepositoryError> {
        let mut users = self.users.write().await;
        let removed = users.len();
        users.clear();

        tracing::debug!(removed, "Mock database data removed");

        Ok(())
    }
}
