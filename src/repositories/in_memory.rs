//! In-memory user store backed by a sharded concurrent map.
//!
//! Every write to a given identifier holds that key's shard lock, so concurrent
//! replaces of the same record are serialized and a reader never sees a
//! half-written user.

use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::User;
use crate::repositories::{RepositoryError, UserRepository};

/// Thread-safe user store using DashMap for concurrent access.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<DashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn fetch(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        debug!("Repository: Finding user by ID: {}", id);
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn create(&self, mut user: User) -> Result<User, RepositoryError> {
        user.assign_new_ids();
        let id = user.id.ok_or_else(|| RepositoryError::Query {
            message: "identifier was not assigned".to_string(),
        })?;

        self.users.insert(id, user.clone());
        debug!("Repository: Inserted user {}", id);
        Ok(user)
    }

    async fn replace(&self, id: Uuid, mut user: User) -> Result<Option<User>, RepositoryError> {
        let Some(mut entry) = self.users.get_mut(&id) else {
            debug!("Repository: Replace skipped, no user with ID: {}", id);
            return Ok(None);
        };

        user.id = Some(id);
        user.ensure_certificate_ids();
        *entry = user.clone();
        debug!("Repository: Replaced user {}", id);
        Ok(Some(user))
    }
}
