//! Storage contract for user records.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::User;

/// Failures raised by a storage backend.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backend could not be reached.
    #[allow(dead_code)]
    #[error("user repository unavailable: {message}")]
    Unavailable { message: String },
    /// A read or write failed while executing.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

/// Repository for user records.
///
/// Absence is a normal outcome and is reported as `Ok(None)`, never as an error.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by identifier.
    async fn fetch(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// Store a new user. The backend assigns the identifiers; whatever the
    /// caller put in `user.id` is discarded. Returns the stored record.
    async fn create(&self, user: User) -> Result<User, RepositoryError>;

    /// Atomically replace the record stored under `id`.
    ///
    /// Returns `Ok(None)` when no record exists for `id`, otherwise the stored
    /// replacement, whose identifier is always `id`.
    async fn replace(&self, id: Uuid, user: User) -> Result<Option<User>, RepositoryError>;
}
