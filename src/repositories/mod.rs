//! Repository layer for user storage.
//!
//! Handlers depend only on the [`UserRepository`] contract; concrete
//! backends live alongside it and are chosen at startup.

pub mod in_memory;
pub mod user_repository;

pub use in_memory::InMemoryUserRepository;
pub use user_repository::{RepositoryError, UserRepository};
