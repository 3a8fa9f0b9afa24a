//! Repository trait and error types for temple roster storage.
//!
//! The hosted relational backend owns the canonical roster; this trait is the
//! caller-side seam the prediction endpoints use to obtain it. The crate
//! ships an in-memory implementation ([`crate::db::repositories::LocalRepository`])
//! for the server default and for tests.

use async_trait::async_trait;

use crate::api::{TempleId, TempleRef};

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Roster data failed validation (duplicate ids, empty fields, ...).
    #[error("Data validation error: {0}")]
    Validation(String),

    /// Configuration or initialization error (bad roster file, ...).
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Storage abstraction over the temple roster.
#[async_trait]
pub trait TempleRepository: Send + Sync {
    /// All temples, in roster order.
    async fn list_temples(&self) -> RepositoryResult<Vec<TempleRef>>;

    /// A single temple by id.
    async fn get_temple(&self, id: &TempleId) -> RepositoryResult<TempleRef>;

    /// Insert or replace a temple entry.
    async fn store_temple(&self, temple: TempleRef) -> RepositoryResult<()>;

    /// Replace the whole roster.
    async fn replace_roster(&self, temples: Vec<TempleRef>) -> RepositoryResult<()>;

    /// True when the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
