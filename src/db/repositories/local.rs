//! In-memory temple repository.
//!
//! Backs the server by default and keeps tests hermetic. Seeded with the
//! built-in roster unless constructed empty or replaced from a roster file.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{TempleId, TempleRef};
use crate::db::repository::{RepositoryError, RepositoryResult, TempleRepository};
use crate::models::temple::seed_roster;

/// In-memory implementation of [`TempleRepository`].
pub struct LocalRepository {
    temples: RwLock<Vec<TempleRef>>,
}

impl LocalRepository {
    /// Empty repository.
    pub fn new() -> Self {
        Self {
            temples: RwLock::new(Vec::new()),
        }
    }

    /// Repository seeded with the built-in six-temple roster.
    pub fn with_seed_roster() -> Self {
        Self {
            temples: RwLock::new(seed_roster()),
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TempleRepository for LocalRepository {
    async fn list_temples(&self) -> RepositoryResult<Vec<TempleRef>> {
        Ok(self.temples.read().clone())
    }

    async fn get_temple(&self, id: &TempleId) -> RepositoryResult<TempleRef> {
        self.temples
            .read()
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("temple '{}'", id)))
    }

    async fn store_temple(&self, temple: TempleRef) -> RepositoryResult<()> {
        if temple.id.as_str().is_empty() {
            return Err(RepositoryError::Validation(
                "temple id must not be empty".to_string(),
            ));
        }

        let mut temples = self.temples.write();
        match temples.iter_mut().find(|t| t.id == temple.id) {
            Some(existing) => *existing = temple,
            None => temples.push(temple),
        }
        Ok(())
    }

    async fn replace_roster(&self, roster: Vec<TempleRef>) -> RepositoryResult<()> {
        for temple in &roster {
            if temple.id.as_str().is_empty() {
                return Err(RepositoryError::Validation(
                    "temple id must not be empty".to_string(),
                ));
            }
        }

        *self.temples.write() = roster;
        Ok(())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
