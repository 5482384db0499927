use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Named durable slots, each holding one serialized string value.
#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Read a slot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read. A missing slot is
    /// `Ok(None)`, not an error.
    async fn get_slot(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a slot, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put_slot(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a slot. Deleting a missing slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove_slot(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, e.g. with a corrupt value in tests.
    #[must_use]
    pub fn with_slot(self, key: &str, value: &str) -> Self {
        if let Ok(mut guard) = self.slots.lock() {
            guard.insert(key.to_string(), value.to_string());
        }
        self
    }
}

#[async_trait]
impl SlotRepository for InMemoryRepository {
    async fn get_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put_slot(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_slot(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Slot repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub slots: Arc<dyn SlotRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_repository(repo: impl SlotRepository + 'static) -> Self {
        Self {
            slots: Arc::new(repo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_overwrites_previous_value() {
        let repo = InMemoryRepository::new();
        repo.put_slot("k", "one").await.unwrap();
        repo.put_slot("k", "two").await.unwrap();
        assert_eq!(repo.get_slot("k").await.unwrap().as_deref(), Some("two"));
    }

    #[tokio::test]
    async fn missing_slot_is_none_and_remove_is_idempotent() {
        let repo = InMemoryRepository::new().with_slot("k", "v");
        repo.remove_slot("k").await.unwrap();
        repo.remove_slot("k").await.unwrap();
        assert!(repo.get_slot("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clones_share_slots() {
        let repo = InMemoryRepository::new();
        let storage = Storage::from_repository(repo.clone());
        storage.slots.put_slot("shared", "yes").await.unwrap();
        assert_eq!(repo.get_slot("shared").await.unwrap().as_deref(), Some("yes"));
    }
}
