use async_trait::async_trait;
use std::sync::Arc;

pub mod bookings;
pub mod memory;

pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Внешнее хранилище ключ-значение: get/set/remove по строковому ключу.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

// Хранилище проданных мест. Без бэкенда все операции - тихий no-op
#[derive(Clone)]
pub struct BookingStore {
    backend: Option<Arc<dyn KeyValueStore>>,
    key: String,
}

impl BookingStore {
    pub fn new(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self { backend: Some(backend), key: key.into() }
    }

    pub fn disabled(key: impl Into<String>) -> Self {
        Self { backend: None, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }
}
