//! bookings.rs
//!
//! Запись проданных мест: JSON-массив идентификаторов `"<row>-<column>"`
//! под одним ключом. Ошибки хранилища и разбора наружу не выходят:
//! в худшем случае считаем, что броней нет.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::models::SeatId;
use crate::storage::BookingStore;

#[derive(Debug, thiserror::Error)]
enum RecordError {
    #[error("record is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("record is not a list")]
    NotAList,
    #[error("record is an empty list")]
    Empty,
}

// Нестроковые и неразборчивые элементы просто пропускаем
fn parse_record(raw: &str) -> Result<Vec<SeatId>, RecordError> {
    let entries = match serde_json::from_str::<Value>(raw)? {
        Value::Array(entries) => entries,
        _ => return Err(RecordError::NotAList),
    };

    if entries.is_empty() {
        return Err(RecordError::Empty);
    }

    Ok(entries
        .iter()
        .filter_map(Value::as_str)
        .filter_map(|id| id.parse().ok())
        .collect())
}

impl BookingStore {
    /// Перезаписывает запись полным набором проданных мест.
    pub async fn save(&self, booked: &[SeatId]) {
        let Some(backend) = &self.backend else {
            return;
        };

        let data = match serde_json::to_string(booked) {
            Ok(data) => data,
            Err(e) => {
                warn!("Failed to serialize booked seats: {}", e);
                return;
            }
        };

        match backend.set(&self.key, &data).await {
            Ok(()) => info!("Persisted {} booked seats under '{}'", booked.len(), self.key),
            Err(e) => warn!("Failed to persist booked seats: {}", e),
        }
    }

    /// Читает сохранённые брони.
    ///
    /// Нет записи или это не непустой список - пустой результат. Битый JSON
    /// удаляется из хранилища, чтобы не читать его снова.
    pub async fn load(&self) -> Vec<SeatId> {
        let Some(backend) = &self.backend else {
            return Vec::new();
        };

        let raw = match backend.get(&self.key).await {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read booked seats, starting empty: {}", e);
                return Vec::new();
            }
        };

        match parse_record(&raw) {
            Ok(ids) => ids,
            Err(RecordError::Malformed(e)) => {
                warn!("Corrupt booking record under '{}', discarding: {}", self.key, e);
                self.clear().await;
                Vec::new()
            }
            Err(e) => {
                debug!("Ignoring booking record under '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    pub async fn clear(&self) {
        let Some(backend) = &self.backend else {
            return;
        };

        if let Err(e) = backend.remove(&self.key).await {
            warn!("Failed to erase booking record: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore, StoreError};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Arc;

    const KEY: &str = "bookedSeats";

    fn store_with(raw: &str) -> (Arc<MemoryStore>, BookingStore) {
        let backend = Arc::new(MemoryStore::with_entry(KEY, raw));
        let store = BookingStore::new(backend.clone(), KEY);
        (backend, store)
    }

    // Хранилище, которое всегда недоступно
    struct DownStore;

    #[async_trait]
    impl KeyValueStore for DownStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(redis::RedisError::from((redis::ErrorKind::IoError, "connection refused")).into())
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(redis::RedisError::from((redis::ErrorKind::IoError, "connection refused")).into())
        }

        async fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(redis::RedisError::from((redis::ErrorKind::IoError, "connection refused")).into())
        }
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let backend = Arc::new(MemoryStore::new());
        let store = BookingStore::new(backend.clone(), KEY);
        let ids = vec![SeatId::new(0, 1), SeatId::new(7, 9), SeatId::new(3, 0)];

        store.save(&ids).await;
        assert_eq!(
            backend.get(KEY).await.unwrap().as_deref(),
            Some(r#"["0-1","7-9","3-0"]"#)
        );

        let loaded: HashSet<_> = store.load().await.into_iter().collect();
        assert_eq!(loaded, ids.into_iter().collect());
    }

    #[tokio::test]
    async fn test_missing_record_is_empty() {
        let store = BookingStore::new(Arc::new(MemoryStore::new()), KEY);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_record_is_erased() {
        let (backend, store) = store_with("not-json");

        assert!(store.load().await.is_empty());
        assert_eq!(backend.get(KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_wrong_shape_is_ignored_but_kept() {
        for raw in [r#"{"seats":["0-1"]}"#, "[]", "42"] {
            let (backend, store) = store_with(raw);
            assert!(store.load().await.is_empty(), "raw = {raw}");
            assert_eq!(backend.get(KEY).await.unwrap().as_deref(), Some(raw));
        }
    }

    #[tokio::test]
    async fn test_bad_entries_are_skipped() {
        let (_, store) = store_with(r#"["0-1", 5, "bogus", null, "2-3"]"#);
        assert_eq!(store.load().await, vec![SeatId::new(0, 1), SeatId::new(2, 3)]);
    }

    #[tokio::test]
    async fn test_clear_erases_record() {
        let (backend, store) = store_with(r#"["0-1"]"#);
        store.clear().await;
        assert_eq!(backend.get(KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_disabled_store_is_noop() {
        let store = BookingStore::disabled(KEY);
        assert!(!store.is_enabled());
        store.save(&[SeatId::new(1, 1)]).await;
        assert!(store.load().await.is_empty());
        store.clear().await;
    }

    #[tokio::test]
    async fn test_unavailable_store_degrades_to_empty() {
        let store = BookingStore::new(Arc::new(DownStore), KEY);
        store.save(&[SeatId::new(1, 1)]).await;
        assert!(store.load().await.is_empty());
        store.clear().await;
    }
}
