pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod redis_client;
pub mod controllers;

use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::services::BookingSession;
use crate::storage::{BookingStore, MemoryStore};

// Shared state для всего приложения.
// Все действия с залом идут через один мьютекс - по одному за раз,
// включая запись в хранилище.
pub struct AppState {
    pub session: Mutex<BookingSession>,
    pub config: config::Config,
}

impl AppState {
    pub async fn new(config: config::Config) -> Arc<Self> {
        let store = open_store(&config.storage).await;
        let session = BookingSession::restore(config.booking.clone(), store).await;
        Self::with_session(config, session)
    }

    pub fn with_session(config: config::Config, session: BookingSession) -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(session),
            config,
        })
    }
}

// Redis, если задан и доступен; без REDIS_URL - память процесса;
// Redis недоступен - работаем без сохранения
pub async fn open_store(config: &config::StorageConfig) -> BookingStore {
    let Some(url) = &config.redis_url else {
        info!("REDIS_URL not set, keeping bookings in memory");
        return BookingStore::new(Arc::new(MemoryStore::new()), config.booking_key.clone());
    };

    match redis_client::RedisClient::new(url).await {
        Ok(redis) => {
            info!("Redis connected");
            BookingStore::new(Arc::new(redis), config.booking_key.clone())
        }
        Err(e) => {
            warn!("Redis unavailable, bookings will not be persisted: {}", e);
            BookingStore::disabled(config.booking_key.clone())
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Seat Booking API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
