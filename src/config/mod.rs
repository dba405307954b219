use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::str::FromStr;

use crate::models::PricingPolicy;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub booking: BookingConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

// Настройки хранилища броней
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Без `REDIS_URL` брони живут в памяти процесса.
    pub redis_url: Option<String>,
    pub booking_key: String,
}

/// Параметры зала и правил бронирования.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookingConfig {
    pub rows: usize,
    pub seats_per_row: usize,
    pub max_seats_per_booking: usize,
    pub pricing: PricingPolicy,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            seats_per_row: 10,
            max_seats_per_booking: 8,
            pricing: PricingPolicy::default(),
        }
    }
}

pub const DEFAULT_BOOKING_KEY: &str = "bookedSeats";

// Читает переменную или берёт значение по умолчанию; мусор - ошибка с именем переменной
fn var_or<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number, got {:?}", name, raw)),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = BookingConfig::default();

        let booking = BookingConfig {
            rows: var_or("SEAT_ROWS", defaults.rows)?,
            seats_per_row: var_or("SEATS_PER_ROW", defaults.seats_per_row)?,
            max_seats_per_booking: var_or("MAX_SEATS_PER_BOOKING", defaults.max_seats_per_booking)?,
            pricing: PricingPolicy {
                premium_rows_end: var_or("PREMIUM_ROWS_END", defaults.pricing.premium_rows_end)?,
                standard_rows_end: var_or("STANDARD_ROWS_END", defaults.pricing.standard_rows_end)?,
                premium_price: var_or("PREMIUM_PRICE", defaults.pricing.premium_price)?,
                standard_price: var_or("STANDARD_PRICE", defaults.pricing.standard_price)?,
                economy_price: var_or("ECONOMY_PRICE", defaults.pricing.economy_price)?,
            },
        };

        if booking.pricing.standard_rows_end < booking.pricing.premium_rows_end {
            anyhow::bail!("STANDARD_ROWS_END must not be less than PREMIUM_ROWS_END");
        }

        Ok(Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: var_or("PORT", 8000)?,
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "seat_booking=debug,tower_http=debug".to_string()),
            },
            storage: StorageConfig {
                redis_url: env::var("REDIS_URL").ok().filter(|url| !url.trim().is_empty()),
                booking_key: env::var("BOOKING_STORAGE_KEY")
                    .unwrap_or_else(|_| DEFAULT_BOOKING_KEY.to_string()),
            },
            booking,
        })
    }
}
