//! workflow.rs
//!
//! Сессия бронирования - единый объект состояния процесса:
//! зал, фаза (ожидание / ждём подтверждения), последнее сообщение
//! и хранилище проданных мест.
//!
//! Переходы:
//! - `Idle` --request_booking--> `PendingConfirmation(summary)`
//! - `PendingConfirmation` --confirm--> `Idle` (выбранные места проданы и сохранены)
//! - `PendingConfirmation` --cancel--> `Idle` (места не меняются)
//! - любое состояние --reset--> `Idle` с пустым залом и стёртой записью
//!
//! Каждое действие сначала сбрасывает прошлое сообщение; ошибка или успех
//! записывают новое.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::BookingConfig;
use crate::error::BookingError;
use crate::models::{
    BookingPhase, BookingReceipt, BookingSummary, Notice, SeatGrid, SeatStatus, SessionView,
};
use crate::services::continuity::is_valid_continuity;
use crate::services::selection::{self, ToggleOutcome};
use crate::storage::BookingStore;

pub struct BookingSession {
    config: BookingConfig,
    grid: SeatGrid,
    phase: BookingPhase,
    notice: Option<Notice>,
    store: BookingStore,
}

impl BookingSession {
    pub fn new(config: BookingConfig, store: BookingStore) -> Self {
        let grid = SeatGrid::new(config.rows, config.seats_per_row);
        Self {
            config,
            grid,
            phase: BookingPhase::Idle,
            notice: None,
            store,
        }
    }

    /// Новый зал с накатанными сохранёнными бронями.
    pub async fn restore(config: BookingConfig, store: BookingStore) -> Self {
        let mut session = Self::new(config, store);
        let booked = session.store.load().await;
        let restored = session.grid.apply_booked(&booked);
        info!("Restored {} booked seats ({} ids in record)", restored, booked.len());
        session
    }

    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    pub fn phase(&self) -> BookingPhase {
        self.phase
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    pub fn total_price(&self) -> u64 {
        self.config.pricing.total_price(&self.grid)
    }

    pub fn view(&self) -> SessionView {
        SessionView::build(
            &self.grid,
            &self.config.pricing,
            self.config.max_seats_per_booking,
            self.phase,
            self.notice.clone(),
        )
    }

    // === Выбор мест ===

    pub fn toggle_seat(&mut self, row: usize, column: usize) -> Result<ToggleOutcome, BookingError> {
        self.notice = None;
        self.ensure_idle("toggle_seat")?;

        match selection::toggle_seat(&self.grid, row, column, self.config.max_seats_per_booking) {
            Ok((grid, outcome)) => {
                self.grid = grid;
                Ok(outcome)
            }
            Err(e) => Err(self.reject(e)),
        }
    }

    pub fn remove_seat(&mut self, row: usize, column: usize) -> Result<(), BookingError> {
        self.notice = None;
        self.ensure_idle("remove_seat")?;
        self.grid = selection::remove_seat(&self.grid, row, column);
        Ok(())
    }

    /// Снимает весь выбор и закрывает ожидающее подтверждение.
    /// Если ничего не выбрано - ничего не делает.
    pub fn clear_selection(&mut self) {
        if self.grid.selected_count() == 0 {
            return;
        }

        self.notice = None;
        self.phase = BookingPhase::Idle;
        self.grid = selection::clear_selection(&self.grid);
    }

    // === Бронирование ===

    /// `Ok(None)` - ничего не выбрано, фаза не меняется.
    pub fn request_booking(&mut self) -> Result<Option<BookingSummary>, BookingError> {
        self.notice = None;
        self.ensure_idle("request_booking")?;

        let count = self.grid.selected_count();
        if count == 0 {
            return Ok(None);
        }

        // Повторные проверки на случай, если выбор пришёл в обход selection
        if count > self.config.max_seats_per_booking {
            return Err(self.reject(BookingError::CapacityExceeded {
                max: self.config.max_seats_per_booking,
            }));
        }
        if !is_valid_continuity(&self.grid) {
            return Err(self.reject(BookingError::ContinuityViolation));
        }

        let summary = BookingSummary {
            count,
            total: self.total_price(),
        };
        self.phase = BookingPhase::PendingConfirmation(summary);
        debug!("Booking requested: {} seats, total {}", summary.count, summary.total);
        Ok(Some(summary))
    }

    pub async fn confirm(&mut self) -> Result<BookingReceipt, BookingError> {
        self.notice = None;
        let summary = match self.phase {
            BookingPhase::PendingConfirmation(summary) => summary,
            BookingPhase::Idle => {
                return Err(self.reject(BookingError::InvalidTransition {
                    action: "confirm",
                    phase: self.phase.name(),
                }))
            }
        };

        let seat_ids = self.grid.ids_with_status(SeatStatus::Selected);
        let mut booked = self.grid.clone();
        booked.transition_all(SeatStatus::Selected, SeatStatus::Booked);
        self.grid = booked;
        self.phase = BookingPhase::Idle;

        self.store.save(&self.grid.ids_with_status(SeatStatus::Booked)).await;

        self.notice = Some(Notice::success(format!(
            "Успешно забронировано мест: {} на сумму ₹{}",
            summary.count, summary.total
        )));
        info!("Booking confirmed: {} seats for {}", summary.count, summary.total);

        Ok(BookingReceipt {
            count: summary.count,
            total: summary.total,
            seat_ids,
            confirmed_at: Utc::now(),
        })
    }

    pub fn cancel(&mut self) -> Result<(), BookingError> {
        self.notice = None;
        if self.phase == BookingPhase::Idle {
            return Err(self.reject(BookingError::InvalidTransition {
                action: "cancel",
                phase: self.phase.name(),
            }));
        }

        self.phase = BookingPhase::Idle;
        debug!("Pending booking cancelled");
        Ok(())
    }

    /// Полный сброс: пустой зал тех же размеров, запись о бронях стирается.
    pub async fn reset(&mut self) {
        warn!("RESET: clearing all seats and the booking record");
        self.notice = None;
        self.phase = BookingPhase::Idle;
        self.grid = SeatGrid::new(self.config.rows, self.config.seats_per_row);
        self.store.clear().await;
    }

    // === Утилиты ===

    fn ensure_idle(&mut self, action: &'static str) -> Result<(), BookingError> {
        if self.phase == BookingPhase::Idle {
            return Ok(());
        }
        Err(self.reject(BookingError::InvalidTransition {
            action,
            phase: self.phase.name(),
        }))
    }

    // Ошибка становится сообщением пользователю; состояние не меняется
    fn reject(&mut self, error: BookingError) -> BookingError {
        debug!("Rejected: {}", error);
        self.notice = Some(Notice::error(error.to_string()));
        error
    }
}
