//! selection.rs
//!
//! Выбор мест. Все функции чистые: принимают снимок зала и возвращают новый.
//! Изменение сначала делается на клоне, затем клон проверяется и только
//! после этого отдаётся наружу. При ошибке исходный снимок не тронут.

use serde::Serialize;
use tracing::debug;

use crate::error::BookingError;
use crate::models::{SeatGrid, SeatStatus};
use crate::services::continuity::find_isolated_seat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    // Место уже продано, ничего не изменилось
    Blocked,
}

pub fn toggle_seat(
    grid: &SeatGrid,
    row: usize,
    column: usize,
    max_seats: usize,
) -> Result<(SeatGrid, ToggleOutcome), BookingError> {
    let target = grid
        .seat(row, column)
        .ok_or(BookingError::SeatNotFound { row, column })?;

    match target.status {
        SeatStatus::Booked => Ok((grid.clone(), ToggleOutcome::Blocked)),
        SeatStatus::Selected => {
            // Снятие выбора только добавляет свободных мест - без проверки
            let mut updated = grid.clone();
            set_status(&mut updated, row, column, SeatStatus::Available);
            Ok((updated, ToggleOutcome::Deselected))
        }
        SeatStatus::Available => {
            if grid.selected_count() >= max_seats {
                return Err(BookingError::CapacityExceeded { max: max_seats });
            }

            let mut candidate = grid.clone();
            set_status(&mut candidate, row, column, SeatStatus::Selected);

            if let Some(isolated) = find_isolated_seat(&candidate) {
                debug!("Selecting {}-{} would isolate seat {}", row, column, isolated);
                return Err(BookingError::ContinuityViolation);
            }

            Ok((candidate, ToggleOutcome::Selected))
        }
    }
}

/// Снимает выбор со всех мест. Если выбранных нет - возвращает копию как есть.
pub fn clear_selection(grid: &SeatGrid) -> SeatGrid {
    let mut cleared = grid.clone();
    cleared.transition_all(SeatStatus::Selected, SeatStatus::Available);
    cleared
}

// Удаление из списка выбранных: для невыбранного места (и несуществующего) - no-op
pub fn remove_seat(grid: &SeatGrid, row: usize, column: usize) -> SeatGrid {
    let mut updated = grid.clone();
    if let Some(seat) = updated.seat_mut(row, column) {
        if seat.status == SeatStatus::Selected {
            seat.status = SeatStatus::Available;
        }
    }
    updated
}

fn set_status(grid: &mut SeatGrid, row: usize, column: usize, status: SeatStatus) {
    if let Some(seat) = grid.seat_mut(row, column) {
        seat.status = status;
    }
}
