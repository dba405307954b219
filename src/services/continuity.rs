//! continuity.rs
//!
//! Правило непрерывности: свободное место внутри ряда не может оказаться
//! зажатым между двумя занятыми (выбранными или проданными) соседями.
//! Крайние места ряда не проверяются. Проверка всегда идёт по всему
//! снимку зала, а не инкрементально.

use crate::models::{SeatGrid, SeatId};

/// Первое изолированное свободное место (по рядам слева направо), если есть.
pub fn find_isolated_seat(grid: &SeatGrid) -> Option<SeatId> {
    grid.iter_rows().find_map(|row| {
        row.windows(3)
            .find(|w| w[1].is_available() && !w[0].is_available() && !w[2].is_available())
            .map(|w| w[1].id)
    })
}

pub fn is_valid_continuity(grid: &SeatGrid) -> bool {
    find_isolated_seat(grid).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeatStatus;

    fn grid_with(row: &[SeatStatus]) -> SeatGrid {
        let mut grid = SeatGrid::new(1, row.len());
        for (column, status) in row.iter().enumerate() {
            grid.seat_mut(0, column).unwrap().status = *status;
        }
        grid
    }

    use crate::models::SeatStatus::{Available as A, Booked as B, Selected as S};

    #[test]
    fn test_empty_grid_is_valid() {
        assert!(is_valid_continuity(&SeatGrid::new(8, 10)));
    }

    #[test]
    fn test_gap_between_selected_is_invalid() {
        let grid = grid_with(&[S, A, S, A, A]);
        assert!(!is_valid_continuity(&grid));
        assert_eq!(find_isolated_seat(&grid), Some(SeatId::new(0, 1)));
    }

    #[test]
    fn test_gap_between_selected_and_booked_is_invalid() {
        let grid = grid_with(&[A, A, B, A, S, A]);
        assert_eq!(find_isolated_seat(&grid), Some(SeatId::new(0, 3)));
    }

    #[test]
    fn test_edge_seats_are_not_checked() {
        // A на краях зажата только с одной стороны
        assert!(is_valid_continuity(&grid_with(&[A, S, S, S, A])));
        assert!(is_valid_continuity(&grid_with(&[A, B])));
    }

    #[test]
    fn test_two_seat_gap_is_fine() {
        assert!(is_valid_continuity(&grid_with(&[S, A, A, B])));
    }

    #[test]
    fn test_short_rows() {
        assert!(is_valid_continuity(&SeatGrid::new(3, 0)));
        assert!(is_valid_continuity(&grid_with(&[S])));
        assert!(is_valid_continuity(&grid_with(&[S, A])));
    }
}
