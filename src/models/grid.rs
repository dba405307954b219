use serde::Serialize;
use std::collections::HashSet;

use super::seat::{Seat, SeatId, SeatStatus};

/// Зал фиксированного размера: `rows` рядов по `seats_per_row` мест.
///
/// `Clone` - глубокая копия, места не разделяются между копиями.
/// Все спекулятивные изменения делаются на клоне.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatGrid {
    rows: usize,
    seats_per_row: usize,
    seats: Vec<Vec<Seat>>,
}

impl SeatGrid {
    // Все места свободны
    pub fn new(rows: usize, seats_per_row: usize) -> Self {
        let seats = (0..rows)
            .map(|row| (0..seats_per_row).map(|column| Seat::available(row, column)).collect())
            .collect();

        Self { rows, seats_per_row, seats }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.seats_per_row
    }

    pub fn seat(&self, row: usize, column: usize) -> Option<&Seat> {
        self.seats.get(row).and_then(|r| r.get(column))
    }

    pub(crate) fn seat_mut(&mut self, row: usize, column: usize) -> Option<&mut Seat> {
        self.seats.get_mut(row).and_then(|r| r.get_mut(column))
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Seat]> {
        self.seats.iter().map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().flatten()
    }

    pub fn count_by_status(&self, status: SeatStatus) -> usize {
        self.iter().filter(|seat| seat.status == status).count()
    }

    pub fn selected_count(&self) -> usize {
        self.count_by_status(SeatStatus::Selected)
    }

    pub fn booked_count(&self) -> usize {
        self.count_by_status(SeatStatus::Booked)
    }

    pub fn available_count(&self) -> usize {
        self.count_by_status(SeatStatus::Available)
    }

    /// Идентификаторы мест в данном статусе, в порядке ряд/место.
    pub fn ids_with_status(&self, status: SeatStatus) -> Vec<SeatId> {
        self.iter()
            .filter(|seat| seat.status == status)
            .map(|seat| seat.id)
            .collect()
    }

    // Переводит все места из одного статуса в другой
    pub(crate) fn transition_all(&mut self, from: SeatStatus, to: SeatStatus) -> usize {
        let mut changed = 0;
        for seat in self.seats.iter_mut().flatten() {
            if seat.status == from {
                seat.status = to;
                changed += 1;
            }
        }
        changed
    }

    /// Накатывает сохранённые брони на сетку.
    ///
    /// Идентификаторы вне сетки игнорируются. Возвращает число мест,
    /// ставших `Booked`.
    pub fn apply_booked<'a, I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a SeatId>,
    {
        let booked: HashSet<&SeatId> = ids.into_iter().collect();
        let mut restored = 0;
        for seat in self.seats.iter_mut().flatten() {
            if booked.contains(&seat.id) && seat.status != SeatStatus::Booked {
                seat.status = SeatStatus::Booked;
                restored += 1;
            }
        }
        restored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_available() {
        let grid = SeatGrid::new(8, 10);
        assert_eq!(grid.capacity(), 80);
        assert_eq!(grid.available_count(), 80);
        assert_eq!(grid.selected_count(), 0);
        assert_eq!(grid.booked_count(), 0);
        assert_eq!(grid.seat(3, 4).unwrap().id, SeatId::new(3, 4));
        assert!(grid.seat(8, 0).is_none());
        assert!(grid.seat(0, 10).is_none());
    }

    #[test]
    fn test_clone_does_not_alias_seats() {
        let original = SeatGrid::new(2, 3);
        let mut copy = original.clone();
        copy.seat_mut(1, 1).unwrap().status = SeatStatus::Selected;

        assert_eq!(original.seat(1, 1).unwrap().status, SeatStatus::Available);
        assert_eq!(copy.selected_count(), 1);
    }

    #[test]
    fn test_apply_booked_ignores_unknown_ids() {
        let mut grid = SeatGrid::new(8, 10);
        let ids = vec![SeatId::new(0, 1), SeatId::new(7, 9), SeatId::new(8, 0), SeatId::new(0, 42)];

        assert_eq!(grid.apply_booked(&ids), 2);
        assert_eq!(grid.ids_with_status(SeatStatus::Booked), vec![SeatId::new(0, 1), SeatId::new(7, 9)]);
    }

    #[test]
    fn test_transition_all() {
        let mut grid = SeatGrid::new(1, 4);
        grid.seat_mut(0, 0).unwrap().status = SeatStatus::Selected;
        grid.seat_mut(0, 3).unwrap().status = SeatStatus::Selected;

        assert_eq!(grid.transition_all(SeatStatus::Selected, SeatStatus::Booked), 2);
        assert_eq!(grid.booked_count(), 2);
        assert_eq!(grid.selected_count(), 0);
    }
}
