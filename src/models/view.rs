use serde::Serialize;

use super::booking::{BookingPhase, Notice};
use super::grid::SeatGrid;
use super::pricing::{PricingPolicy, TierInfo};
use super::seat::{row_letter, Seat, SeatId, SeatStatus};

// Снимок для отрисовки: всё, что нужно UI, уже посчитано

#[derive(Debug, Clone, Serialize)]
pub struct SeatView {
    pub id: SeatId,
    pub label: String,
    pub row: usize,
    pub column: usize,
    pub status: SeatStatus,
    pub price: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowView {
    pub label: String,
    pub tier: TierInfo,
    pub seats: Vec<SeatView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatCounts {
    pub available: usize,
    pub selected: usize,
    pub booked: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub rows: Vec<RowView>,
    pub counts: SeatCounts,
    pub total_price: u64,
    pub max_seats_per_booking: usize,
    pub selected_seats: Vec<SeatView>,
    pub tiers: Vec<TierInfo>,
    pub phase: BookingPhase,
    pub notice: Option<Notice>,
}

impl SeatView {
    fn new(seat: &Seat, pricing: &PricingPolicy) -> Self {
        Self {
            id: seat.id,
            label: seat.id.label(),
            row: seat.id.row,
            column: seat.id.column,
            status: seat.status,
            price: pricing.price_of_seat(seat.id.row),
        }
    }
}

impl SessionView {
    pub fn build(
        grid: &SeatGrid,
        pricing: &PricingPolicy,
        max_seats_per_booking: usize,
        phase: BookingPhase,
        notice: Option<Notice>,
    ) -> Self {
        let rows = grid
            .iter_rows()
            .enumerate()
            .map(|(index, seats)| RowView {
                label: row_letter(index),
                tier: pricing.tier_of(index),
                seats: seats.iter().map(|seat| SeatView::new(seat, pricing)).collect(),
            })
            .collect();

        let selected_seats = grid
            .iter()
            .filter(|seat| seat.status == SeatStatus::Selected)
            .map(|seat| SeatView::new(seat, pricing))
            .collect();

        Self {
            rows,
            counts: SeatCounts {
                available: grid.available_count(),
                selected: grid.selected_count(),
                booked: grid.booked_count(),
                total: grid.capacity(),
            },
            total_price: pricing.total_price(grid),
            max_seats_per_booking,
            selected_seats,
            tiers: pricing.legend(),
            phase,
            notice,
        }
    }
}
