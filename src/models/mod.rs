pub mod seat;
pub mod grid;
pub mod pricing;
pub mod booking;
pub mod view;

pub use seat::{Seat, SeatId, SeatStatus};
pub use grid::SeatGrid;
pub use pricing::{PricingPolicy, PricingTier, TierInfo};
pub use booking::{BookingPhase, BookingReceipt, BookingSummary, Notice, NoticeKind};
pub use view::{SeatCounts, SessionView};
