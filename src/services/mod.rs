pub mod continuity;
pub mod selection;
pub mod workflow;

pub use continuity::is_valid_continuity;
pub use selection::ToggleOutcome;
pub use workflow::BookingSession;
