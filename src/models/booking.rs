use chrono::{DateTime, Utc};
use serde::Serialize;

use super::seat::SeatId;

/// Итог выбора перед подтверждением: живёт только между запросом брони
/// и подтверждением/отменой, никогда не сохраняется.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookingSummary {
    pub count: usize,
    pub total: u64,
}

// Результат подтверждённой брони
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingReceipt {
    pub count: usize,
    pub total: u64,
    pub seat_ids: Vec<SeatId>,
    pub confirmed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "summary", rename_all = "snake_case")]
pub enum BookingPhase {
    Idle,
    PendingConfirmation(BookingSummary),
}

impl BookingPhase {
    pub fn name(&self) -> &'static str {
        match self {
            BookingPhase::Idle => "idle",
            BookingPhase::PendingConfirmation(_) => "pending_confirmation",
        }
    }

    pub fn pending_summary(&self) -> Option<&BookingSummary> {
        match self {
            BookingPhase::PendingConfirmation(summary) => Some(summary),
            BookingPhase::Idle => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Error,
    Success,
}

/// Последнее сообщение пользователю. Новое сообщение всегда заменяет старое.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_serialization() {
        let idle = serde_json::to_value(BookingPhase::Idle).unwrap();
        assert_eq!(idle, serde_json::json!({ "state": "idle" }));

        let pending = BookingPhase::PendingConfirmation(BookingSummary { count: 2, total: 1000 });
        let value = serde_json::to_value(pending).unwrap();
        assert_eq!(value["state"], "pending_confirmation");
        assert_eq!(value["summary"]["total"], 1000);
        assert_eq!(pending.name(), "pending_confirmation");
    }
}
