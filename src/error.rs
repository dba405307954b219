//! error.rs
//!
//! Ошибки, которые видит пользователь. Все они восстановимы: состояние
//! зала при ошибке не меняется, сообщение заменяет предыдущее.
//! Сбои хранилища сюда не попадают - они гасятся в `storage`.

use axum::http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("За одно бронирование можно выбрать не более {max} мест")]
    CapacityExceeded { max: usize },

    #[error("Нельзя оставлять одно свободное место между занятыми")]
    ContinuityViolation,

    #[error("Действие {action} недоступно в состоянии {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: &'static str,
    },

    #[error("Место {row}-{column} не найдено")]
    SeatNotFound { row: usize, column: usize },
}

impl BookingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookingError::SeatNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::CONFLICT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_and_codes() {
        let err = BookingError::CapacityExceeded { max: 8 };
        assert!(err.to_string().contains('8'));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);

        let err = BookingError::SeatNotFound { row: 9, column: 1 };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("9-1"));
    }
}
