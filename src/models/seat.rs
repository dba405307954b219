use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// Статус места: ровно один в каждый момент времени
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Selected,
    Booked,
}

/// Стабильный идентификатор места вида `"<row>-<column>"` (с нуля).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatId {
    pub row: usize,
    pub column: usize,
}

impl SeatId {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Человекочитаемая метка для UI: ряд буквой, место с единицы (`A-1`).
    pub fn label(&self) -> String {
        format!("{}-{}", row_letter(self.row), self.column + 1)
    }
}

// Буквы рядов как в зале: A, B, C... после Z продолжаем цифрами
pub fn row_letter(row: usize) -> String {
    match u8::try_from(row) {
        Ok(r) if r < 26 => char::from(b'A' + r).to_string(),
        _ => format!("R{}", row + 1),
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid seat id: {0:?}")]
pub struct ParseSeatIdError(pub String);

impl FromStr for SeatId {
    type Err = ParseSeatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, column) = s
            .split_once('-')
            .ok_or_else(|| ParseSeatIdError(s.to_string()))?;
        let row = row.parse().map_err(|_| ParseSeatIdError(s.to_string()))?;
        let column = column.parse().map_err(|_| ParseSeatIdError(s.to_string()))?;
        Ok(SeatId { row, column })
    }
}

// В JSON идентификатор всегда строка "row-column"
impl Serialize for SeatId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SeatId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub status: SeatStatus,
}

impl Seat {
    pub fn available(row: usize, column: usize) -> Self {
        Self {
            id: SeatId::new(row, column),
            status: SeatStatus::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_id_display_and_parse() {
        let id = SeatId::new(7, 9);
        assert_eq!(id.to_string(), "7-9");
        assert_eq!("7-9".parse::<SeatId>().unwrap(), id);
    }

    #[test]
    fn test_seat_id_rejects_garbage() {
        assert!("not-json".parse::<SeatId>().is_err());
        assert!("12".parse::<SeatId>().is_err());
        assert!("-1-2".parse::<SeatId>().is_err());
        assert!("1-".parse::<SeatId>().is_err());
    }

    #[test]
    fn test_seat_id_serializes_as_string() {
        let json = serde_json::to_string(&SeatId::new(0, 2)).unwrap();
        assert_eq!(json, "\"0-2\"");
        let back: SeatId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SeatId::new(0, 2));
    }

    #[test]
    fn test_seat_label_uses_row_letters() {
        assert_eq!(SeatId::new(0, 0).label(), "A-1");
        assert_eq!(SeatId::new(7, 9).label(), "H-10");
        assert_eq!(row_letter(26), "R27");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SeatStatus::Booked).unwrap(), "\"booked\"");
    }
}
