use serde::{Deserialize, Serialize};

use super::grid::SeatGrid;
use super::seat::SeatStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingTier {
    Premium,
    Standard,
    Economy,
}

impl PricingTier {
    pub fn label(&self) -> &'static str {
        match self {
            PricingTier::Premium => "Premium",
            PricingTier::Standard => "Standard",
            PricingTier::Economy => "Economy",
        }
    }
}

// Категория и цена ряда - то, что видит пользователь в легенде
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierInfo {
    #[serde(rename = "type")]
    pub tier: PricingTier,
    pub label: &'static str,
    pub price: u64,
}

/// Цены по полосам рядов.
///
/// Ряды `[0, premium_rows_end)` - Premium, `[premium_rows_end, standard_rows_end)` -
/// Standard, остальные - Economy. Категория не хранится в месте, а всегда
/// вычисляется по номеру ряда.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub premium_rows_end: usize,
    pub standard_rows_end: usize,
    pub premium_price: u64,
    pub standard_price: u64,
    pub economy_price: u64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            premium_rows_end: 3,
            standard_rows_end: 6,
            premium_price: 1000,
            standard_price: 750,
            economy_price: 500,
        }
    }
}

impl PricingPolicy {
    pub fn tier_of(&self, row: usize) -> TierInfo {
        let tier = if row < self.premium_rows_end {
            PricingTier::Premium
        } else if row < self.standard_rows_end {
            PricingTier::Standard
        } else {
            PricingTier::Economy
        };

        TierInfo {
            tier,
            label: tier.label(),
            price: self.price_of_tier(tier),
        }
    }

    pub fn price_of_tier(&self, tier: PricingTier) -> u64 {
        match tier {
            PricingTier::Premium => self.premium_price,
            PricingTier::Standard => self.standard_price,
            PricingTier::Economy => self.economy_price,
        }
    }

    pub fn price_of_seat(&self, row: usize) -> u64 {
        self.tier_of(row).price
    }

    /// Сумма по всем выбранным местам.
    pub fn total_price(&self, grid: &SeatGrid) -> u64 {
        grid.iter()
            .filter(|seat| seat.status == SeatStatus::Selected)
            .map(|seat| self.price_of_seat(seat.id.row))
            .sum()
    }

    // Легенда для отрисовки: все три категории по порядку
    pub fn legend(&self) -> Vec<TierInfo> {
        [PricingTier::Premium, PricingTier::Standard, PricingTier::Economy]
            .into_iter()
            .map(|tier| TierInfo {
                tier,
                label: tier.label(),
                price: self.price_of_tier(tier),
            })
            .collect()
    }
}
