//! Billing -- folio line items and the discount arithmetic applied on commit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Folio charge categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChargeCategory {
    #[default]
    Room,
    Food,
    Amenity,
    Service,
    Tax,
}

impl ChargeCategory {
    /// Return the display label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Room => "Room",
            Self::Food => "Food",
            Self::Amenity => "Amenity",
            Self::Service => "Service",
            Self::Tax => "Tax",
        }
    }
}

/// A single folio line.
///
/// Immutable once committed, except through staged billing adjustments
/// applied by the check-in workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingItem {
    /// Stable identifier.
    pub id: String,
    /// Folio this line belongs to.
    pub reservation_id: String,
    /// Charge category.
    pub category: ChargeCategory,
    /// Line description shown on the folio ("Room night", "Minibar").
    pub description: String,
    /// Charge amount in cents (avoids floating-point).
    pub amount_cents: u64,
    /// Posting date.
    pub date: NaiveDate,
    /// Set when the charge was fully comped (100% discount).
    pub is_comped: bool,
}

/// Amount left after a percentage discount, rounded down to the cent.
///
/// A committed discount rewrites the line amount exactly once with this
/// value; 100% leaves zero and the line is marked comped.
pub fn discounted_cents(amount_cents: u64, percent: u8) -> u64 {
    amount_cents * (100 - u64::from(percent.min(100))) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_basic() {
        assert_eq!(discounted_cents(10_000, 20), 8_000);
        assert_eq!(discounted_cents(10_000, 100), 0);
        assert_eq!(discounted_cents(10_000, 0), 10_000);
    }

    #[test]
    fn discount_rounds_down() {
        // 999 * 90 / 100 = 899.1 -> 899
        assert_eq!(discounted_cents(999, 10), 899);
    }

    #[test]
    fn discount_clamps_over_100() {
        assert_eq!(discounted_cents(5_000, 255), 0);
    }
}
