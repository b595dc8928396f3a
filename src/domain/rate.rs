//! Rates -- the nightly rate table keyed by room type and date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::room::RoomType;

/// A competitor's published rate for the same night, for the rate sheet's
/// comparison column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorRate {
    pub hotel: String,
    pub rate_cents: u64,
}

/// One row of the rate table.
///
/// The table is keyed by `(room_type, date)`; committing a rate change
/// upserts the row for that key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRate {
    pub room_type: RoomType,
    pub date: NaiveDate,
    /// Nightly rate in cents.
    pub rate_cents: u64,
    /// Competitor comparison data, when scraped for this night.
    pub competitor_rates: Vec<CompetitorRate>,
}
