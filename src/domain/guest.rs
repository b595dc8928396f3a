//! Guests -- profile data the desk consults but never edits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Loyalty program tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LoyaltyTier {
    #[default]
    Member,
    Gold,
    Platinum,
}

impl LoyaltyTier {
    /// Return the display label for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }
}

/// A completed past stay on a guest profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastStay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Total folio spend for the stay, in cents.
    pub total_spend_cents: u64,
}

/// A guest profile.
///
/// Profiles are read-only in this core: no command mutates one, and the stay
/// history is append-only by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    /// Stable identifier.
    pub id: String,
    /// Full display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Loyalty program standing.
    pub loyalty_tier: LoyaltyTier,
    /// Free-form preference tags ("high floor", "extra pillows", ...).
    pub preferences: Vec<String>,
    /// Past stays, oldest first.
    pub stay_history: Vec<PastStay>,
}
