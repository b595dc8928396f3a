//! Reservations -- booking records moving through the check-in workflow.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::room::RoomType;

/// Reservation lifecycle states.
///
/// Only `Confirmed` reservations can enter the check-in workflow; completing
/// it moves them to `CheckedIn`. The remaining states exist in seeded data
/// for history views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReservationStatus {
    #[default]
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl ReservationStatus {
    /// Return the display label for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::CheckedIn => "CheckedIn",
            Self::CheckedOut => "CheckedOut",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// A booking record.
///
/// `status` and `room_number` mutate only through the check-in workflow;
/// everything else is fixed at seed time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Stable identifier.
    pub id: String,
    /// Owning guest profile.
    pub guest_id: String,
    /// Confirmation code, unique across the property.
    pub confirmation_number: String,
    /// Room category requested at booking time.
    pub room_type: RoomType,
    /// Assigned door number, set on check-in (or pre-assigned in seed data).
    pub room_number: Option<String>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    /// Current lifecycle state.
    pub status: ReservationStatus,
    /// Free-form requests captured at booking ("late arrival", ...).
    pub special_requests: Vec<String>,
    /// Estimated arrival time, as entered by the guest ("3:30 PM").
    pub estimated_arrival: Option<String>,
    /// Set when the guest left before the booked check-out date.
    pub is_early_checkout: bool,
}

impl Reservation {
    /// Number of nights booked.
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nights_spans_the_booked_dates() {
        let r = Reservation {
            id: "res-1".into(),
            guest_id: "guest-1".into(),
            confirmation_number: "CONF-1".into(),
            room_type: RoomType::Queen,
            room_number: None,
            check_in_date: NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
            check_out_date: NaiveDate::from_ymd_opt(2024, 6, 4).expect("valid date"),
            status: ReservationStatus::Confirmed,
            special_requests: vec![],
            estimated_arrival: None,
            is_early_checkout: false,
        };
        assert_eq!(r.nights(), 3);
    }
}
