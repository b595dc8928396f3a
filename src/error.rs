//! Error taxonomy for rejected commands.
//!
//! Every rejection is one of three kinds: the referenced id does not exist,
//! the entity is in the wrong state for the operation, or an argument is
//! outside its allowed domain. Rejections are returned as values, never
//! thrown, and never leave partial mutations behind -- the tool layer needs
//! a structured success/failure signal to keep a conversation going.

use serde::{Deserialize, Serialize};

use crate::domain::{ReservationStatus, RoomStatus};

/// Coarse classification of a rejection, stable across the tool boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A referenced id or number does not exist.
    NotFound,
    /// The operation is not valid for the entity's current state.
    InvalidState,
    /// A value is outside its allowed domain.
    InvalidArgument,
}

impl ErrorKind {
    /// Return the display label for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NotFound",
            Self::InvalidState => "InvalidState",
            Self::InvalidArgument => "InvalidArgument",
        }
    }
}

/// Why a command was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HotelError {
    /// The reservation id does not exist.
    #[error("reservation '{0}' not found")]
    ReservationNotFound(String),
    /// The room number does not exist.
    #[error("room '{0}' not found")]
    RoomNotFound(String),
    /// The guest id does not exist.
    #[error("guest '{0}' not found")]
    GuestNotFound(String),
    /// The billing item does not exist on that reservation's folio.
    #[error("billing item '{item_id}' not found on reservation '{reservation_id}'")]
    BillingItemNotFound {
        item_id: String,
        reservation_id: String,
    },
    /// The housekeeping task id does not exist.
    #[error("housekeeping task '{0}' not found")]
    TaskNotFound(String),

    /// The check-in workflow needs a confirmed reservation.
    #[error("reservation '{reservation_id}' is {status}, expected Confirmed", status = .status.as_str())]
    NotConfirmed {
        reservation_id: String,
        status: ReservationStatus,
    },
    /// The room cannot be handed to a guest in its current state.
    #[error("room '{room_number}' is {status} and cannot be assigned", status = .status.as_str())]
    RoomNotAssignable {
        room_number: String,
        status: RoomStatus,
    },
    /// A check-in operation was issued with no check-in open.
    #[error("no check-in in progress")]
    NoCheckInInProgress,
    /// Check-in cannot complete without a room, committed or staged.
    #[error("no room assigned for reservation '{0}'")]
    NoRoomAssigned(String),
    /// Commit was issued with no staged room-status change.
    #[error("no staged room-status change to commit")]
    NoStagedRoomStatus,
    /// Commit was issued with no staged rate change.
    #[error("no staged rate change to commit")]
    NoStagedRateChange,

    /// Discounts must be between 1 and 100 percent.
    #[error("discount percent {0} is outside 1-100")]
    DiscountOutOfRange(u8),
    /// New charges must carry a positive amount.
    #[error("charge amount must be greater than zero")]
    ZeroChargeAmount,
    /// Rates must be positive.
    #[error("rate must be greater than zero")]
    ZeroRate,
    /// `Occupied` is set by completing a check-in, never staged directly.
    #[error("room status cannot be staged to Occupied; occupancy moves through check-in")]
    ManualOccupancy,
    /// The message composer rejects empty drafts.
    #[error("draft message body must not be empty")]
    EmptyDraft,
    /// The key-card dialog needs at least one card.
    #[error("key card count must be at least 1")]
    ZeroKeyCards,
}

impl HotelError {
    /// The taxonomy kind this rejection belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ReservationNotFound(_)
            | Self::RoomNotFound(_)
            | Self::GuestNotFound(_)
            | Self::BillingItemNotFound { .. }
            | Self::TaskNotFound(_) => ErrorKind::NotFound,

            Self::NotConfirmed { .. }
            | Self::RoomNotAssignable { .. }
            | Self::NoCheckInInProgress
            | Self::NoRoomAssigned(_)
            | Self::NoStagedRoomStatus
            | Self::NoStagedRateChange => ErrorKind::InvalidState,

            Self::DiscountOutOfRange(_)
            | Self::ZeroChargeAmount
            | Self::ZeroRate
            | Self::ManualOccupancy
            | Self::EmptyDraft
            | Self::ZeroKeyCards => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_taxonomy() {
        assert_eq!(
            HotelError::ReservationNotFound("res-1".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            HotelError::NoCheckInInProgress.kind(),
            ErrorKind::InvalidState
        );
        assert_eq!(
            HotelError::DiscountOutOfRange(0).kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn messages_name_the_offending_id() {
        let e = HotelError::BillingItemNotFound {
            item_id: "bill-9".into(),
            reservation_id: "res-1".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("bill-9"));
        assert!(msg.contains("res-1"));
    }

    #[test]
    fn status_labels_render_in_messages() {
        let e = HotelError::RoomNotAssignable {
            room_number: "105".into(),
            status: RoomStatus::OutOfOrder,
        };
        assert!(e.to_string().contains("OutOfOrder"));
    }
}
