//! Events recorded for every accepted transition.
//!
//! Events are facts: handling a command does all the validation, applying an
//! event never fails. Subscribers receive the full batch produced by each
//! accepted dispatch, in order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::command::{DraftMessage, KeyGenerationData, ViewType};
use crate::domain::{HousekeepingStatus, RoomStatus, RoomType, TaskPriority};
use crate::staging::{
    StagedBillingChange, StagedRateChange, StagedRoomAssignment, StagedRoomStatusChange,
};

/// Transitions the hotel store can record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum HotelEvent {
    /// The dashboard switched views.
    ViewChanged { view: ViewType },
    /// A reservation was selected for the detail panel.
    ReservationSelected { reservation_id: String },
    /// A room was selected for the room detail panel.
    RoomSelected { room_number: String },
    /// The highlighted reservation rows were replaced.
    ReservationsHighlighted { reservation_ids: Vec<String> },
    /// The highlighted room tiles were replaced.
    RoomsHighlighted { room_numbers: Vec<String> },
    /// A check-in workflow opened for a reservation.
    CheckInStarted { reservation_id: String },
    /// A room assignment was staged (replacing any prior one).
    RoomAssignmentStaged { staged: StagedRoomAssignment },
    /// The active check-in committed. Applying this moves the reservation,
    /// the rooms, and the reservation's staged folio edits together, then
    /// resets the staging workspace.
    CheckInCompleted {
        reservation_id: String,
        room_number: String,
        /// Pre-assigned room released by a reassignment, if any.
        previous_room: Option<String>,
    },
    /// The active check-in was abandoned.
    CheckInCancelled,
    /// A folio edit was staged.
    BillingAdjustmentStaged { staged: StagedBillingChange },
    /// A room-status change was staged (replacing any prior one).
    RoomStatusChangeStaged { staged: StagedRoomStatusChange },
    /// The staged room-status change committed.
    RoomStatusCommitted {
        room_number: String,
        new_status: RoomStatus,
    },
    /// The staged room-status change was dropped.
    RoomStatusChangeCancelled,
    /// A rate change was staged (replacing any prior one).
    RateChangeStaged { staged: StagedRateChange },
    /// The staged rate change committed, upserting the rate-table row.
    RateCommitted {
        room_type: RoomType,
        date: NaiveDate,
        rate_cents: u64,
    },
    /// The staged rate change was dropped.
    RateChangeCancelled,
    /// Fields of a housekeeping task changed; `None` fields kept their value.
    HousekeepingTaskUpdated {
        task_id: String,
        status: Option<HousekeepingStatus>,
        priority: Option<TaskPriority>,
        assigned_to: Option<String>,
        notes: Option<String>,
    },
    /// The message composer was prefilled.
    DraftMessageSet { draft: DraftMessage },
    /// The message composer was emptied.
    DraftMessageCleared,
    /// The key-card dialog opened.
    KeyGenerationSet { data: KeyGenerationData },
    /// The key-card dialog closed.
    KeyGenerationCleared,
    /// The store returned to its seeded snapshot. Externally held session
    /// identifiers should be dropped when this is observed.
    StateReset,
}

impl HotelEvent {
    /// Stable event name for logs and subscriber diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ViewChanged { .. } => "ViewChanged",
            Self::ReservationSelected { .. } => "ReservationSelected",
            Self::RoomSelected { .. } => "RoomSelected",
            Self::ReservationsHighlighted { .. } => "ReservationsHighlighted",
            Self::RoomsHighlighted { .. } => "RoomsHighlighted",
            Self::CheckInStarted { .. } => "CheckInStarted",
            Self::RoomAssignmentStaged { .. } => "RoomAssignmentStaged",
            Self::CheckInCompleted { .. } => "CheckInCompleted",
            Self::CheckInCancelled => "CheckInCancelled",
            Self::BillingAdjustmentStaged { .. } => "BillingAdjustmentStaged",
            Self::RoomStatusChangeStaged { .. } => "RoomStatusChangeStaged",
            Self::RoomStatusCommitted { .. } => "RoomStatusCommitted",
            Self::RoomStatusChangeCancelled => "RoomStatusChangeCancelled",
            Self::RateChangeStaged { .. } => "RateChangeStaged",
            Self::RateCommitted { .. } => "RateCommitted",
            Self::RateChangeCancelled => "RateChangeCancelled",
            Self::HousekeepingTaskUpdated { .. } => "HousekeepingTaskUpdated",
            Self::DraftMessageSet { .. } => "DraftMessageSet",
            Self::DraftMessageCleared => "DraftMessageCleared",
            Self::KeyGenerationSet { .. } => "KeyGenerationSet",
            Self::KeyGenerationCleared => "KeyGenerationCleared",
            Self::StateReset => "StateReset",
        }
    }
}
