//! Commands accepted by the hotel store, plus the caller context recorded
//! with each dispatch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{ChargeCategory, HousekeepingStatus, RoomStatus, RoomType, TaskPriority};

/// Dashboard views the UI can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ViewType {
    #[default]
    Dashboard,
    Reservations,
    Rooms,
    Housekeeping,
    Billing,
    Rates,
}

impl ViewType {
    /// Return the display label for this view.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Reservations => "Reservations",
            Self::Rooms => "Rooms",
            Self::Housekeeping => "Housekeeping",
            Self::Billing => "Billing",
            Self::Rates => "Rates",
        }
    }

    /// Views with a detail panel that renders the current selection.
    pub fn is_detail_capable(&self) -> bool {
        matches!(self, Self::Reservations | Self::Billing)
    }
}

/// Draft text sitting in the message composer, awaiting the agent's review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftMessage {
    /// Recipient display string (a guest name, an email address).
    pub recipient: String,
    pub body: String,
}

/// Parameters for the key-card generation dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyGenerationData {
    pub reservation_id: String,
    pub room_number: String,
    /// How many cards to cut.
    pub count: u8,
}

/// A requested folio edit, as issued by a caller.
///
/// Staging resolves this into a [`StagedBilling`] record: adds get an id and
/// a posting date, removals and discounts are checked against the committed
/// folio.
///
/// [`StagedBilling`]: crate::staging::StagedBilling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum BillingAdjustment {
    /// Post a new charge to the folio.
    Add {
        category: ChargeCategory,
        description: String,
        amount_cents: u64,
    },
    /// Delete a committed charge.
    Remove { item_id: String },
    /// Reduce a committed charge by a percentage (1-100).
    Discount { item_id: String, percent: u8 },
}

/// Commands accepted by the hotel store.
///
/// Every variant is validated by `handle`; accepted commands produce events,
/// rejected ones return a [`HotelError`] and change nothing.
///
/// [`HotelError`]: crate::error::HotelError
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum HotelCommand {
    /// Switch the dashboard view; clears assistant highlights.
    NavigateTo { view: ViewType },
    /// Select a reservation for the detail panel, switching to a
    /// detail-capable view when the current one is not.
    SelectReservation { reservation_id: String },
    /// Select a room for the room detail panel.
    SelectRoom { room_number: String },
    /// Replace the set of highlighted reservation rows.
    HighlightReservations { reservation_ids: Vec<String> },
    /// Replace the set of highlighted room tiles.
    HighlightRooms { room_numbers: Vec<String> },
    /// Open the check-in workflow for a confirmed reservation.
    StartCheckIn { reservation_id: String },
    /// Propose a room for a reservation being checked in.
    StageRoomAssignment {
        reservation_id: String,
        new_room: String,
    },
    /// Atomically apply the active check-in: reservation, rooms, and the
    /// staged folio edits move together.
    CompleteCheckIn,
    /// Abandon the active check-in, dropping its staged changes.
    CancelCheckIn,
    /// Propose a folio edit for a reservation.
    StageBillingAdjustment {
        reservation_id: String,
        adjustment: BillingAdjustment,
    },
    /// Propose a new physical status for a room.
    StageRoomStatusChange {
        room_number: String,
        new_status: RoomStatus,
    },
    /// Apply the staged room-status change.
    CommitRoomStatusChange,
    /// Drop the staged room-status change.
    CancelRoomStatusChange,
    /// Propose a nightly rate for a room type on a date.
    StageRateChange {
        room_type: RoomType,
        date: NaiveDate,
        new_rate_cents: u64,
    },
    /// Apply the staged rate change.
    CommitRateChange,
    /// Drop the staged rate change.
    CancelRateChange,
    /// Edit fields of a housekeeping task; `None` fields are left alone.
    UpdateHousekeepingTask {
        task_id: String,
        status: Option<HousekeepingStatus>,
        priority: Option<TaskPriority>,
        assigned_to: Option<String>,
        notes: Option<String>,
    },
    /// Prefill the message composer.
    SetDraftMessage { draft: DraftMessage },
    /// Empty the message composer.
    ClearDraftMessage,
    /// Open the key-card dialog.
    SetKeyGeneration { data: KeyGenerationData },
    /// Close the key-card dialog.
    ClearKeyGeneration,
    /// Restore the seeded snapshot, clearing all staging and selections.
    ResetState,
}

impl HotelCommand {
    /// Stable command name for logs and tool output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NavigateTo { .. } => "NavigateTo",
            Self::SelectReservation { .. } => "SelectReservation",
            Self::SelectRoom { .. } => "SelectRoom",
            Self::HighlightReservations { .. } => "HighlightReservations",
            Self::HighlightRooms { .. } => "HighlightRooms",
            Self::StartCheckIn { .. } => "StartCheckIn",
            Self::StageRoomAssignment { .. } => "StageRoomAssignment",
            Self::CompleteCheckIn => "CompleteCheckIn",
            Self::CancelCheckIn => "CancelCheckIn",
            Self::StageBillingAdjustment { .. } => "StageBillingAdjustment",
            Self::StageRoomStatusChange { .. } => "StageRoomStatusChange",
            Self::CommitRoomStatusChange => "CommitRoomStatusChange",
            Self::CancelRoomStatusChange => "CancelRoomStatusChange",
            Self::StageRateChange { .. } => "StageRateChange",
            Self::CommitRateChange => "CommitRateChange",
            Self::CancelRateChange => "CancelRateChange",
            Self::UpdateHousekeepingTask { .. } => "UpdateHousekeepingTask",
            Self::SetDraftMessage { .. } => "SetDraftMessage",
            Self::ClearDraftMessage => "ClearDraftMessage",
            Self::SetKeyGeneration { .. } => "SetKeyGeneration",
            Self::ClearKeyGeneration => "ClearKeyGeneration",
            Self::ResetState => "ResetState",
        }
    }
}

/// Cross-cutting metadata passed alongside a command.
///
/// Carries audit and correlation information without polluting the command
/// or event types. The store logs these fields with every dispatch.
///
/// # Examples
///
/// ```
/// use frontdesk::CommandContext;
/// use serde_json::json;
///
/// let ctx = CommandContext::default()
///     .with_actor("assistant")
///     .with_correlation_id("tool-call-7")
///     .with_metadata(json!({"source": "chat"}));
///
/// assert_eq!(ctx.actor.as_deref(), Some("assistant"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandContext {
    /// Identity of the actor issuing the command ("agent", "assistant").
    pub actor: Option<String>,
    /// Correlation ID tying a dispatch to the request that caused it.
    pub correlation_id: Option<String>,
    /// Arbitrary extras (tool-call ids, UI origin).
    pub metadata: Option<Value>,
}

impl CommandContext {
    /// Set the actor identity.
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Set the correlation ID.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Set arbitrary metadata.
    pub fn with_metadata(mut self, meta: Value) -> Self {
        self.metadata = Some(meta);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn commands_serialize_adjacently_tagged() {
        let cmd = HotelCommand::SelectRoom {
            room_number: "101".into(),
        };
        let v = serde_json::to_value(&cmd).expect("serialization should succeed");
        assert_eq!(v["type"], "SelectRoom");
        assert_eq!(v["data"]["room_number"], "101");
    }

    #[test]
    fn fieldless_commands_have_no_content() {
        let v = serde_json::to_value(HotelCommand::CompleteCheckIn)
            .expect("serialization should succeed");
        assert_eq!(v["type"], "CompleteCheckIn");
        assert!(v.get("data").is_none());
    }

    #[test]
    fn command_name_matches_serde_tag() {
        let cmd = HotelCommand::StageRateChange {
            room_type: RoomType::King,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
            new_rate_cents: 22_000,
        };
        let v = serde_json::to_value(&cmd).expect("serialization should succeed");
        assert_eq!(v["type"], cmd.name());
    }

    #[test]
    fn detail_capable_views() {
        assert!(ViewType::Reservations.is_detail_capable());
        assert!(ViewType::Billing.is_detail_capable());
        assert!(!ViewType::Dashboard.is_detail_capable());
        assert!(!ViewType::Rooms.is_detail_capable());
    }

    #[test]
    fn builder_chains_all_fields() {
        let ctx = CommandContext::default()
            .with_actor("agent")
            .with_correlation_id("req-abc")
            .with_metadata(json!({"source": "test"}));

        assert_eq!(ctx.actor.as_deref(), Some("agent"));
        assert_eq!(ctx.correlation_id.as_deref(), Some("req-abc"));
        assert_eq!(ctx.metadata, Some(json!({"source": "test"})));
    }

    #[test]
    fn default_context_has_no_fields_set() {
        let ctx = CommandContext::default();
        assert_eq!(ctx.actor, None);
        assert_eq!(ctx.correlation_id, None);
        assert_eq!(ctx.metadata, None);
    }
}
