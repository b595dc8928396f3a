//! Staged changes -- proposed mutations held apart from committed state.
//!
//! Each kind occupies a single slot: staging a second change of the same
//! kind replaces the first. Billing adjustments are the exception, held as
//! a list keyed by `(item id, kind)` with last-write-wins replacement, since
//! a checkout bill legitimately carries several pending edits at once.
//!
//! Staged records capture the committed values they would replace
//! (`previous_*`) at stage time, so the diff an agent reviews is always a
//! function of committed state plus the proposed delta.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{BillingItem, RoomStatus, RoomType};

/// A proposed room assignment for a reservation in check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedRoomAssignment {
    pub reservation_id: String,
    /// The reservation's committed room at stage time, if pre-assigned.
    pub previous_room: Option<String>,
    pub new_room: String,
}

/// A proposed folio edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum StagedBilling {
    /// Post a new line. The item is fully built at stage time so committing
    /// stays a plain fold.
    Add { item: BillingItem },
    /// Delete a committed line.
    Remove { item_id: String },
    /// Reduce a committed line by a percentage, applied once on commit.
    Discount { item_id: String, percent: u8 },
}

impl StagedBilling {
    /// Kind label, used for keying and display.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
            Self::Discount { .. } => "discount",
        }
    }

    /// The folio line this edit targets.
    pub fn item_id(&self) -> &str {
        match self {
            Self::Add { item } => &item.id,
            Self::Remove { item_id } | Self::Discount { item_id, .. } => item_id,
        }
    }
}

/// A staged folio edit scoped to one reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedBillingChange {
    pub reservation_id: String,
    pub change: StagedBilling,
}

/// A proposed room-status change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedRoomStatusChange {
    pub room_number: String,
    /// The room's committed status at stage time.
    pub previous_status: RoomStatus,
    pub new_status: RoomStatus,
}

/// A proposed rate-table change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedRateChange {
    pub room_type: RoomType,
    pub date: NaiveDate,
    /// The committed rate for this key at stage time; `None` when the key
    /// is not in the table yet.
    pub previous_rate_cents: Option<u64>,
    pub new_rate_cents: u64,
}

/// The staging workspace: every slot a proposed change can wait in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Staging {
    pub room_assignment: Option<StagedRoomAssignment>,
    pub billing_changes: Vec<StagedBillingChange>,
    pub room_status: Option<StagedRoomStatusChange>,
    pub rate_change: Option<StagedRateChange>,
}

impl Staging {
    /// True when no slot holds a proposed change.
    pub fn is_empty(&self) -> bool {
        self.room_assignment.is_none()
            && self.billing_changes.is_empty()
            && self.room_status.is_none()
            && self.rate_change.is_none()
    }

    /// Drop the slots scoped to the check-in workflow (room assignment and
    /// billing), leaving room-status and rate staging alone.
    pub(crate) fn clear_check_in(&mut self) {
        self.room_assignment = None;
        self.billing_changes.clear();
    }

    /// Append a folio edit, replacing any staged edit with the same
    /// `(item id, kind)` key. Last write wins.
    pub(crate) fn push_billing(&mut self, staged: StagedBillingChange) {
        self.billing_changes.retain(|c| {
            c.change.item_id() != staged.change.item_id()
                || c.change.kind() != staged.change.kind()
        });
        self.billing_changes.push(staged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discount(item_id: &str, percent: u8) -> StagedBillingChange {
        StagedBillingChange {
            reservation_id: "res-1".into(),
            change: StagedBilling::Discount {
                item_id: item_id.into(),
                percent,
            },
        }
    }

    fn remove(item_id: &str) -> StagedBillingChange {
        StagedBillingChange {
            reservation_id: "res-1".into(),
            change: StagedBilling::Remove {
                item_id: item_id.into(),
            },
        }
    }

    #[test]
    fn later_discount_replaces_earlier_on_same_item() {
        let mut staging = Staging::default();
        staging.push_billing(discount("bill-1", 10));
        staging.push_billing(discount("bill-1", 25));

        assert_eq!(staging.billing_changes.len(), 1);
        assert!(matches!(
            staging.billing_changes[0].change,
            StagedBilling::Discount { percent: 25, .. }
        ));
    }

    #[test]
    fn remove_and_discount_coexist_for_same_item() {
        let mut staging = Staging::default();
        staging.push_billing(discount("bill-1", 10));
        staging.push_billing(remove("bill-1"));

        // Different kinds, both staged; total calculations let remove win.
        assert_eq!(staging.billing_changes.len(), 2);
    }

    #[test]
    fn clearing_check_in_keeps_status_and_rate_slots() {
        let mut staging = Staging {
            room_assignment: Some(StagedRoomAssignment {
                reservation_id: "res-1".into(),
                previous_room: None,
                new_room: "101".into(),
            }),
            room_status: Some(StagedRoomStatusChange {
                room_number: "102".into(),
                previous_status: RoomStatus::Dirty,
                new_status: RoomStatus::Clean,
            }),
            ..Staging::default()
        };
        staging.push_billing(remove("bill-1"));

        staging.clear_check_in();

        assert!(staging.room_assignment.is_none());
        assert!(staging.billing_changes.is_empty());
        assert!(staging.room_status.is_some());
        assert!(!staging.is_empty());
    }
}
