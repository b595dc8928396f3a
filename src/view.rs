//! Read models computed on demand from committed state plus the staging
//! overlay.
//!
//! Each view is plain data for rendering. Nothing here is cached: callers
//! re-project after every notification, and a projection never writes
//! back into the state it reads.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    BillingItem, CompetitorRate, Guest, Reservation, RoomStatus, RoomType, discounted_cents,
};
use crate::staging::StagedBilling;
use crate::state::HotelState;

// --- Folio ---

/// How a folio line looks with the staging overlay applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum LineStatus {
    Committed,
    PendingAdd,
    PendingRemove,
    PendingDiscount { percent: u8, discounted_cents: u64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolioLine {
    pub item: BillingItem,
    pub status: LineStatus,
}

/// A reservation's folio with staged edits overlaid line by line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolioView {
    pub reservation_id: String,
    pub lines: Vec<FolioLine>,
    /// Total of committed lines only.
    pub committed_total_cents: u64,
    /// Total as it would read after committing every staged edit.
    pub projected_total_cents: u64,
}

impl FolioView {
    pub fn project(state: &HotelState, reservation_id: &str) -> Option<Self> {
        state.reservation(reservation_id)?;

        let committed = state.billing_for_reservation(reservation_id);
        let mut lines = Vec::with_capacity(committed.len());
        for item in &committed {
            let mut status = LineStatus::Committed;
            for staged in &state.staging.billing_changes {
                if staged.reservation_id != reservation_id {
                    continue;
                }
                match &staged.change {
                    StagedBilling::Remove { item_id } if *item_id == item.id => {
                        status = LineStatus::PendingRemove;
                    }
                    StagedBilling::Discount { item_id, percent } if *item_id == item.id => {
                        // A staged removal masks a staged discount on the
                        // same line.
                        if status != LineStatus::PendingRemove {
                            status = LineStatus::PendingDiscount {
                                percent: *percent,
                                discounted_cents: discounted_cents(item.amount_cents, *percent),
                            };
                        }
                    }
                    _ => {}
                }
            }
            lines.push(FolioLine {
                item: (*item).clone(),
                status,
            });
        }
        for staged in &state.staging.billing_changes {
            if staged.reservation_id != reservation_id {
                continue;
            }
            if let StagedBilling::Add { item } = &staged.change {
                lines.push(FolioLine {
                    item: item.clone(),
                    status: LineStatus::PendingAdd,
                });
            }
        }

        let committed_total_cents = committed.iter().map(|i| i.amount_cents).sum();
        let projected_total_cents = lines
            .iter()
            .map(|line| match &line.status {
                LineStatus::Committed | LineStatus::PendingAdd => line.item.amount_cents,
                LineStatus::PendingRemove => 0,
                LineStatus::PendingDiscount {
                    discounted_cents, ..
                } => *discounted_cents,
            })
            .sum();

        Some(Self {
            reservation_id: reservation_id.to_owned(),
            lines,
            committed_total_cents,
            projected_total_cents,
        })
    }
}

// --- Room board ---

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomTile {
    pub number: String,
    pub room_type: RoomType,
    pub floor: u8,
    pub committed_status: RoomStatus,
    /// Status with any staged change overlaid.
    pub effective_status: RoomStatus,
    pub pending: bool,
}

/// The whole room grid with occupancy tallies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomBoard {
    pub tiles: Vec<RoomTile>,
    /// Committed occupancy; staging cannot create or clear it.
    pub occupied: usize,
    /// Rooms assignable after the staged overlay.
    pub available: usize,
}

impl RoomBoard {
    pub fn project(state: &HotelState) -> Self {
        let tiles: Vec<RoomTile> = state
            .rooms
            .iter()
            .map(|room| {
                let overlay = state
                    .staging
                    .room_status
                    .as_ref()
                    .filter(|s| s.room_number == room.number);
                RoomTile {
                    number: room.number.clone(),
                    room_type: room.room_type,
                    floor: room.floor,
                    committed_status: room.status,
                    effective_status: overlay.map_or(room.status, |s| s.new_status),
                    pending: overlay.is_some(),
                }
            })
            .collect();
        let occupied = tiles
            .iter()
            .filter(|t| t.committed_status == RoomStatus::Occupied)
            .count();
        let available = tiles
            .iter()
            .filter(|t| t.effective_status.is_assignable())
            .count();
        Self {
            tiles,
            occupied,
            available,
        }
    }
}

// --- Rate sheet ---

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateRow {
    pub date: NaiveDate,
    /// `None` when the row exists only as a staged change.
    pub committed_cents: Option<u64>,
    pub effective_cents: u64,
    pub pending: bool,
    pub competitor_rates: Vec<CompetitorRate>,
}

/// One room type's rate calendar with the staged change overlaid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateSheet {
    pub room_type: RoomType,
    pub rows: Vec<RateRow>,
}

impl RateSheet {
    pub fn project(state: &HotelState, room_type: RoomType) -> Self {
        let staged = state
            .staging
            .rate_change
            .as_ref()
            .filter(|s| s.room_type == room_type);
        let mut rows: Vec<RateRow> = state
            .rates
            .iter()
            .filter(|r| r.room_type == room_type)
            .map(|r| {
                let overlay = staged.filter(|s| s.date == r.date);
                RateRow {
                    date: r.date,
                    committed_cents: Some(r.rate_cents),
                    effective_cents: overlay.map_or(r.rate_cents, |s| s.new_rate_cents),
                    pending: overlay.is_some(),
                    competitor_rates: r.competitor_rates.clone(),
                }
            })
            .collect();
        if let Some(s) = staged
            && !rows.iter().any(|row| row.date == s.date)
        {
            rows.push(RateRow {
                date: s.date,
                committed_cents: None,
                effective_cents: s.new_rate_cents,
                pending: true,
                competitor_rates: vec![],
            });
        }
        rows.sort_by_key(|row| row.date);
        Self { room_type, rows }
    }
}

// --- Reservation card ---

/// Everything the detail pane needs for one reservation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationCard {
    pub reservation: Reservation,
    pub guest: Option<Guest>,
    /// Committed room, or the staged assignment when one is pending.
    pub effective_room: Option<String>,
    pub room_pending: bool,
    pub nights: i64,
}

impl ReservationCard {
    pub fn project(state: &HotelState, reservation_id: &str) -> Option<Self> {
        let reservation = state.reservation(reservation_id)?.clone();
        let guest = state.guest(&reservation.guest_id).cloned();
        let staged = state
            .staging
            .room_assignment
            .as_ref()
            .filter(|s| s.reservation_id == reservation_id);
        let effective_room = staged
            .map(|s| s.new_room.clone())
            .or_else(|| reservation.room_number.clone());
        let nights = reservation.nights();
        Some(Self {
            reservation,
            guest,
            effective_room,
            room_pending: staged.is_some(),
            nights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{BillingAdjustment, HotelCommand};
    use crate::domain::ChargeCategory;
    use crate::seed;

    fn run(state: HotelState, cmd: HotelCommand) -> HotelState {
        let events = state.handle(cmd).expect("command should be accepted");
        events.into_iter().fold(state, |s, e| s.apply(&e))
    }

    #[test]
    fn folio_overlays_staged_edits_without_touching_committed_lines() {
        let state = run(
            seed::demo_state(),
            HotelCommand::StageBillingAdjustment {
                reservation_id: "res-1003".into(),
                adjustment: BillingAdjustment::Discount {
                    item_id: "bill-3".into(),
                    percent: 50,
                },
            },
        );
        let state = run(
            state,
            HotelCommand::StageBillingAdjustment {
                reservation_id: "res-1003".into(),
                adjustment: BillingAdjustment::Remove {
                    item_id: "bill-4".into(),
                },
            },
        );
        let state = run(
            state,
            HotelCommand::StageBillingAdjustment {
                reservation_id: "res-1003".into(),
                adjustment: BillingAdjustment::Add {
                    category: ChargeCategory::Food,
                    description: "Late breakfast".into(),
                    amount_cents: 2_500,
                },
            },
        );

        let folio = FolioView::project(&state, "res-1003").expect("reservation exists");
        assert_eq!(folio.lines.len(), 5);
        assert_eq!(folio.committed_total_cents, 52_340);
        // 18900 + 18900 + 5000 (discounted) + 0 (removed) + 2500 (added)
        assert_eq!(folio.projected_total_cents, 45_300);
        // The committed ledger itself is untouched.
        assert_eq!(state.billing, seed::demo_state().billing);
    }

    #[test]
    fn a_staged_remove_masks_a_staged_discount() {
        let state = run(
            seed::demo_state(),
            HotelCommand::StageBillingAdjustment {
                reservation_id: "res-1003".into(),
                adjustment: BillingAdjustment::Discount {
                    item_id: "bill-3".into(),
                    percent: 25,
                },
            },
        );
        let state = run(
            state,
            HotelCommand::StageBillingAdjustment {
                reservation_id: "res-1003".into(),
                adjustment: BillingAdjustment::Remove {
                    item_id: "bill-3".into(),
                },
            },
        );

        let folio = FolioView::project(&state, "res-1003").expect("reservation exists");
        let line = folio
            .lines
            .iter()
            .find(|l| l.item.id == "bill-3")
            .expect("line present");
        assert_eq!(line.status, LineStatus::PendingRemove);
        // 52340 minus the removed 10000 line.
        assert_eq!(folio.projected_total_cents, 42_340);
    }

    #[test]
    fn room_board_overlays_the_staged_status() {
        let state = run(
            seed::demo_state(),
            HotelCommand::StageRoomStatusChange {
                room_number: "102".into(),
                new_status: RoomStatus::Clean,
            },
        );
        let board = RoomBoard::project(&state);
        let tile = board
            .tiles
            .iter()
            .find(|t| t.number == "102")
            .expect("tile present");
        assert_eq!(tile.committed_status, RoomStatus::Dirty);
        assert_eq!(tile.effective_status, RoomStatus::Clean);
        assert!(tile.pending);
        assert_eq!(board.occupied, 1);

        // One more assignable room than the untouched board shows.
        let baseline = RoomBoard::project(&seed::demo_state());
        assert_eq!(board.available, baseline.available + 1);
    }

    #[test]
    fn rate_sheet_overlays_and_invents_rows_as_needed() {
        let state = run(
            seed::demo_state(),
            HotelCommand::StageRateChange {
                room_type: RoomType::King,
                date: seed::demo_today(),
                new_rate_cents: 22_000,
            },
        );
        let sheet = RateSheet::project(&state, RoomType::King);
        let row = sheet
            .rows
            .iter()
            .find(|r| r.date == seed::demo_today())
            .expect("row present");
        assert_eq!(row.committed_cents, Some(18_900));
        assert_eq!(row.effective_cents, 22_000);
        assert!(row.pending);

        // A staged change for a date with no committed row appears as new.
        let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date");
        let state = run(
            state,
            HotelCommand::StageRateChange {
                room_type: RoomType::King,
                date,
                new_rate_cents: 25_000,
            },
        );
        let sheet = RateSheet::project(&state, RoomType::King);
        let row = sheet.rows.iter().find(|r| r.date == date).expect("row present");
        assert_eq!(row.committed_cents, None);
        assert!(row.pending);
        assert!(sheet.rows.is_sorted_by_key(|r| r.date));
    }

    #[test]
    fn reservation_card_prefers_the_staged_room() {
        let state = run(
            seed::demo_state(),
            HotelCommand::StageRoomAssignment {
                reservation_id: "res-1002".into(),
                new_room: "203".into(),
            },
        );
        let card = ReservationCard::project(&state, "res-1002").expect("reservation exists");
        assert_eq!(card.effective_room.as_deref(), Some("203"));
        assert!(card.room_pending);
        assert_eq!(card.nights, 2);
        assert_eq!(card.guest.as_ref().map(|g| g.name.as_str()), Some("Derek Okafor"));

        // The staged assignment belongs to res-1002 only.
        let other = ReservationCard::project(&state, "res-1001").expect("reservation exists");
        assert!(!other.room_pending);
        assert_eq!(other.effective_room, None);
    }
}
