//! The store's state shape and its pure queries.
//!
//! `HotelState` is a plain value: cloning it snapshots the whole dashboard,
//! and `PartialEq` makes "reset restores the seeded snapshot exactly" a
//! one-line assertion. All mutation goes through the reducer; consumers only
//! ever read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::command::{DraftMessage, KeyGenerationData, ViewType};
use crate::domain::{
    BillingItem, Guest, HousekeepingTask, Reservation, ReservationStatus, Room, RoomRate,
    RoomStatus, RoomType,
};
use crate::staging::Staging;

/// Everything the front-desk dashboard knows, committed and staged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HotelState {
    /// Fixed reference date the demo runs on; arrivals, departures, and new
    /// charges all hang off it.
    pub today: NaiveDate,

    // --- Committed entities ---
    pub rooms: Vec<Room>,
    pub guests: Vec<Guest>,
    pub reservations: Vec<Reservation>,
    pub billing: Vec<BillingItem>,
    pub housekeeping: Vec<HousekeepingTask>,
    pub rates: Vec<RoomRate>,

    // --- UI state ---
    pub current_view: ViewType,
    pub selected_reservation_id: Option<String>,
    pub selected_room_number: Option<String>,
    /// Rows the assistant is currently talking about.
    pub highlighted_reservations: Vec<String>,
    /// Tiles the assistant is currently talking about.
    pub highlighted_rooms: Vec<String>,
    /// Reservation in the open check-in modal, if any.
    pub check_in_reservation_id: Option<String>,
    pub draft_message: Option<DraftMessage>,
    pub key_generation: Option<KeyGenerationData>,

    // --- Proposed changes ---
    pub staging: Staging,
}

impl HotelState {
    // --- Lookups ---

    /// Room by door number.
    pub fn room(&self, number: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number == number)
    }

    pub(crate) fn room_mut(&mut self, number: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.number == number)
    }

    /// Reservation by id.
    pub fn reservation(&self, id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    pub(crate) fn reservation_mut(&mut self, id: &str) -> Option<&mut Reservation> {
        self.reservations.iter_mut().find(|r| r.id == id)
    }

    /// Reservation by confirmation number, for desk lookups.
    pub fn reservation_by_confirmation(&self, confirmation: &str) -> Option<&Reservation> {
        self.reservations
            .iter()
            .find(|r| r.confirmation_number == confirmation)
    }

    /// Guest profile by id.
    pub fn guest(&self, id: &str) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id == id)
    }

    /// Housekeeping task by id.
    pub fn housekeeping_task(&self, id: &str) -> Option<&HousekeepingTask> {
        self.housekeeping.iter().find(|t| t.id == id)
    }

    pub(crate) fn housekeeping_task_mut(&mut self, id: &str) -> Option<&mut HousekeepingTask> {
        self.housekeeping.iter_mut().find(|t| t.id == id)
    }

    /// Committed rate-table row for a room type on a date.
    pub fn rate(&self, room_type: RoomType, date: NaiveDate) -> Option<&RoomRate> {
        self.rates
            .iter()
            .find(|r| r.room_type == room_type && r.date == date)
    }

    // --- Queries ---

    /// Rooms that can be handed to an arriving guest, optionally filtered
    /// by type.
    pub fn available_rooms(&self, room_type: Option<RoomType>) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|r| r.status.is_assignable())
            .filter(|r| room_type.is_none_or(|t| r.room_type == t))
            .collect()
    }

    /// Confirmed reservations arriving today.
    pub fn todays_arrivals(&self) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.status == ReservationStatus::Confirmed && r.check_in_date == self.today)
            .collect()
    }

    /// Checked-in reservations departing today.
    pub fn todays_departures(&self) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.status == ReservationStatus::CheckedIn && r.check_out_date == self.today)
            .collect()
    }

    /// Committed folio lines for a reservation, without the staged overlay.
    pub fn billing_for_reservation(&self, reservation_id: &str) -> Vec<&BillingItem> {
        self.billing
            .iter()
            .filter(|i| i.reservation_id == reservation_id)
            .collect()
    }

    /// Count of rooms currently occupied.
    pub fn occupied_count(&self) -> usize {
        self.rooms
            .iter()
            .filter(|r| r.status == RoomStatus::Occupied)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChargeCategory, LoyaltyTier};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn sample_state() -> HotelState {
        let today = date(2024, 6, 1);
        HotelState {
            today,
            rooms: vec![
                Room {
                    id: "room-101".into(),
                    number: "101".into(),
                    room_type: RoomType::Queen,
                    features: vec![],
                    status: RoomStatus::Available,
                    floor: 1,
                    nightly_rate_cents: 16_900,
                },
                Room {
                    id: "room-102".into(),
                    number: "102".into(),
                    room_type: RoomType::Queen,
                    features: vec![],
                    status: RoomStatus::Dirty,
                    floor: 1,
                    nightly_rate_cents: 16_900,
                },
                Room {
                    id: "room-201".into(),
                    number: "201".into(),
                    room_type: RoomType::King,
                    features: vec![],
                    status: RoomStatus::Clean,
                    floor: 2,
                    nightly_rate_cents: 18_900,
                },
            ],
            guests: vec![Guest {
                id: "guest-1".into(),
                name: "Maya Chen".into(),
                email: "maya@example.com".into(),
                phone: "555-0101".into(),
                loyalty_tier: LoyaltyTier::Gold,
                preferences: vec![],
                stay_history: vec![],
            }],
            reservations: vec![
                Reservation {
                    id: "res-1".into(),
                    guest_id: "guest-1".into(),
                    confirmation_number: "CONF-1".into(),
                    room_type: RoomType::Queen,
                    room_number: None,
                    check_in_date: today,
                    check_out_date: date(2024, 6, 3),
                    status: ReservationStatus::Confirmed,
                    special_requests: vec![],
                    estimated_arrival: None,
                    is_early_checkout: false,
                },
                Reservation {
                    id: "res-2".into(),
                    guest_id: "guest-1".into(),
                    confirmation_number: "CONF-2".into(),
                    room_type: RoomType::King,
                    room_number: Some("201".into()),
                    check_in_date: date(2024, 5, 30),
                    check_out_date: today,
                    status: ReservationStatus::CheckedIn,
                    special_requests: vec![],
                    estimated_arrival: None,
                    is_early_checkout: false,
                },
            ],
            billing: vec![BillingItem {
                id: "bill-1".into(),
                reservation_id: "res-2".into(),
                category: ChargeCategory::Room,
                description: "Room night".into(),
                amount_cents: 18_900,
                date: date(2024, 5, 30),
                is_comped: false,
            }],
            ..HotelState::default()
        }
    }

    #[test]
    fn available_rooms_keeps_assignable_only() {
        let state = sample_state();
        let all = state.available_rooms(None);
        assert_eq!(all.len(), 2); // 101 Available, 201 Clean

        let queens = state.available_rooms(Some(RoomType::Queen));
        assert_eq!(queens.len(), 1);
        assert_eq!(queens[0].number, "101");
    }

    #[test]
    fn arrivals_are_confirmed_reservations_for_today() {
        let state = sample_state();
        let arrivals = state.todays_arrivals();
        assert_eq!(arrivals.len(), 1);
        assert_eq!(arrivals[0].id, "res-1");
    }

    #[test]
    fn departures_are_checked_in_reservations_leaving_today() {
        let state = sample_state();
        let departures = state.todays_departures();
        assert_eq!(departures.len(), 1);
        assert_eq!(departures[0].id, "res-2");
    }

    #[test]
    fn billing_query_is_scoped_to_the_reservation() {
        let state = sample_state();
        assert_eq!(state.billing_for_reservation("res-2").len(), 1);
        assert!(state.billing_for_reservation("res-1").is_empty());
    }

    #[test]
    fn lookups_by_number_and_confirmation() {
        let state = sample_state();
        assert!(state.room("101").is_some());
        assert!(state.room("999").is_none());
        assert_eq!(
            state
                .reservation_by_confirmation("CONF-2")
                .map(|r| r.id.as_str()),
            Some("res-2")
        );
    }
}
