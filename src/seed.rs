//! The seeded demo dataset: a ten-room property on the morning of
//! 2024-06-01, with arrivals due, one guest in house, and a folio to edit.
//!
//! Every value here is deliberate; scripted walkthroughs and the test
//! suite both lean on these exact ids, statuses, and rates.

use chrono::NaiveDate;

use crate::domain::{
    BillingItem, ChargeCategory, CompetitorRate, Guest, HousekeepingStatus, HousekeepingTask,
    LoyaltyTier, PastStay, Reservation, ReservationStatus, Room, RoomRate, RoomStatus, RoomType,
    TaskPriority,
};
use crate::state::HotelState;

/// The fixed "today" the demo runs on.
pub fn demo_today() -> NaiveDate {
    date(2024, 6, 1)
}

/// Build the full seeded state.
pub fn demo_state() -> HotelState {
    HotelState {
        today: demo_today(),
        rooms: rooms(),
        guests: guests(),
        reservations: reservations(),
        billing: billing(),
        housekeeping: housekeeping(),
        rates: rates(),
        ..HotelState::default()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

fn room(
    number: &str,
    room_type: RoomType,
    floor: u8,
    status: RoomStatus,
    nightly_rate_cents: u64,
    features: &[&str],
) -> Room {
    Room {
        id: format!("room-{number}"),
        number: number.to_owned(),
        room_type,
        features: features.iter().map(|f| (*f).to_owned()).collect(),
        status,
        floor,
        nightly_rate_cents,
    }
}

fn rooms() -> Vec<Room> {
    use RoomStatus::*;
    use RoomType::*;
    vec![
        room("101", Queen, 1, Available, 16_900, &["city view"]),
        room("102", Queen, 1, Dirty, 16_900, &[]),
        room("103", Queen, 1, Clean, 16_900, &["accessible"]),
        room("104", King, 1, Clean, 18_900, &["city view"]),
        room("105", King, 1, OutOfOrder, 18_900, &[]),
        // 201 is held by res-1003, the one guest already in house.
        room("201", King, 2, Occupied, 18_900, &["corner"]),
        room("202", Queen, 2, Available, 16_900, &[]),
        room("203", King, 2, Clean, 18_900, &["balcony"]),
        room("301", Suite, 3, Available, 38_900, &["balcony", "kitchenette"]),
        room("302", Suite, 3, Dirty, 38_900, &["kitchenette"]),
    ]
}

fn guests() -> Vec<Guest> {
    vec![
        Guest {
            id: "guest-1".into(),
            name: "Maya Chen".into(),
            email: "maya.chen@example.com".into(),
            phone: "+1 555 0134".into(),
            loyalty_tier: LoyaltyTier::Platinum,
            preferences: vec!["high floor".into(), "late checkout".into()],
            stay_history: vec![
                PastStay {
                    check_in: date(2024, 1, 12),
                    check_out: date(2024, 1, 15),
                    total_spend_cents: 54_300,
                },
                PastStay {
                    check_in: date(2023, 11, 3),
                    check_out: date(2023, 11, 5),
                    total_spend_cents: 36_100,
                },
            ],
        },
        Guest {
            id: "guest-2".into(),
            name: "Derek Okafor".into(),
            email: "d.okafor@example.com".into(),
            phone: "+1 555 0188".into(),
            loyalty_tier: LoyaltyTier::Gold,
            preferences: vec!["quiet room".into()],
            stay_history: vec![PastStay {
                check_in: date(2024, 3, 22),
                check_out: date(2024, 3, 24),
                total_spend_cents: 41_800,
            }],
        },
        Guest {
            id: "guest-3".into(),
            name: "Priya Natarajan".into(),
            email: "priya.n@example.com".into(),
            phone: "+1 555 0212".into(),
            loyalty_tier: LoyaltyTier::Member,
            preferences: vec![],
            stay_history: vec![],
        },
        Guest {
            id: "guest-4".into(),
            name: "Sam Whitfield".into(),
            email: "sam.whitfield@example.com".into(),
            phone: "+1 555 0246".into(),
            loyalty_tier: LoyaltyTier::Member,
            preferences: vec!["extra pillows".into()],
            stay_history: vec![PastStay {
                check_in: date(2023, 8, 14),
                check_out: date(2023, 8, 16),
                total_spend_cents: 77_800,
            }],
        },
    ]
}

fn reservations() -> Vec<Reservation> {
    vec![
        // Today's headline arrival: confirmed, no room picked yet.
        Reservation {
            id: "res-1001".into(),
            guest_id: "guest-1".into(),
            confirmation_number: "CONF-48213".into(),
            room_type: RoomType::Queen,
            room_number: None,
            check_in_date: date(2024, 6, 1),
            check_out_date: date(2024, 6, 4),
            status: ReservationStatus::Confirmed,
            special_requests: vec!["late arrival".into()],
            estimated_arrival: Some("9:00 PM".into()),
            is_early_checkout: false,
        },
        // Arriving today with a room already blocked.
        Reservation {
            id: "res-1002".into(),
            guest_id: "guest-2".into(),
            confirmation_number: "CONF-48214".into(),
            room_type: RoomType::King,
            room_number: Some("104".into()),
            check_in_date: date(2024, 6, 1),
            check_out_date: date(2024, 6, 3),
            status: ReservationStatus::Confirmed,
            special_requests: vec![],
            estimated_arrival: Some("3:30 PM".into()),
            is_early_checkout: false,
        },
        // In house, departing today.
        Reservation {
            id: "res-1003".into(),
            guest_id: "guest-3".into(),
            confirmation_number: "CONF-48215".into(),
            room_type: RoomType::King,
            room_number: Some("201".into()),
            check_in_date: date(2024, 5, 30),
            check_out_date: date(2024, 6, 1),
            status: ReservationStatus::CheckedIn,
            special_requests: vec![],
            estimated_arrival: None,
            is_early_checkout: false,
        },
        // A future stay, useful for exercising date-scoped queries.
        Reservation {
            id: "res-1004".into(),
            guest_id: "guest-4".into(),
            confirmation_number: "CONF-48216".into(),
            room_type: RoomType::Suite,
            room_number: None,
            check_in_date: date(2024, 6, 10),
            check_out_date: date(2024, 6, 12),
            status: ReservationStatus::Confirmed,
            special_requests: vec!["anniversary".into()],
            estimated_arrival: None,
            is_early_checkout: false,
        },
        // Already departed; its folio is historical.
        Reservation {
            id: "res-1005".into(),
            guest_id: "guest-1".into(),
            confirmation_number: "CONF-47990".into(),
            room_type: RoomType::Queen,
            room_number: Some("103".into()),
            check_in_date: date(2024, 5, 20),
            check_out_date: date(2024, 5, 23),
            status: ReservationStatus::CheckedOut,
            special_requests: vec![],
            estimated_arrival: None,
            is_early_checkout: true,
        },
    ]
}

fn charge(
    id: &str,
    reservation_id: &str,
    category: ChargeCategory,
    description: &str,
    amount_cents: u64,
    date: NaiveDate,
) -> BillingItem {
    BillingItem {
        id: id.to_owned(),
        reservation_id: reservation_id.to_owned(),
        category,
        description: description.to_owned(),
        amount_cents,
        date,
        is_comped: false,
    }
}

fn billing() -> Vec<BillingItem> {
    use ChargeCategory::*;
    vec![
        charge("bill-1", "res-1003", Room, "Room night (May 30)", 18_900, date(2024, 5, 30)),
        charge("bill-2", "res-1003", Room, "Room night (May 31)", 18_900, date(2024, 5, 31)),
        charge("bill-3", "res-1003", Food, "Room service dinner", 10_000, date(2024, 5, 31)),
        charge("bill-4", "res-1003", Tax, "Occupancy tax", 4_540, date(2024, 5, 31)),
        charge("bill-5", "res-1005", Room, "Room night (May 20)", 15_900, date(2024, 5, 20)),
        charge("bill-6", "res-1005", Food, "Minibar", 2_400, date(2024, 5, 21)),
        charge("bill-7", "res-1001", Service, "Welcome package (prepaid)", 10_000, date(2024, 6, 1)),
    ]
}

fn housekeeping() -> Vec<HousekeepingTask> {
    vec![
        HousekeepingTask {
            id: "task-1".into(),
            room_number: "102".into(),
            status: HousekeepingStatus::Dirty,
            priority: TaskPriority::Rush,
            assigned_to: Some("Rosa M.".into()),
            notes: Some("Guest arriving tonight".into()),
        },
        HousekeepingTask {
            id: "task-2".into(),
            room_number: "302".into(),
            status: HousekeepingStatus::Dirty,
            priority: TaskPriority::Normal,
            assigned_to: None,
            notes: None,
        },
        HousekeepingTask {
            id: "task-3".into(),
            room_number: "203".into(),
            status: HousekeepingStatus::Ready,
            priority: TaskPriority::Normal,
            assigned_to: Some("Viktor P.".into()),
            notes: None,
        },
    ]
}

fn rate(
    room_type: RoomType,
    date: NaiveDate,
    rate_cents: u64,
    competitors: &[(&str, u64)],
) -> RoomRate {
    RoomRate {
        room_type,
        date,
        rate_cents,
        competitor_rates: competitors
            .iter()
            .map(|(hotel, cents)| CompetitorRate {
                hotel: (*hotel).to_owned(),
                rate_cents: *cents,
            })
            .collect(),
    }
}

fn rates() -> Vec<RoomRate> {
    use RoomType::*;
    vec![
        rate(Queen, date(2024, 6, 1), 16_900, &[("Harbor Grand", 17_500), ("The Alcott", 15_900)]),
        rate(Queen, date(2024, 6, 2), 16_900, &[]),
        rate(Queen, date(2024, 6, 3), 18_900, &[]),
        rate(King, date(2024, 6, 1), 18_900, &[("Harbor Grand", 19_900), ("The Alcott", 18_500)]),
        rate(King, date(2024, 6, 2), 18_900, &[]),
        rate(King, date(2024, 6, 3), 20_900, &[]),
        rate(Suite, date(2024, 6, 1), 38_900, &[("Harbor Grand", 41_000)]),
        rate(Suite, date(2024, 6, 2), 38_900, &[]),
        rate(Suite, date(2024, 6, 3), 42_900, &[]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn occupied_rooms_match_checked_in_reservations() {
        let state = demo_state();
        for room in &state.rooms {
            let holders = state
                .reservations
                .iter()
                .filter(|r| {
                    r.status == ReservationStatus::CheckedIn
                        && r.room_number.as_deref() == Some(room.number.as_str())
                })
                .count();
            if room.status == RoomStatus::Occupied {
                assert_eq!(holders, 1, "room {} should have one in-house guest", room.number);
            } else {
                assert_eq!(holders, 0, "room {} should be empty", room.number);
            }
        }
    }

    #[test]
    fn ids_are_unique_within_each_collection() {
        let state = demo_state();
        let rooms: HashSet<_> = state.rooms.iter().map(|r| r.number.as_str()).collect();
        assert_eq!(rooms.len(), state.rooms.len());
        let reservations: HashSet<_> =
            state.reservations.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(reservations.len(), state.reservations.len());
        let billing: HashSet<_> = state.billing.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(billing.len(), state.billing.len());
        let tasks: HashSet<_> = state.housekeeping.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(tasks.len(), state.housekeeping.len());
        let rates: HashSet<_> = state
            .rates
            .iter()
            .map(|r| (r.room_type, r.date))
            .collect();
        assert_eq!(rates.len(), state.rates.len());
    }

    #[test]
    fn billing_and_tasks_reference_seeded_entities() {
        let state = demo_state();
        for item in &state.billing {
            assert!(
                state.reservation(&item.reservation_id).is_some(),
                "{} points at a missing reservation",
                item.id
            );
        }
        for task in &state.housekeeping {
            assert!(
                state.room(&task.room_number).is_some(),
                "{} points at a missing room",
                task.id
            );
        }
        for res in &state.reservations {
            assert!(state.guest(&res.guest_id).is_some());
        }
    }

    #[test]
    fn todays_lists_pick_out_the_expected_reservations() {
        let state = demo_state();
        let arrivals: Vec<_> = state.todays_arrivals().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(arrivals, vec!["res-1001", "res-1002"]);
        let departures: Vec<_> =
            state.todays_departures().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(departures, vec!["res-1003"]);
    }

    #[test]
    fn walkthrough_anchors_are_in_place() {
        let state = demo_state();
        // Check-in script: res-1001 confirmed with no room, 101 open.
        let res = state.reservation("res-1001").expect("seeded");
        assert_eq!(res.status, ReservationStatus::Confirmed);
        assert!(res.room_number.is_none());
        assert!(state.room("101").expect("seeded").status.is_assignable());
        // Rate script: King on June 1 opens at $189.
        assert_eq!(
            state.rate(RoomType::King, demo_today()).map(|r| r.rate_cents),
            Some(18_900)
        );
        // Billing script: a $100.00 line on the arriving reservation.
        assert_eq!(
            state.billing_for_reservation("res-1001")[0].amount_cents,
            10_000
        );
    }
}
