//! Entity types owned by the hotel state store.
//!
//! Each module defines one entity family (struct, status enums, helpers).
//! The store holds the only mutable copies; consumers read snapshots.

pub mod billing;
pub mod guest;
pub mod housekeeping;
pub mod rate;
pub mod reservation;
pub mod room;

pub use billing::{BillingItem, ChargeCategory, discounted_cents};
pub use guest::{Guest, LoyaltyTier, PastStay};
pub use housekeeping::{HousekeepingStatus, HousekeepingTask, TaskPriority};
pub use rate::{CompetitorRate, RoomRate};
pub use reservation::{Reservation, ReservationStatus};
pub use room::{Room, RoomStatus, RoomType};
