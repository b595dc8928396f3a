//! Reducer-style state store behind a hotel front-desk dashboard demo.
//!
//! One [`HotelStore`] owns everything the dashboard shows: rooms, guests,
//! reservations, billing, housekeeping, and rates, plus the UI selections
//! and a staging workspace for two-phase edits. Commands go through a pure
//! decide step that either rejects with a [`HotelError`] or yields events,
//! which are folded into the next state and pushed to subscribers. Nothing
//! is persisted; the seeded dataset is the whole world.
//!
//! # Examples
//!
//! ```
//! use frontdesk::{CommandContext, HotelCommand, HotelStore};
//!
//! let mut store = HotelStore::with_demo_data();
//! store.subscribe(|_state, events| println!("{} event(s)", events.len()));
//!
//! store.dispatch(
//!     HotelCommand::StartCheckIn { reservation_id: "res-1001".into() },
//!     CommandContext::default().with_actor("front-desk"),
//! )?;
//! store.dispatch(
//!     HotelCommand::StageRoomAssignment {
//!         reservation_id: "res-1001".into(),
//!         new_room: "101".into(),
//!     },
//!     CommandContext::default(),
//! )?;
//! store.dispatch(HotelCommand::CompleteCheckIn, CommandContext::default())?;
//! # Ok::<(), frontdesk::HotelError>(())
//! ```

pub mod domain;

mod command;
pub use command::{
    BillingAdjustment, CommandContext, DraftMessage, HotelCommand, KeyGenerationData, ViewType,
};
mod error;
pub use error::{ErrorKind, HotelError};
mod event;
pub use event::HotelEvent;
mod reducer;
pub mod seed;
mod staging;
pub use staging::{
    StagedBilling, StagedBillingChange, StagedRateChange, StagedRoomAssignment,
    StagedRoomStatusChange, Staging,
};
mod state;
pub use state::HotelState;
mod store;
pub use store::{HotelStore, HotelStoreBuilder, SubscriberId};
pub mod tools;
pub mod view;
