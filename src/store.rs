//! The store: owns the state, runs dispatches, and fans accepted event
//! batches out to subscribers.
//!
//! Single-threaded by design. A dispatch runs to completion before the
//! next one starts, so subscribers always observe the state exactly as
//! the batch left it.

use chrono::NaiveDate;

use crate::command::{CommandContext, HotelCommand};
use crate::error::HotelError;
use crate::event::HotelEvent;
use crate::state::HotelState;

/// Handle returned by [`HotelStore::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(&HotelState, &[HotelEvent])>;

/// In-memory hotel store. Construct one per dashboard session.
pub struct HotelStore {
    state: HotelState,
    /// Pristine copy of the initial state, swapped back in on reset.
    seed: HotelState,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: u64,
}

// Manual `Debug` because subscriber closures are not `Debug`.
impl std::fmt::Debug for HotelStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotelStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl HotelStore {
    /// Create a store over the given initial state.
    pub fn new(seed: HotelState) -> Self {
        Self {
            state: seed.clone(),
            seed,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// Create a store seeded with the demo dataset.
    pub fn with_demo_data() -> Self {
        Self::new(crate::seed::demo_state())
    }

    pub fn builder() -> HotelStoreBuilder {
        HotelStoreBuilder::new()
    }

    /// The current state, committed entities and staging workspace alike.
    pub fn state(&self) -> &HotelState {
        &self.state
    }

    /// Run a command through decide and fold.
    ///
    /// On acceptance the returned events have already been folded into the
    /// state and delivered to subscribers. A rejection leaves the state
    /// exactly as it was and notifies nobody; an empty batch means the
    /// command was accepted but had nothing to do, which is also silent.
    ///
    /// # Examples
    ///
    /// ```
    /// use frontdesk::{CommandContext, HotelCommand, HotelStore, ViewType};
    ///
    /// let mut store = HotelStore::with_demo_data();
    /// let events = store
    ///     .dispatch(
    ///         HotelCommand::NavigateTo { view: ViewType::Rooms },
    ///         CommandContext::default(),
    ///     )
    ///     .unwrap();
    /// assert_eq!(events.len(), 1);
    /// assert_eq!(store.state().current_view, ViewType::Rooms);
    /// ```
    pub fn dispatch(
        &mut self,
        cmd: HotelCommand,
        ctx: CommandContext,
    ) -> Result<Vec<HotelEvent>, HotelError> {
        tracing::debug!(
            command = cmd.name(),
            actor = ctx.actor.as_deref().unwrap_or("anonymous"),
            correlation_id = ctx.correlation_id.as_deref().unwrap_or(""),
            "dispatching command"
        );

        let events = match self.state.handle(cmd) {
            Ok(events) => events,
            Err(err) => {
                tracing::debug!(error = %err, kind = err.kind().as_str(), "command rejected");
                return Err(err);
            }
        };
        if events.is_empty() {
            // Accepted, nothing changed, nobody notified.
            return Ok(events);
        }

        let state = std::mem::take(&mut self.state);
        self.state = events.iter().fold(state, |s, e| s.apply(e));
        if events.contains(&HotelEvent::StateReset) {
            self.state = self.seed.clone();
        }

        for event in &events {
            match event {
                HotelEvent::CheckInCompleted {
                    reservation_id,
                    room_number,
                    ..
                } => tracing::info!(%reservation_id, %room_number, "check-in completed"),
                HotelEvent::RoomStatusCommitted {
                    room_number,
                    new_status,
                } => {
                    tracing::info!(%room_number, status = new_status.as_str(), "room status committed");
                }
                HotelEvent::RateCommitted {
                    room_type,
                    date,
                    rate_cents,
                } => {
                    tracing::info!(room_type = room_type.as_str(), %date, rate_cents, "rate committed");
                }
                HotelEvent::StateReset => tracing::info!("state reset to seed"),
                _ => {}
            }
        }

        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state, &events);
        }
        Ok(events)
    }

    /// Register a callback invoked synchronously after every accepted,
    /// non-empty dispatch.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriberId
    where
        F: FnMut(&HotelState, &[HotelEvent]) + 'static,
    {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }
}

/// Builder for stores that need a custom seed or a different "today".
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use frontdesk::HotelStore;
///
/// let today = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
/// let store = HotelStore::builder().today(today).build();
/// assert_eq!(store.state().today, today);
/// ```
#[derive(Debug, Default)]
pub struct HotelStoreBuilder {
    seed: Option<HotelState>,
    today: Option<NaiveDate>,
}

impl HotelStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the demo dataset with a custom initial state.
    pub fn seed(mut self, seed: HotelState) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pin the store's clock to a specific date.
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn build(self) -> HotelStore {
        let mut seed = self.seed.unwrap_or_else(crate::seed::demo_state);
        if let Some(today) = self.today {
            seed.today = today;
        }
        HotelStore::new(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ViewType;
    use crate::domain::RoomType;
    use crate::seed;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ctx() -> CommandContext {
        CommandContext::default().with_actor("front-desk")
    }

    #[test]
    fn accepted_dispatches_notify_with_the_folded_state() {
        let mut store = HotelStore::with_demo_data();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |state, events| {
            sink.borrow_mut().push((state.current_view, events.len()));
        });

        store
            .dispatch(HotelCommand::NavigateTo { view: ViewType::Rates }, ctx())
            .expect("accepted");

        assert_eq!(&*seen.borrow(), &[(ViewType::Rates, 1)]);
    }

    #[test]
    fn rejections_leave_state_alone_and_stay_silent() {
        let mut store = HotelStore::with_demo_data();
        let calls = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&calls);
        store.subscribe(move |_, _| *sink.borrow_mut() += 1);
        let before = store.state().clone();

        let err = store
            .dispatch(
                HotelCommand::SelectRoom {
                    room_number: "999".into(),
                },
                ctx(),
            )
            .unwrap_err();
        assert!(matches!(err, HotelError::RoomNotFound(_)));
        assert_eq!(store.state(), &before);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn benign_no_ops_do_not_notify() {
        let mut store = HotelStore::with_demo_data();
        let calls = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&calls);
        store.subscribe(move |_, _| *sink.borrow_mut() += 1);

        let events = store
            .dispatch(HotelCommand::CancelCheckIn, ctx())
            .expect("idempotent cancel");
        assert!(events.is_empty());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn reset_restores_the_seed_exactly() {
        let mut store = HotelStore::with_demo_data();
        store
            .dispatch(HotelCommand::NavigateTo { view: ViewType::Billing }, ctx())
            .expect("accepted");
        store
            .dispatch(
                HotelCommand::StageRateChange {
                    room_type: RoomType::Queen,
                    date: seed::demo_today(),
                    new_rate_cents: 20_000,
                },
                ctx(),
            )
            .expect("accepted");
        store
            .dispatch(HotelCommand::CommitRateChange, ctx())
            .expect("accepted");
        assert_ne!(store.state(), &seed::demo_state());

        let events = store
            .dispatch(HotelCommand::ResetState, ctx())
            .expect("accepted");
        assert_eq!(events, vec![HotelEvent::StateReset]);
        assert_eq!(store.state(), &seed::demo_state());
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut store = HotelStore::with_demo_data();
        let calls = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&calls);
        let id = store.subscribe(move |_, _| *sink.borrow_mut() += 1);

        store
            .dispatch(HotelCommand::NavigateTo { view: ViewType::Rooms }, ctx())
            .expect("accepted");
        assert!(store.unsubscribe(id));
        store
            .dispatch(HotelCommand::NavigateTo { view: ViewType::Billing }, ctx())
            .expect("accepted");

        assert_eq!(*calls.borrow(), 1);
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn builder_pins_the_clock() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 4).expect("valid date");
        let store = HotelStore::builder().today(today).build();
        assert_eq!(store.state().today, today);
        // Everything else still comes from the demo seed.
        assert_eq!(store.state().rooms.len(), seed::demo_state().rooms.len());
    }
}
