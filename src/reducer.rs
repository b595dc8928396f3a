//! The decide/apply core: `handle` validates a command into events, `apply`
//! folds an event into the next state.
//!
//! `handle` does every check and never mutates; `apply` is total and never
//! fails. A dispatch folds the whole event batch or none of it, which is
//! what makes multi-entity transitions like check-in completion atomic.

use uuid::Uuid;

use crate::command::{BillingAdjustment, HotelCommand, ViewType};
use crate::domain::{
    BillingItem, ReservationStatus, RoomRate, RoomStatus, discounted_cents,
};
use crate::error::HotelError;
use crate::event::HotelEvent;
use crate::staging::{
    StagedBilling, StagedBillingChange, StagedRateChange, StagedRoomAssignment,
    StagedRoomStatusChange, Staging,
};
use crate::state::HotelState;

impl HotelState {
    /// Decide what a command does. Returns the events to fold on success,
    /// the rejection on failure; either way `self` is untouched.
    ///
    /// An accepted command with nothing to do returns `Ok(vec![])`: cancels
    /// and clears are idempotent, commits are not.
    pub fn handle(&self, cmd: HotelCommand) -> Result<Vec<HotelEvent>, HotelError> {
        match cmd {
            HotelCommand::NavigateTo { view } => Ok(vec![HotelEvent::ViewChanged { view }]),

            HotelCommand::SelectReservation { reservation_id } => {
                if self.reservation(&reservation_id).is_none() {
                    return Err(HotelError::ReservationNotFound(reservation_id));
                }
                let mut events = Vec::new();
                if !self.current_view.is_detail_capable() {
                    events.push(HotelEvent::ViewChanged {
                        view: ViewType::Reservations,
                    });
                }
                events.push(HotelEvent::ReservationSelected { reservation_id });
                Ok(events)
            }

            HotelCommand::SelectRoom { room_number } => {
                if self.room(&room_number).is_none() {
                    return Err(HotelError::RoomNotFound(room_number));
                }
                Ok(vec![HotelEvent::RoomSelected { room_number }])
            }

            HotelCommand::HighlightReservations { reservation_ids } => {
                for id in &reservation_ids {
                    if self.reservation(id).is_none() {
                        return Err(HotelError::ReservationNotFound(id.clone()));
                    }
                }
                Ok(vec![HotelEvent::ReservationsHighlighted { reservation_ids }])
            }

            HotelCommand::HighlightRooms { room_numbers } => {
                for number in &room_numbers {
                    if self.room(number).is_none() {
                        return Err(HotelError::RoomNotFound(number.clone()));
                    }
                }
                Ok(vec![HotelEvent::RoomsHighlighted { room_numbers }])
            }

            HotelCommand::StartCheckIn { reservation_id } => {
                let res = self
                    .reservation(&reservation_id)
                    .ok_or_else(|| HotelError::ReservationNotFound(reservation_id.clone()))?;
                if res.status != ReservationStatus::Confirmed {
                    return Err(HotelError::NotConfirmed {
                        reservation_id,
                        status: res.status,
                    });
                }
                Ok(vec![HotelEvent::CheckInStarted { reservation_id }])
            }

            HotelCommand::StageRoomAssignment {
                reservation_id,
                new_room,
            } => {
                let res = self
                    .reservation(&reservation_id)
                    .ok_or_else(|| HotelError::ReservationNotFound(reservation_id.clone()))?;
                let room = self
                    .room(&new_room)
                    .ok_or_else(|| HotelError::RoomNotFound(new_room.clone()))?;
                // A reservation may always keep its own room, whatever state
                // the board shows it in.
                let own_room = res.room_number.as_deref() == Some(new_room.as_str());
                if !room.status.is_assignable() && !own_room {
                    return Err(HotelError::RoomNotAssignable {
                        room_number: new_room,
                        status: room.status,
                    });
                }
                Ok(vec![HotelEvent::RoomAssignmentStaged {
                    staged: StagedRoomAssignment {
                        previous_room: res.room_number.clone(),
                        reservation_id,
                        new_room,
                    },
                }])
            }

            HotelCommand::CompleteCheckIn => self.handle_complete_check_in(),

            HotelCommand::CancelCheckIn => {
                if self.check_in_reservation_id.is_none() {
                    // Nothing to abandon.
                    return Ok(vec![]);
                }
                Ok(vec![HotelEvent::CheckInCancelled])
            }

            HotelCommand::StageBillingAdjustment {
                reservation_id,
                adjustment,
            } => self.handle_stage_billing(reservation_id, adjustment),

            HotelCommand::StageRoomStatusChange {
                room_number,
                new_status,
            } => {
                let room = self
                    .room(&room_number)
                    .ok_or_else(|| HotelError::RoomNotFound(room_number.clone()))?;
                if new_status == RoomStatus::Occupied {
                    return Err(HotelError::ManualOccupancy);
                }
                Ok(vec![HotelEvent::RoomStatusChangeStaged {
                    staged: StagedRoomStatusChange {
                        previous_status: room.status,
                        room_number,
                        new_status,
                    },
                }])
            }

            HotelCommand::CommitRoomStatusChange => {
                let staged = self
                    .staging
                    .room_status
                    .as_ref()
                    .ok_or(HotelError::NoStagedRoomStatus)?;
                Ok(vec![HotelEvent::RoomStatusCommitted {
                    room_number: staged.room_number.clone(),
                    new_status: staged.new_status,
                }])
            }

            HotelCommand::CancelRoomStatusChange => {
                if self.staging.room_status.is_none() {
                    return Ok(vec![]);
                }
                Ok(vec![HotelEvent::RoomStatusChangeCancelled])
            }

            HotelCommand::StageRateChange {
                room_type,
                date,
                new_rate_cents,
            } => {
                if new_rate_cents == 0 {
                    return Err(HotelError::ZeroRate);
                }
                Ok(vec![HotelEvent::RateChangeStaged {
                    staged: StagedRateChange {
                        room_type,
                        date,
                        previous_rate_cents: self.rate(room_type, date).map(|r| r.rate_cents),
                        new_rate_cents,
                    },
                }])
            }

            HotelCommand::CommitRateChange => {
                let staged = self
                    .staging
                    .rate_change
                    .as_ref()
                    .ok_or(HotelError::NoStagedRateChange)?;
                Ok(vec![HotelEvent::RateCommitted {
                    room_type: staged.room_type,
                    date: staged.date,
                    rate_cents: staged.new_rate_cents,
                }])
            }

            HotelCommand::CancelRateChange => {
                if self.staging.rate_change.is_none() {
                    return Ok(vec![]);
                }
                Ok(vec![HotelEvent::RateChangeCancelled])
            }

            HotelCommand::UpdateHousekeepingTask {
                task_id,
                status,
                priority,
                assigned_to,
                notes,
            } => {
                if self.housekeeping_task(&task_id).is_none() {
                    return Err(HotelError::TaskNotFound(task_id));
                }
                if status.is_none() && priority.is_none() && assigned_to.is_none() && notes.is_none()
                {
                    // Nothing to change.
                    return Ok(vec![]);
                }
                Ok(vec![HotelEvent::HousekeepingTaskUpdated {
                    task_id,
                    status,
                    priority,
                    assigned_to,
                    notes,
                }])
            }

            HotelCommand::SetDraftMessage { draft } => {
                if draft.body.trim().is_empty() {
                    return Err(HotelError::EmptyDraft);
                }
                Ok(vec![HotelEvent::DraftMessageSet { draft }])
            }

            HotelCommand::ClearDraftMessage => {
                if self.draft_message.is_none() {
                    return Ok(vec![]);
                }
                Ok(vec![HotelEvent::DraftMessageCleared])
            }

            HotelCommand::SetKeyGeneration { data } => {
                if self.reservation(&data.reservation_id).is_none() {
                    return Err(HotelError::ReservationNotFound(data.reservation_id));
                }
                if self.room(&data.room_number).is_none() {
                    return Err(HotelError::RoomNotFound(data.room_number));
                }
                if data.count == 0 {
                    return Err(HotelError::ZeroKeyCards);
                }
                Ok(vec![HotelEvent::KeyGenerationSet { data }])
            }

            HotelCommand::ClearKeyGeneration => {
                if self.key_generation.is_none() {
                    return Ok(vec![]);
                }
                Ok(vec![HotelEvent::KeyGenerationCleared])
            }

            HotelCommand::ResetState => Ok(vec![HotelEvent::StateReset]),
        }
    }

    /// Fold one event into the next state. Total: unknown ids fold to
    /// no-ops rather than failing, since validation already happened.
    pub fn apply(mut self, event: &HotelEvent) -> Self {
        match event {
            HotelEvent::ViewChanged { view } => {
                self.current_view = *view;
                self.highlighted_reservations.clear();
                self.highlighted_rooms.clear();
            }
            HotelEvent::ReservationSelected { reservation_id } => {
                self.selected_reservation_id = Some(reservation_id.clone());
            }
            HotelEvent::RoomSelected { room_number } => {
                self.selected_room_number = Some(room_number.clone());
            }
            HotelEvent::ReservationsHighlighted { reservation_ids } => {
                self.highlighted_reservations = reservation_ids.clone();
            }
            HotelEvent::RoomsHighlighted { room_numbers } => {
                self.highlighted_rooms = room_numbers.clone();
            }
            HotelEvent::CheckInStarted { reservation_id } => {
                self.check_in_reservation_id = Some(reservation_id.clone());
                self.staging.clear_check_in();
            }
            HotelEvent::RoomAssignmentStaged { staged } => {
                self.staging.room_assignment = Some(staged.clone());
            }
            HotelEvent::CheckInCompleted {
                reservation_id,
                room_number,
                previous_room,
            } => {
                self.apply_check_in_completed(reservation_id, room_number, previous_room.as_deref());
            }
            HotelEvent::CheckInCancelled => {
                self.check_in_reservation_id = None;
                self.staging.clear_check_in();
            }
            HotelEvent::BillingAdjustmentStaged { staged } => {
                self.staging.push_billing(staged.clone());
            }
            HotelEvent::RoomStatusChangeStaged { staged } => {
                self.staging.room_status = Some(staged.clone());
            }
            HotelEvent::RoomStatusCommitted {
                room_number,
                new_status,
            } => {
                if let Some(room) = self.room_mut(room_number) {
                    room.status = *new_status;
                }
                self.staging.room_status = None;
            }
            HotelEvent::RoomStatusChangeCancelled => {
                self.staging.room_status = None;
            }
            HotelEvent::RateChangeStaged { staged } => {
                self.staging.rate_change = Some(staged.clone());
            }
            HotelEvent::RateCommitted {
                room_type,
                date,
                rate_cents,
            } => {
                match self
                    .rates
                    .iter_mut()
                    .find(|r| r.room_type == *room_type && r.date == *date)
                {
                    Some(row) => row.rate_cents = *rate_cents,
                    None => self.rates.push(RoomRate {
                        room_type: *room_type,
                        date: *date,
                        rate_cents: *rate_cents,
                        competitor_rates: vec![],
                    }),
                }
                self.staging.rate_change = None;
            }
            HotelEvent::RateChangeCancelled => {
                self.staging.rate_change = None;
            }
            HotelEvent::HousekeepingTaskUpdated {
                task_id,
                status,
                priority,
                assigned_to,
                notes,
            } => {
                if let Some(task) = self.housekeeping_task_mut(task_id) {
                    if let Some(s) = status {
                        task.status = *s;
                    }
                    if let Some(p) = priority {
                        task.priority = *p;
                    }
                    if let Some(a) = assigned_to {
                        task.assigned_to = Some(a.clone());
                    }
                    if let Some(n) = notes {
                        task.notes = Some(n.clone());
                    }
                }
            }
            HotelEvent::DraftMessageSet { draft } => {
                self.draft_message = Some(draft.clone());
            }
            HotelEvent::DraftMessageCleared => {
                self.draft_message = None;
            }
            HotelEvent::KeyGenerationSet { data } => {
                self.key_generation = Some(data.clone());
            }
            HotelEvent::KeyGenerationCleared => {
                self.key_generation = None;
            }
            // The store swaps the seeded snapshot back in; nothing to fold.
            HotelEvent::StateReset => {}
        }
        self
    }

    fn handle_complete_check_in(&self) -> Result<Vec<HotelEvent>, HotelError> {
        let reservation_id = self
            .check_in_reservation_id
            .clone()
            .ok_or(HotelError::NoCheckInInProgress)?;
        let res = self
            .reservation(&reservation_id)
            .ok_or_else(|| HotelError::ReservationNotFound(reservation_id.clone()))?;
        if res.status != ReservationStatus::Confirmed {
            return Err(HotelError::NotConfirmed {
                reservation_id,
                status: res.status,
            });
        }

        // The staged assignment for this reservation wins over a
        // pre-assigned room; one staged for another reservation is ignored.
        let staged_room = self
            .staging
            .room_assignment
            .as_ref()
            .filter(|s| s.reservation_id == reservation_id)
            .map(|s| s.new_room.clone());
        let room_number = staged_room
            .or_else(|| res.room_number.clone())
            .ok_or_else(|| HotelError::NoRoomAssigned(reservation_id.clone()))?;

        // The board can change between staging and committing; check again.
        let room = self
            .room(&room_number)
            .ok_or_else(|| HotelError::RoomNotFound(room_number.clone()))?;
        let own_room = res.room_number.as_deref() == Some(room_number.as_str());
        if !room.status.is_assignable() && !own_room {
            return Err(HotelError::RoomNotAssignable {
                room_number,
                status: room.status,
            });
        }

        let previous_room = res.room_number.clone().filter(|p| *p != room_number);
        Ok(vec![HotelEvent::CheckInCompleted {
            reservation_id,
            room_number,
            previous_room,
        }])
    }

    fn handle_stage_billing(
        &self,
        reservation_id: String,
        adjustment: BillingAdjustment,
    ) -> Result<Vec<HotelEvent>, HotelError> {
        if self.reservation(&reservation_id).is_none() {
            return Err(HotelError::ReservationNotFound(reservation_id));
        }
        let change = match adjustment {
            BillingAdjustment::Add {
                category,
                description,
                amount_cents,
            } => {
                if amount_cents == 0 {
                    return Err(HotelError::ZeroChargeAmount);
                }
                StagedBilling::Add {
                    item: BillingItem {
                        id: Uuid::new_v4().to_string(),
                        reservation_id: reservation_id.clone(),
                        category,
                        description,
                        amount_cents,
                        date: self.today,
                        is_comped: false,
                    },
                }
            }
            BillingAdjustment::Remove { item_id } => {
                self.committed_item(&reservation_id, &item_id)?;
                StagedBilling::Remove { item_id }
            }
            BillingAdjustment::Discount { item_id, percent } => {
                if percent == 0 || percent > 100 {
                    return Err(HotelError::DiscountOutOfRange(percent));
                }
                self.committed_item(&reservation_id, &item_id)?;
                StagedBilling::Discount { item_id, percent }
            }
        };
        Ok(vec![HotelEvent::BillingAdjustmentStaged {
            staged: StagedBillingChange {
                reservation_id,
                change,
            },
        }])
    }

    /// Look up a committed folio line belonging to a reservation.
    fn committed_item(
        &self,
        reservation_id: &str,
        item_id: &str,
    ) -> Result<&BillingItem, HotelError> {
        self.billing
            .iter()
            .find(|i| i.id == item_id && i.reservation_id == reservation_id)
            .ok_or_else(|| HotelError::BillingItemNotFound {
                item_id: item_id.to_owned(),
                reservation_id: reservation_id.to_owned(),
            })
    }

    fn apply_check_in_completed(
        &mut self,
        reservation_id: &str,
        room_number: &str,
        previous_room: Option<&str>,
    ) {
        if let Some(res) = self.reservation_mut(reservation_id) {
            res.status = ReservationStatus::CheckedIn;
            res.room_number = Some(room_number.to_owned());
        }
        if let Some(room) = self.room_mut(room_number) {
            room.status = RoomStatus::Occupied;
        }
        if let Some(prev) = previous_room
            && let Some(room) = self.room_mut(prev)
        {
            room.status = RoomStatus::Available;
        }

        // Fold this reservation's staged folio edits into committed billing,
        // in stage order. A removal deletes whatever a discount did to the
        // same line, so remove wins whichever was staged first.
        let changes: Vec<StagedBillingChange> = std::mem::take(&mut self.staging.billing_changes);
        for staged in changes {
            if staged.reservation_id != reservation_id {
                continue; // dropped with the rest of the staging workspace
            }
            match staged.change {
                StagedBilling::Add { item } => self.billing.push(item),
                StagedBilling::Remove { item_id } => {
                    self.billing.retain(|i| i.id != item_id);
                }
                StagedBilling::Discount { item_id, percent } => {
                    if let Some(item) = self.billing.iter_mut().find(|i| i.id == item_id) {
                        item.amount_cents = discounted_cents(item.amount_cents, percent);
                        if percent == 100 {
                            item.is_comped = true;
                        }
                    }
                }
            }
        }

        // Completing a check-in resets the whole staging workspace.
        self.staging = Staging::default();
        self.check_in_reservation_id = None;
    }
}
