//! Booking service - selection state machine and submit orchestration.

use std::sync::Arc;

use chrono::NaiveDate;
use salonbook_domain::{
    BookingError, DayStatus, FieldErrors, ReservationDraft, ReservationRequest, Result, SlotLabel,
    TimeSlot,
};
use tracing::{debug, info, warn};

use super::ports::{Clock, Notice, Notifier, ReservationStore, SubmitOutcome};
use crate::availability::{offerable_slots, OccupancyIndex};
use crate::validation::validate;

/// Phase of the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    DaySelected,
    SlotSelected,
    Submitting,
}

/// Orchestrates day selection, slot selection, form validation, and
/// submission against the remote store.
///
/// The service runs on one logical thread and suspends only at the store's
/// await points; all pure computation (classification, conflict resolution,
/// validation) runs to completion synchronously.
pub struct BookingService {
    store: Arc<dyn ReservationStore>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    index: OccupancyIndex,
    phase: Phase,
    selected_day: Option<NaiveDate>,
    selected_slot: Option<SlotLabel>,
    draft: ReservationDraft,
    field_errors: FieldErrors,
    in_flight: bool,
}

impl BookingService {
    /// Create a new booking service with an empty occupancy index.
    ///
    /// Call [`refresh`](Self::refresh) before rendering availability.
    pub fn new(
        store: Arc<dyn ReservationStore>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            notifier,
            clock,
            index: OccupancyIndex::default(),
            phase: Phase::Idle,
            selected_day: None,
            selected_slot: None,
            draft: ReservationDraft::default(),
            field_errors: FieldErrors::new(),
            in_flight: false,
        }
    }

    /// Re-fetch the reservation snapshot and rebuild the occupancy index.
    ///
    /// The index is replaced as a unit only after a fully successful fetch;
    /// on failure the previous index stays visible and a fetch-failure
    /// notice is emitted.
    pub async fn refresh(&mut self) -> Result<()> {
        let fetched = self.store.fetch_all().await;
        match fetched {
            Ok(snapshot) => {
                let rebuilt = OccupancyIndex::build(&snapshot);
                debug!(
                    records = snapshot.len(),
                    days = rebuilt.occupied_day_count(),
                    "occupancy index rebuilt"
                );
                self.index = rebuilt;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch reservation snapshot");
                self.notifier.notify(Notice::FetchFailed);
                Err(err)
            }
        }
    }

    /// Classified status of a day under the current index.
    pub fn day_status(&self, day: NaiveDate) -> DayStatus {
        self.index.status(day)
    }

    /// Statuses for an inclusive day range, for calendar rendering.
    pub fn statuses_between(
        &self,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Vec<(NaiveDate, DayStatus)> {
        self.index.statuses_between(first, last)
    }

    /// Select a day. Returns whether the selection was accepted.
    ///
    /// An occupied day or a day that is not strictly in the future rejects
    /// the selection, emits a notice, and resets the whole selection state.
    /// An accepted day clears any previously chosen slot.
    pub fn select_day(&mut self, day: NaiveDate) -> bool {
        if self.index.status(day) == DayStatus::Occupied {
            self.notifier.notify(Notice::DayOccupied);
            self.reset();
            return false;
        }
        if day <= self.clock.today() {
            self.notifier.notify(Notice::DayNotInFuture);
            self.reset();
            return false;
        }

        self.selected_day = Some(day);
        self.selected_slot = None;
        self.phase = Phase::DaySelected;
        true
    }

    /// Catalog slots still offerable for the selected day, in catalog order.
    ///
    /// Empty when no day is selected or nothing is bookable.
    pub fn offered_slots(&self) -> Vec<TimeSlot> {
        let Some(day) = self.selected_day else {
            return Vec::new();
        };
        offerable_slots(self.index.booked_slots(day), self.index.status(day))
    }

    /// Select a slot from the currently offered subset.
    ///
    /// Labels outside the offered subset are refused.
    pub fn select_slot(&mut self, slot: SlotLabel) -> bool {
        if !self.offered_slots().iter().any(|offered| offered.label == slot) {
            debug!(%slot, "refusing slot outside the offered subset");
            return false;
        }
        self.selected_slot = Some(slot);
        self.phase = Phase::SlotSelected;
        true
    }

    /// Current draft form values.
    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    /// Mutable access to the draft form values.
    pub fn draft_mut(&mut self) -> &mut ReservationDraft {
        &mut self.draft
    }

    /// Field errors from the last failed submit attempt.
    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Current phase of the booking flow.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Submit the reservation.
    ///
    /// Preconditions are checked in order - selected day, selected slot,
    /// passing form validation - each failure emitting its own notice and
    /// leaving the state unchanged. After the remote write reports an
    /// outcome (accepted or rejected) the snapshot is re-fetched so the
    /// index reflects the store before the flow returns to idle. A rejected
    /// write preserves the draft; an accepted one clears everything. A
    /// transport failure emits a generic notice and leaves the flow
    /// retryable.
    pub async fn submit(&mut self) -> Result<()> {
        if self.in_flight {
            warn!("refusing submit while another submission is in flight");
            return Err(BookingError::InvalidInput("a submission is already in flight".into()));
        }
        let Some(day) = self.selected_day else {
            self.notifier.notify(Notice::NoDaySelected);
            return Err(BookingError::InvalidInput("no day selected".into()));
        };
        let Some(slot) = self.selected_slot else {
            self.notifier.notify(Notice::NoSlotSelected);
            return Err(BookingError::InvalidInput("no slot selected".into()));
        };
        let errors = validate(&self.draft);
        if !errors.is_empty() {
            self.field_errors = errors;
            self.notifier.notify(Notice::InvalidForm);
            return Err(BookingError::InvalidInput("form validation failed".into()));
        }

        self.phase = Phase::Submitting;
        self.in_flight = true;
        self.field_errors = FieldErrors::new();
        let request = self.build_request(day, slot);

        let outcome = self.store.submit(&request).await;
        let result = match outcome {
            Ok(SubmitOutcome::Accepted) => {
                info!(day = %day, %slot, "reservation accepted");
                self.reset();
                self.notifier.notify(Notice::WriteAccepted);
                Ok(())
            }
            Ok(SubmitOutcome::Rejected(message)) => {
                // Draft and selection stay intact so the user can adjust and
                // retry.
                warn!(day = %day, %slot, reason = %message, "reservation rejected by store");
                self.notifier.notify(Notice::WriteRejected(message.clone()));
                Err(BookingError::RemoteRejected(message))
            }
            Err(err) => {
                warn!(error = %err, "reservation submit failed in transport");
                self.in_flight = false;
                self.phase = Phase::Idle;
                self.notifier.notify(Notice::Failure);
                return Err(err);
            }
        };

        // The store reported an outcome, so its contents may have changed;
        // rebuild the index from a fresh snapshot either way.
        if let Err(err) = self.refresh().await {
            warn!(error = %err, "post-submit snapshot refresh failed");
        }

        self.in_flight = false;
        self.phase = Phase::Idle;
        result
    }

    fn build_request(&self, day: NaiveDate, slot: SlotLabel) -> ReservationRequest {
        ReservationRequest {
            holder_name: self.draft.holder_name.clone(),
            email: self.draft.email.clone(),
            national_id: self.draft.national_id.clone(),
            phone: self.draft.phone.clone(),
            day,
            slot,
            accepts_terms: self.draft.accepts_terms,
            popcorn_machine: self.draft.popcorn_machine,
            cotton_candy: self.draft.cotton_candy,
            submitted_on: self.clock.today(),
        }
    }

    /// Clear selection, draft, and field errors, returning to idle.
    fn reset(&mut self) {
        self.selected_day = None;
        self.selected_slot = None;
        self.draft = ReservationDraft::default();
        self.field_errors = FieldErrors::new();
        self.phase = Phase::Idle;
    }
}
