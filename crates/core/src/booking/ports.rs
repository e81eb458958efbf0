//! Port interfaces for the booking flow.
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use chrono::NaiveDate;
use salonbook_domain::{Reservation, ReservationRequest, Result};

/// Outcome of a reservation write as reported by the remote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The store accepted the reservation.
    Accepted,
    /// The store rejected it with a human-readable message (for example,
    /// "slot no longer available"). Surfaced verbatim to the user.
    Rejected(String),
}

/// Trait for the remote reservation store.
///
/// The store is externally owned; this module only reads full snapshots of
/// it and appends new reservations. It never mutates or deletes records.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Fetch the full current reservation snapshot.
    async fn fetch_all(&self) -> Result<Vec<Reservation>>;

    /// Write one reservation request.
    ///
    /// `Err` means the transport failed; a semantic rejection by the store
    /// is an `Ok(SubmitOutcome::Rejected(_))`.
    async fn submit(&self, request: &ReservationRequest) -> Result<SubmitOutcome>;
}

/// Transient, user-facing notices emitted by the booking flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The reservation snapshot could not be fetched.
    FetchFailed,
    /// The chosen day is fully booked.
    DayOccupied,
    /// The chosen day is today or in the past.
    DayNotInFuture,
    /// Submit attempted with no day selected.
    NoDaySelected,
    /// Submit attempted with no slot selected.
    NoSlotSelected,
    /// Submit attempted with an invalid contact form.
    InvalidForm,
    /// The store rejected the write; carries the store's message.
    WriteRejected(String),
    /// The store accepted the write.
    WriteAccepted,
    /// Generic transport failure during submit.
    Failure,
}

impl Notice {
    /// Default user-facing message. Presentation layers may localize instead.
    pub fn message(&self) -> &str {
        match self {
            Self::FetchFailed => "Could not load existing reservations. Please try again.",
            Self::DayOccupied => "That day is fully booked. No slots can be reserved.",
            Self::DayNotInFuture => "Only future days can be booked.",
            Self::NoDaySelected => "Select a day before booking.",
            Self::NoSlotSelected => "Select a time slot before booking.",
            Self::InvalidForm => "Please review the form.",
            Self::WriteRejected(message) => message,
            Self::WriteAccepted => "Reservation completed successfully.",
            Self::Failure => "Booking failed. Please try again.",
        }
    }
}

/// Trait for delivering notices to the user.
///
/// Implementations are expected to be non-blocking and auto-dismissing
/// (toast-style); the core never waits on acknowledgement.
pub trait Notifier: Send + Sync {
    /// Deliver one notice.
    fn notify(&self, notice: Notice);
}

/// Trait for the current calendar date.
///
/// Injected so the "only strictly future days" rule is testable.
pub trait Clock: Send + Sync {
    /// Today's local calendar date.
    fn today(&self) -> NaiveDate;
}
