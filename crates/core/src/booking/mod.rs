//! Booking flow: port traits and the submission state machine.

pub mod ports;
pub mod service;

pub use ports::{Clock, Notice, Notifier, ReservationStore, SubmitOutcome};
pub use service::{BookingService, Phase};
