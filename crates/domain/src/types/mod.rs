//! Domain types and models

pub mod reservation;
pub mod slot;

pub use reservation::{FieldErrors, Reservation, ReservationDraft, ReservationRequest};
pub use slot::{DayStatus, SlotLabel, TimeSlot, CATALOG};
