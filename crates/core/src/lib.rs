//! # Salonbook Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The availability pipeline: occupancy index, day classification, and
//!   slot conflict resolution
//! - Form validation rules
//! - The booking service and its port/adapter interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `salonbook-domain`
//! - No HTTP or platform code
//! - All external collaborators reached via traits
//! - Pure, testable business logic

pub mod availability;
pub mod booking;
pub mod validation;

// Re-export specific items to avoid ambiguity
pub use availability::{classify_slots, is_reserved_equivalent, offerable_slots, OccupancyIndex};
pub use booking::{BookingService, Clock, Notice, Notifier, Phase, ReservationStore, SubmitOutcome};
pub use validation::validate;
