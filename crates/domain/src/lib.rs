//! # Salonbook Domain
//!
//! Business domain types and models for Salonbook.
//!
//! This crate contains:
//! - Domain data types (Reservation, SlotLabel, DayStatus, etc.)
//! - Domain error types and Result definitions
//! - Canonical calendar-day parsing and formatting
//!
//! ## Architecture
//! - No dependencies on other Salonbook crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod day;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use day::{day_key, parse_day, DAY_KEY_FORMAT};
pub use errors::{BookingError, Result};
pub use types::*;
