//! Availability aggregation: occupancy index, day classification, and slot
//! conflict resolution over the fixed catalog.

mod classify;
mod index;
mod resolver;

pub use classify::classify_slots;
pub use index::OccupancyIndex;
pub use resolver::{is_reserved_equivalent, offerable_slots};
