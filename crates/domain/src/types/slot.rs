//! The fixed time-slot catalog and per-day occupancy status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for one of the four bookable time ranges.
///
/// The remote store identifies slots by the human-readable hour range
/// (`tramoHorario`); [`SlotLabel::wire_label`] and [`SlotLabel::from_wire`]
/// convert between the two representations at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotLabel {
    /// Whole bookable day, 10:00 - 22:00.
    Full,
    /// Morning only, 10:00 - 15:00.
    Morning,
    /// First evening option, 17:00 - 22:00.
    EveningA,
    /// Second evening option, 18:00 - 23:00.
    EveningB,
}

impl SlotLabel {
    /// The label the remote store uses for this slot.
    pub fn wire_label(self) -> &'static str {
        match self {
            Self::Full => "10:00 - 22:00",
            Self::Morning => "10:00 - 15:00",
            Self::EveningA => "17:00 - 22:00",
            Self::EveningB => "18:00 - 23:00",
        }
    }

    /// Parse a remote-store label. Unknown labels yield `None`; callers
    /// decide whether that is skippable (snapshot ingestion) or an error.
    pub fn from_wire(label: &str) -> Option<Self> {
        match label.trim() {
            "10:00 - 22:00" => Some(Self::Full),
            "10:00 - 15:00" => Some(Self::Morning),
            "17:00 - 22:00" => Some(Self::EveningA),
            "18:00 - 23:00" => Some(Self::EveningB),
            _ => None,
        }
    }

    /// Whether this is one of the two interchangeable evening slots.
    pub fn is_evening(self) -> bool {
        matches!(self, Self::EveningA | Self::EveningB)
    }
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_label())
    }
}

/// Catalog entry: a slot label plus its descriptive hour range.
///
/// The hours are presentation data only; conflict logic operates on labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub label: SlotLabel,
    pub start_hour: u8,
    pub end_hour: u8,
}

/// The fixed, ordered catalog of bookable slots.
///
/// Order matters: the conflict resolver reports offerable slots in catalog
/// order.
pub const CATALOG: [TimeSlot; 4] = [
    TimeSlot { label: SlotLabel::Full, start_hour: 10, end_hour: 22 },
    TimeSlot { label: SlotLabel::Morning, start_hour: 10, end_hour: 15 },
    TimeSlot { label: SlotLabel::EveningA, start_hour: 17, end_hour: 22 },
    TimeSlot { label: SlotLabel::EveningB, start_hour: 18, end_hour: 23 },
];

/// Occupancy classification of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// No slot booked.
    Free,
    /// Some slots booked, but the day can still take bookings.
    Partial,
    /// The day is saturated; no further booking is possible.
    Occupied,
}
