//! Per-day occupancy index derived from a reservation snapshot.

use std::collections::HashMap;

use chrono::NaiveDate;
use salonbook_domain::{parse_day, DayStatus, Reservation, SlotLabel};
use tracing::warn;

use super::classify::classify_slots;

/// Mapping from calendar day to the slot labels booked on it.
///
/// The index is a cache over the remote snapshot: it is always built complete
/// from a full snapshot and swapped in as a unit, never patched in place.
/// Records with an unparsable day or an unknown slot label are skipped.
#[derive(Debug, Clone, Default)]
pub struct OccupancyIndex {
    days: HashMap<NaiveDate, Vec<SlotLabel>>,
}

impl OccupancyIndex {
    /// Build the index from a full reservation snapshot.
    pub fn build(snapshot: &[Reservation]) -> Self {
        let mut days: HashMap<NaiveDate, Vec<SlotLabel>> = HashMap::new();

        for record in snapshot {
            let Some(day) = parse_day(&record.day) else {
                warn!(day = %record.day, holder = %record.holder_name,
                    "skipping reservation with unparsable day");
                continue;
            };
            let Some(slot) = SlotLabel::from_wire(&record.slot_label) else {
                warn!(slot = %record.slot_label, holder = %record.holder_name,
                    "skipping reservation with unknown slot label");
                continue;
            };
            days.entry(day).or_default().push(slot);
        }

        Self { days }
    }

    /// Slot labels booked on `day`, in snapshot order. Empty for free days.
    pub fn booked_slots(&self, day: NaiveDate) -> &[SlotLabel] {
        self.days.get(&day).map_or(&[], Vec::as_slice)
    }

    /// Classified occupancy status of `day`.
    pub fn status(&self, day: NaiveDate) -> DayStatus {
        classify_slots(self.booked_slots(day))
    }

    /// Statuses for every day in the inclusive range, in calendar order.
    ///
    /// Convenience for month-view rendering; days with no bookings report
    /// [`DayStatus::Free`] like any other.
    pub fn statuses_between(
        &self,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Vec<(NaiveDate, DayStatus)> {
        first
            .iter_days()
            .take_while(|day| *day <= last)
            .map(|day| (day, self.status(day)))
            .collect()
    }

    /// Number of days with at least one booking.
    pub fn occupied_day_count(&self) -> usize {
        self.days.len()
    }
}
