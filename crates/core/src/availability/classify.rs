//! Day status classification.

use salonbook_domain::{DayStatus, SlotLabel};

/// Classify a day from the multiset of slot labels booked on it.
///
/// The rule is ordered; the first match wins:
/// 1. nothing booked → free
/// 2. the full-day slot is booked → occupied
/// 3. the morning plus either evening slot is booked → occupied
///    (the two halves saturate the day even though the full-day slot was
///    never itself booked)
/// 4. anything else → partial
pub fn classify_slots(booked: &[SlotLabel]) -> DayStatus {
    if booked.is_empty() {
        return DayStatus::Free;
    }
    if booked.contains(&SlotLabel::Full) {
        return DayStatus::Occupied;
    }
    let has_morning = booked.contains(&SlotLabel::Morning);
    let has_evening = booked.iter().any(|slot| slot.is_evening());
    if has_morning && has_evening {
        return DayStatus::Occupied;
    }
    DayStatus::Partial
}
