//! Slot conflict resolution: which catalog slots can still be offered.

use salonbook_domain::{DayStatus, SlotLabel, TimeSlot, CATALOG};

/// Whether `slot` counts as already reserved given the day's booked labels.
///
/// The two evening slots are mutually substitutable: booking either one
/// consumes "the evening", so both evening options are reserved-equivalent
/// as soon as one of them is booked. Every other slot is reserved only when
/// it is itself booked.
pub fn is_reserved_equivalent(slot: SlotLabel, booked: &[SlotLabel]) -> bool {
    if slot.is_evening() {
        return booked.iter().any(|b| b.is_evening());
    }
    booked.contains(&slot)
}

/// Catalog slots still offerable for a day, in catalog order.
///
/// An occupied day offers nothing, even when the saturating combination
/// leaves some label technically unbooked (morning plus one evening slot
/// never books `Full`, and a `Full` booking never books the halves). On a
/// partially occupied day the full-day slot is withheld even when not
/// reserved-equivalent: a partial day can never be upgraded to a full-day
/// booking. The result may be empty, in which case nothing is bookable.
pub fn offerable_slots(booked: &[SlotLabel], status: DayStatus) -> Vec<TimeSlot> {
    if status == DayStatus::Occupied {
        return Vec::new();
    }
    CATALOG
        .into_iter()
        .filter(|slot| {
            if status == DayStatus::Partial && slot.label == SlotLabel::Full {
                return false;
            }
            !is_reserved_equivalent(slot.label, booked)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use salonbook_domain::SlotLabel::{EveningA, EveningB, Full, Morning};

    use super::*;
    use crate::availability::classify_slots;

    fn labels(slots: &[TimeSlot]) -> Vec<SlotLabel> {
        slots.iter().map(|s| s.label).collect()
    }

    fn resolve(booked: &[SlotLabel]) -> Vec<SlotLabel> {
        labels(&offerable_slots(booked, classify_slots(booked)))
    }

    #[test]
    fn free_day_offers_the_whole_catalog_in_order() {
        assert_eq!(resolve(&[]), vec![Full, Morning, EveningA, EveningB]);
    }

    #[test]
    fn booked_morning_leaves_only_the_evening_options() {
        // FULL is withheld because the day is partial, not because it is
        // booked.
        assert_eq!(resolve(&[Morning]), vec![EveningA, EveningB]);
    }

    #[test]
    fn one_evening_booking_consumes_both_evening_options() {
        assert_eq!(resolve(&[EveningA]), vec![Morning]);
        assert_eq!(resolve(&[EveningB]), vec![Morning]);
    }

    #[test]
    fn saturated_day_offers_nothing() {
        assert_eq!(resolve(&[Morning, EveningB]), Vec::<SlotLabel>::new());
        assert_eq!(resolve(&[Full]), Vec::<SlotLabel>::new());
    }

    #[test]
    fn occupied_status_empties_the_offer_even_for_unbooked_labels() {
        // Saturation by halves leaves FULL unbooked, and a FULL booking
        // leaves the halves unbooked; neither may be offered.
        assert!(offerable_slots(&[Morning, EveningB], DayStatus::Occupied).is_empty());
        assert!(offerable_slots(&[Full], DayStatus::Occupied).is_empty());
        assert!(offerable_slots(&[Morning, EveningA], DayStatus::Occupied).is_empty());
    }

    #[test]
    fn never_offers_a_reserved_equivalent_slot() {
        let labels = [Full, Morning, EveningA, EveningB];
        for mask in 0u8..16 {
            let booked: Vec<SlotLabel> = labels
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, l)| *l)
                .collect();
            let offered = resolve(&booked);
            for slot in &offered {
                assert!(
                    !is_reserved_equivalent(*slot, &booked),
                    "offered reserved slot {slot:?} with booked {booked:?}"
                );
            }
        }
    }

    #[test]
    fn never_offers_full_on_a_partial_day() {
        for booked in [vec![Morning], vec![EveningA], vec![EveningB], vec![EveningA, EveningB]] {
            let status = classify_slots(&booked);
            assert_eq!(status, DayStatus::Partial);
            assert!(
                !resolve(&booked).contains(&Full),
                "FULL offered on partial day with booked {booked:?}"
            );
        }
    }
}
