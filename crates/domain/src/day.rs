//! Canonical calendar-day handling.
//!
//! The remote store serializes reservation days as ISO-ish strings that may
//! or may not carry a time-of-day and zone suffix. The canonical policy is
//! fixed here: the leading `YYYY-MM-DD` prefix *is* the calendar date. The
//! string is never round-tripped through a zoned datetime, so the derived
//! key is identical on every host timezone.

use chrono::NaiveDate;

/// Wire/display format of a day key.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Parse the calendar date out of a stored day string.
///
/// Accepts bare dates (`2026-09-12`) as well as full timestamps
/// (`2026-09-12T00:00:00.000Z`); everything past the date prefix is ignored.
/// Returns `None` for strings without a valid `YYYY-MM-DD` prefix.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let prefix = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(prefix, DAY_KEY_FORMAT).ok()
}

/// Render a date in the canonical `YYYY-MM-DD` key form.
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}
