//! System clock adapter.

use chrono::{Local, NaiveDate};
use salonbook_core::booking::ports::Clock;

/// Clock backed by the host's local calendar date.
///
/// The booking rules compare calendar dates only; time-of-day never enters
/// the comparison.
#[derive(Debug, Default, Clone)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
