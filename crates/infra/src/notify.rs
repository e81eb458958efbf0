//! Tracing-backed notifier.
//!
//! Stand-in for a toast-style UI surface: notices are emitted as structured
//! log events at a severity matching their meaning. A real frontend would
//! provide its own [`Notifier`] implementation.

use salonbook_core::booking::ports::{Notice, Notifier};
use tracing::{info, warn};

/// Notifier that logs every notice through `tracing`.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match &notice {
            Notice::WriteAccepted => info!(message = notice.message(), "booking notice"),
            Notice::WriteRejected(reason) => {
                warn!(reason = %reason, "booking notice: reservation rejected");
            }
            _ => warn!(message = notice.message(), "booking notice"),
        }
    }
}
