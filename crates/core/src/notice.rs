//! The transient added-to-cart confirmation.
//!
//! At most one notice is shown at a time; showing a new one simply replaces
//! the previous (last wins). A notice dismisses itself a fixed 3 seconds
//! after it was shown. Timestamps are injected by the caller so visibility
//! is a pure function of the clock.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How long a notice stays visible, in seconds.
pub const AUTO_DISMISS_SECONDS: i64 = 3;

/// A confirmation notice with its display deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    message: String,
    shown_at: DateTime<Utc>,
}

impl Notice {
    /// Show a notice as of the given instant.
    #[must_use]
    pub fn new(message: impl Into<String>, shown_at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            shown_at,
        }
    }

    /// The notice text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// When the notice auto-dismisses.
    #[must_use]
    pub fn dismiss_at(&self) -> DateTime<Utc> {
        self.shown_at + Duration::seconds(AUTO_DISMISS_SECONDS)
    }

    /// Whether the notice is still visible at the given instant.
    #[must_use]
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        now < self.dismiss_at()
    }
}
