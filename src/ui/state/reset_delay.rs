// SPDX-License-Identifier: MPL-2.0
//! Delay before the contact form reverts its post-submit state.

use crate::config::{DEFAULT_RESET_DELAY_SECS, MAX_RESET_DELAY_SECS, MIN_RESET_DELAY_SECS};
use std::time::Duration;

/// Reset delay in seconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
///
/// # Example
///
/// ```
/// use zen_cat::ui::state::ResetDelay;
///
/// let delay = ResetDelay::new(5);
/// assert_eq!(delay.value(), 5);
///
/// // Values outside range are clamped
/// assert_eq!(ResetDelay::new(600).value(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetDelay(u32);

impl ResetDelay {
    /// Creates a new reset delay, clamping to the valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_RESET_DELAY_SECS, MAX_RESET_DELAY_SECS))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for ResetDelay {
    fn default() -> Self {
        Self(DEFAULT_RESET_DELAY_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(ResetDelay::new(0).value(), MIN_RESET_DELAY_SECS);
        assert_eq!(ResetDelay::new(1000).value(), MAX_RESET_DELAY_SECS);
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(ResetDelay::new(1).value(), 1);
        assert_eq!(ResetDelay::new(30).value(), 30);
        assert_eq!(ResetDelay::new(60).value(), 60);
    }

    #[test]
    fn default_is_five_seconds() {
        assert_eq!(ResetDelay::default().as_duration(), Duration::from_secs(5));
    }
}
