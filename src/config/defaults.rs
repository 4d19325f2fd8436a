// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Contact form**: delay before the post-submit celebration is reverted
//! - **Window**: initial and minimum window size

// ==========================================================================
// Contact Form Defaults
// ==========================================================================

/// Default delay before the happy cat and success message are reverted (seconds).
pub const DEFAULT_RESET_DELAY_SECS: u32 = 5;

/// Minimum reset delay (seconds).
pub const MIN_RESET_DELAY_SECS: u32 = 1;

/// Maximum reset delay (seconds).
pub const MAX_RESET_DELAY_SECS: u32 = 60;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_RESET_DELAY_SECS > 0);
    assert!(MAX_RESET_DELAY_SECS >= MIN_RESET_DELAY_SECS);
    assert!(DEFAULT_RESET_DELAY_SECS >= MIN_RESET_DELAY_SECS);
    assert!(DEFAULT_RESET_DELAY_SECS <= MAX_RESET_DELAY_SECS);

    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_delay_defaults_are_valid() {
        assert_eq!(DEFAULT_RESET_DELAY_SECS, 5);
        assert!(DEFAULT_RESET_DELAY_SECS >= MIN_RESET_DELAY_SECS);
        assert!(DEFAULT_RESET_DELAY_SECS <= MAX_RESET_DELAY_SECS);
    }
}
