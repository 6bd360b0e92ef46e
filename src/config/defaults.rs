// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast auto-dismiss and exit animation timing
//! - **Submission**: Simulated round trip and confirmation redirect timing

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Time a toast stays visible before it dismisses itself (in milliseconds).
pub const DEFAULT_AUTO_DISMISS_MS: u64 = 5000;

/// Minimum auto-dismiss delay (in milliseconds).
pub const MIN_AUTO_DISMISS_MS: u64 = 1000;

/// Maximum auto-dismiss delay (in milliseconds).
pub const MAX_AUTO_DISMISS_MS: u64 = 60_000;

/// Duration of the toast exit animation (in milliseconds).
pub const DEFAULT_EXIT_ANIMATION_MS: u64 = 300;

/// Maximum exit animation duration (in milliseconds).
pub const MAX_EXIT_ANIMATION_MS: u64 = 2000;

/// Interval of the tick driving toast timers and the busy spinner.
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Submission Defaults
// ==========================================================================

/// Simulated network round trip for a form submission (in milliseconds).
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 1500;

/// Delay between a successful submission and the confirmation screen (in milliseconds).
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 1500;

/// Maximum configurable submission or redirect delay (in milliseconds).
pub const MAX_SUBMISSION_DELAY_MS: u64 = 30_000;

/// Confirmation destination shown after a successful submission.
pub const DEFAULT_CONFIRMATION_TARGET: &str = "thank_you.html";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTO_DISMISS_MS > 0);
    assert!(DEFAULT_AUTO_DISMISS_MS >= MIN_AUTO_DISMISS_MS);
    assert!(DEFAULT_AUTO_DISMISS_MS <= MAX_AUTO_DISMISS_MS);
    assert!(DEFAULT_EXIT_ANIMATION_MS <= MAX_EXIT_ANIMATION_MS);
    assert!(TICK_INTERVAL_MS < DEFAULT_EXIT_ANIMATION_MS);

    assert!(DEFAULT_SIMULATED_DELAY_MS <= MAX_SUBMISSION_DELAY_MS);
    assert!(DEFAULT_REDIRECT_DELAY_MS <= MAX_SUBMISSION_DELAY_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_defaults_are_valid() {
        assert_eq!(DEFAULT_AUTO_DISMISS_MS, 5000);
        assert_eq!(DEFAULT_EXIT_ANIMATION_MS, 300);
        assert!(DEFAULT_EXIT_ANIMATION_MS < DEFAULT_AUTO_DISMISS_MS);
    }

    #[test]
    fn submission_defaults_are_valid() {
        assert_eq!(DEFAULT_SIMULATED_DELAY_MS, 1500);
        assert_eq!(DEFAULT_REDIRECT_DELAY_MS, 1500);
        assert!(!DEFAULT_CONFIRMATION_TARGET.is_empty());
    }
}
