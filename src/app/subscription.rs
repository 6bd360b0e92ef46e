// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the application.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick subscription.
///
/// Ticks drive toast timers and the submit spinner, so they only run while
/// a toast is on screen or a form is submitting.
pub fn create_tick_subscription(has_notifications: bool, is_submitting: bool) -> Subscription<Message> {
    if has_notifications || is_submitting {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
