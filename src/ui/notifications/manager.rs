// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns every toast on screen, newest last. Each toast
//! auto-dismisses after a fixed delay unless closed first, then plays a short
//! exit animation before it is removed. Both paths go through the same
//! one-shot transition, so a toast closed by hand is never dismissed again by
//! its timer.
//!
//! Time is passed in explicitly (`*_at` methods) and driven by the
//! application's periodic tick.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::{defaults, NotificationsConfig};
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Auto-dismiss and exit animation durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub auto_dismiss: Duration,
    pub exit_animation: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            auto_dismiss: Duration::from_millis(defaults::DEFAULT_AUTO_DISMISS_MS),
            exit_animation: Duration::from_millis(defaults::DEFAULT_EXIT_ANIMATION_MS),
        }
    }
}

impl From<&NotificationsConfig> for Timings {
    fn from(config: &NotificationsConfig) -> Self {
        Self {
            auto_dismiss: config.auto_dismiss(),
            exit_animation: config.exit_animation(),
        }
    }
}

/// Manages visible notifications and their timers.
#[derive(Debug, Default)]
pub struct Manager {
    /// Displayed notifications, oldest first.
    entries: Vec<Notification>,
    timings: Timings,
    /// Time of the last tick, used to render exit progress.
    last_tick: Option<Instant>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timings(timings: Timings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Shows a notification and schedules its auto-dismiss.
    pub fn push(&mut self, mut notification: Notification) -> NotificationId {
        notification.arm(self.timings.auto_dismiss);
        let id = notification.id();
        tracing::debug!(
            key = notification.message_key(),
            severity = ?notification.severity(),
            "notification shown"
        );
        self.entries.push(notification);
        id
    }

    /// Shorthand for pushing a message key with a severity.
    pub fn notify(&mut self, message_key: impl Into<String>, severity: Severity) -> NotificationId {
        self.push(Notification::new(severity, message_key))
    }

    /// Closes a notification now. See [`Manager::dismiss_at`].
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    /// Starts the exit animation of a notification and cancels its timer.
    ///
    /// Returns `false` if the notification is unknown, already gone, or
    /// already dismissing.
    pub fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        self.entries
            .iter_mut()
            .find(|n| n.id() == id)
            .is_some_and(|n| n.begin_dismiss(now))
    }

    /// Processes a tick at the current time.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Removes notifications whose exit animation has finished, then starts
    /// the exit animation of every notification whose timer has expired.
    pub fn tick_at(&mut self, now: Instant) {
        let exit = self.timings.exit_animation;
        self.entries.retain(|n| !n.exit_finished(now, exit));

        for notification in &mut self.entries {
            if notification.auto_dismiss_due(now) {
                notification.begin_dismiss(now);
            }
        }
        self.last_tick = Some(now);
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Returns all displayed notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id() == id)
    }

    /// Returns true if there are any notifications on screen.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exit animation progress of a notification as of the last tick.
    #[must_use]
    pub fn exit_progress(&self, notification: &Notification) -> f32 {
        let now = self.last_tick.unwrap_or_else(Instant::now);
        notification.exit_progress(now, self.timings.exit_animation)
    }

    /// Removes all notifications immediately.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::ToastState;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn push_at_origin(manager: &mut Manager, key: &str) -> (NotificationId, Instant) {
        let id = manager.notify(key, Severity::Info);
        let t0 = manager.get(id).map(Notification::created_at).unwrap();
        (id, t0)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(!manager.has_notifications());
        assert_eq!(manager.timings(), Timings::default());
    }

    #[test]
    fn notifications_are_ordered_newest_last_without_cap() {
        let mut manager = Manager::new();
        let ids: Vec<_> = (0..5)
            .map(|i| manager.notify(format!("key-{i}"), Severity::Info))
            .collect();

        let shown: Vec<_> = manager.visible().map(Notification::id).collect();
        assert_eq!(shown, ids);
    }

    #[test]
    fn auto_dismiss_starts_at_five_seconds() {
        let mut manager = Manager::new();
        let (id, t0) = push_at_origin(&mut manager, "notification-submit-success");

        manager.tick_at(t0 + ms(4999));
        assert!(manager.get(id).unwrap().is_visible());

        manager.tick_at(t0 + ms(5000));
        assert_eq!(
            manager.get(id).unwrap().state(),
            ToastState::Dismissing { since: t0 + ms(5000) }
        );
    }

    #[test]
    fn removed_after_exit_animation() {
        let mut manager = Manager::new();
        let (id, t0) = push_at_origin(&mut manager, "k");

        manager.tick_at(t0 + ms(5000));
        manager.tick_at(t0 + ms(5299));
        assert!(manager.get(id).is_some());

        manager.tick_at(t0 + ms(5300));
        assert!(manager.get(id).is_none());
        assert!(!manager.has_notifications());
    }

    #[test]
    fn manual_dismiss_cancels_auto_dismiss() {
        let mut manager = Manager::new();
        let (id, t0) = push_at_origin(&mut manager, "k");

        assert!(manager.dismiss_at(id, t0 + ms(1000)));
        assert_eq!(manager.get(id).unwrap().dismiss_deadline(), None);

        manager.tick_at(t0 + ms(1300));
        assert!(manager.get(id).is_none());

        // The old deadline passing is a no-op, as is a second close.
        manager.tick_at(t0 + ms(5000));
        assert!(!manager.dismiss_at(id, t0 + ms(5000)));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn second_dismiss_during_exit_is_ignored() {
        let mut manager = Manager::new();
        let (id, t0) = push_at_origin(&mut manager, "k");

        assert!(manager.dismiss_at(id, t0 + ms(100)));
        assert!(!manager.dismiss_at(id, t0 + ms(200)));

        // The exit is still timed from the first close.
        manager.tick_at(t0 + ms(400));
        assert!(manager.get(id).is_none());
    }

    #[test]
    fn timer_expiring_during_manual_exit_does_not_restart_it() {
        let mut manager = Manager::new();
        let (id, t0) = push_at_origin(&mut manager, "k");

        manager.dismiss_at(id, t0 + ms(4900));
        manager.tick_at(t0 + ms(5100));
        assert_eq!(
            manager.get(id).unwrap().state(),
            ToastState::Dismissing { since: t0 + ms(4900) }
        );
        manager.tick_at(t0 + ms(5200));
        assert!(manager.get(id).is_none());
    }

    #[test]
    fn other_notifications_are_unaffected() {
        let mut manager = Manager::new();
        let (first, t0) = push_at_origin(&mut manager, "a");
        let second = manager.notify("b", Severity::Warning);

        manager.dismiss_at(first, t0);
        manager.tick_at(t0 + ms(300));

        assert!(manager.get(first).is_none());
        assert!(manager.get(second).unwrap().is_visible());
    }

    #[test]
    fn custom_timings_are_honored() {
        let mut manager = Manager::with_timings(Timings {
            auto_dismiss: ms(1000),
            exit_animation: ms(0),
        });
        let (id, t0) = push_at_origin(&mut manager, "k");

        manager.tick_at(t0 + ms(1000));
        manager.tick_at(t0 + ms(1000));
        assert!(manager.get(id).is_none());
    }

    #[test]
    fn unknown_id_is_not_dismissed() {
        let mut manager = Manager::new();
        assert!(!manager.dismiss(NotificationId::new()));
    }

    #[test]
    fn handle_message_dismisses() {
        let mut manager = Manager::new();
        let id = manager.notify("k", Severity::Danger);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.get(id).unwrap().is_visible());
    }

    #[test]
    fn exit_progress_uses_last_tick() {
        let mut manager = Manager::new();
        let (id, t0) = push_at_origin(&mut manager, "k");
        manager.dismiss_at(id, t0);
        manager.tick_at(t0 + ms(150));

        let progress = manager.exit_progress(manager.get(id).unwrap());
        assert!((progress - 0.5).abs() < 1e-3);
    }

    #[test]
    fn timings_from_config() {
        let config = NotificationsConfig {
            auto_dismiss_ms: Some(2000),
            exit_animation_ms: Some(100),
        };
        let timings = Timings::from(&config);
        assert_eq!(timings.auto_dismiss, ms(2000));
        assert_eq!(timings.exit_animation, ms(100));
    }
}
