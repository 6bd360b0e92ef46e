// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A notification is either fully visible or fading out. The auto-dismiss
//! deadline is held as an `Option` and taken when dismissal starts, so a
//! toast can only ever enter the exit animation once, however it was closed.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Neutral information (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Something needs the user's attention (orange).
    Warning,
    /// Operation failed (red).
    Danger,
}

impl Severity {
    /// Returns the background color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Danger => palette::ERROR_500,
        }
    }
}

/// Display state of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    Visible,
    /// Exit animation running since the given instant.
    Dismissing { since: Instant },
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    created_at: Instant,
    /// Pending auto-dismiss; cleared once dismissal starts.
    dismiss_deadline: Option<Instant>,
    state: ToastState,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            created_at: Instant::now(),
            dismiss_deadline: None,
            state: ToastState::Visible,
        }
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn danger(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Danger, message_key)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn state(&self) -> ToastState {
        self.state
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state == ToastState::Visible
    }

    #[must_use]
    pub fn dismiss_deadline(&self) -> Option<Instant> {
        self.dismiss_deadline
    }

    /// Schedules the auto-dismiss relative to creation time.
    pub(super) fn arm(&mut self, duration: Duration) {
        self.dismiss_deadline = Some(self.created_at + duration);
    }

    pub(super) fn auto_dismiss_due(&self, now: Instant) -> bool {
        self.is_visible() && self.dismiss_deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Starts the exit animation. Returns `false` if already dismissing.
    pub(super) fn begin_dismiss(&mut self, now: Instant) -> bool {
        if !self.is_visible() {
            return false;
        }
        self.dismiss_deadline = None;
        self.state = ToastState::Dismissing { since: now };
        true
    }

    /// Exit animation progress in `0.0..=1.0`; `0.0` while visible.
    #[must_use]
    pub fn exit_progress(&self, now: Instant, exit: Duration) -> f32 {
        match self.state {
            ToastState::Visible => 0.0,
            ToastState::Dismissing { .. } if exit.is_zero() => 1.0,
            ToastState::Dismissing { since } => {
                let elapsed = now.saturating_duration_since(since);
                (elapsed.as_secs_f32() / exit.as_secs_f32()).min(1.0)
            }
        }
    }

    pub(super) fn exit_finished(&self, now: Instant, exit: Duration) -> bool {
        match self.state {
            ToastState::Visible => false,
            ToastState::Dismissing { since } => now.saturating_duration_since(since) >= exit,
        }
    }
}
