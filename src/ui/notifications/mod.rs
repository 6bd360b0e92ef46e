// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear in the top-right corner to report the outcome of an
//! action (form sent, fields to check, submission failed) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for display timing and dismissal
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Severity};
//!
//! let mut manager = Manager::new();
//! manager.notify("notification-submit-success", Severity::Success);
//!
//! // On every tick
//! manager.tick();
//!
//! // In the view, render toasts above the page
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! # Lifecycle
//!
//! - Every toast auto-dismisses after 5s unless closed earlier
//! - Dismissal plays a 300ms exit animation, then the toast is removed
//! - Toasts stack newest last, with no limit on how many are shown

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, Timings};
pub use notification::{Notification, NotificationId, Severity, ToastState};
pub use toast::Toast;
