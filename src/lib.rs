// SPDX-License-Identifier: MPL-2.0
//! `iced_contact` is a contact page built with the Iced GUI framework.
//!
//! It renders declarative forms, validates fields as the user leaves them,
//! simulates submission with a busy indicator and reports outcomes through
//! auto-dismissing toast notifications, with Fluent localization and
//! user preferences stored in TOML.

pub mod app;
pub mod config;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod logging;
pub mod ui;
