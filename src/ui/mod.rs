// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following the Elm-style
//! "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`form_view`] - A single form card: fields, inline errors, submit button
//! - [`confirmation`] - Shown after a successful submission
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod confirmation;
pub mod design_tokens;
pub mod form_view;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
