// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file that the user edits by hand.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Toast auto-dismiss and exit animation timing
//! - `[submission]` - Simulated submission delay, redirect delay and confirmation target
//! - `[forms]` - Optional form declarations file replacing the built-in forms
//!
//! # Examples
//!
//! ```no_run
//! use iced_contact::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let redirect = config.submission.redirect_delay();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "nl").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast notification timing.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Time before a toast dismisses itself (milliseconds).
    #[serde(default = "default_auto_dismiss_ms")]
    pub auto_dismiss_ms: Option<u64>,

    /// Exit animation duration (milliseconds).
    #[serde(default = "default_exit_animation_ms")]
    pub exit_animation_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: default_auto_dismiss_ms(),
            exit_animation_ms: default_exit_animation_ms(),
        }
    }
}

impl NotificationsConfig {
    /// Auto-dismiss delay, clamped to the supported range.
    #[must_use]
    pub fn auto_dismiss(&self) -> Duration {
        let ms = self
            .auto_dismiss_ms
            .unwrap_or(DEFAULT_AUTO_DISMISS_MS)
            .clamp(MIN_AUTO_DISMISS_MS, MAX_AUTO_DISMISS_MS);
        Duration::from_millis(ms)
    }

    /// Exit animation duration, clamped to the supported range.
    #[must_use]
    pub fn exit_animation(&self) -> Duration {
        let ms = self
            .exit_animation_ms
            .unwrap_or(DEFAULT_EXIT_ANIMATION_MS)
            .min(MAX_EXIT_ANIMATION_MS);
        Duration::from_millis(ms)
    }
}

/// Simulated submission settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SubmissionConfig {
    /// Simulated round trip before the submission completes (milliseconds).
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: Option<u64>,

    /// Delay between success and the confirmation screen (milliseconds).
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: Option<u64>,

    /// Destination shown after a successful submission.
    #[serde(default)]
    pub confirmation_target: Option<String>,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay_ms(),
            redirect_delay_ms: default_redirect_delay_ms(),
            confirmation_target: None,
        }
    }
}

impl SubmissionConfig {
    #[must_use]
    pub fn simulated_delay(&self) -> Duration {
        let ms = self
            .simulated_delay_ms
            .unwrap_or(DEFAULT_SIMULATED_DELAY_MS)
            .min(MAX_SUBMISSION_DELAY_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn redirect_delay(&self) -> Duration {
        let ms = self
            .redirect_delay_ms
            .unwrap_or(DEFAULT_REDIRECT_DELAY_MS)
            .min(MAX_SUBMISSION_DELAY_MS);
        Duration::from_millis(ms)
    }

    /// Confirmation destination, falling back to the default when unset or blank.
    #[must_use]
    pub fn confirmation_target(&self) -> &str {
        self.confirmation_target
            .as_deref()
            .filter(|target| !target.trim().is_empty())
            .unwrap_or(DEFAULT_CONFIRMATION_TARGET)
    }
}

/// Form declaration source.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FormsConfig {
    /// Path to a TOML file declaring the forms. Built-in forms are used when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub submission: SubmissionConfig,

    #[serde(default)]
    pub forms: FormsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_auto_dismiss_ms() -> Option<u64> {
    Some(DEFAULT_AUTO_DISMISS_MS)
}

fn default_exit_animation_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_ANIMATION_MS)
}

fn default_simulated_delay_ms() -> Option<u64> {
    Some(DEFAULT_SIMULATED_DELAY_MS)
}

fn default_redirect_delay_ms() -> Option<u64> {
    Some(DEFAULT_REDIRECT_DELAY_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
