// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::SubmissionError;
use crate::forms::{self, FormId};
use crate::ui::confirmation;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Input from a form's fields or submit button.
    Form(FormId, forms::Message),
    /// A submission task finished.
    SubmissionCompleted {
        form: FormId,
        result: Result<(), SubmissionError>,
    },
    /// The post-submission delay elapsed; move to the confirmation screen.
    NavigationDue(FormId),
    Confirmation(confirmation::Message),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for toast timers and the busy spinner
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `nl`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_CONTACT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional forms file replacing the built-in forms.
    /// Takes precedence over the `[forms] file` config key.
    pub forms_file: Option<PathBuf>,
}
