// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Form events are translated into side effects here: toasts, submission
//! tasks, the delayed navigation and screen changes.

use super::{Message, Screen};
use crate::forms::{self, Event as FormEvent, FormId, FormRegistry, Submitter};
use crate::ui::confirmation::{self, Event as ConfirmationEvent};
use crate::ui::notifications::{self, Severity};
use crate::ui::widgets::animated_spinner;
use iced::Task;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Message key of the aggregate toast shown when validation fails.
pub const CHECK_FIELDS_KEY: &str = "notification-form-check-fields";

/// Message key of the toast shown after a successful submission.
pub const SUBMIT_SUCCESS_KEY: &str = "notification-submit-success";

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub forms: &'a mut FormRegistry,
    pub notifications: &'a mut notifications::Manager,
    pub submitter: &'a Arc<dyn Submitter>,
    pub redirect_delay: Duration,
    pub spinner_rotation: &'a mut f32,
    pub last_tick: &'a mut Option<Instant>,
}

/// Handles input from a form.
pub fn handle_form_message(
    ctx: &mut UpdateContext<'_>,
    form: FormId,
    message: forms::Message,
) -> Task<Message> {
    let Some(state) = ctx.forms.get_mut(form) else {
        tracing::warn!(?form, "message for unknown form");
        return Task::none();
    };
    let event = state.update(message);
    handle_form_event(ctx, form, event)
}

/// Applies the result of a finished submission task.
pub fn handle_submission_completed(
    ctx: &mut UpdateContext<'_>,
    form: FormId,
    result: Result<(), crate::error::SubmissionError>,
) -> Task<Message> {
    let Some(state) = ctx.forms.get_mut(form) else {
        return Task::none();
    };
    let event = state.complete_submission(result);
    handle_form_event(ctx, form, event)
}

/// Moves to the confirmation screen once the redirect delay has elapsed.
pub fn handle_navigation_due(ctx: &mut UpdateContext<'_>, form: FormId) -> Task<Message> {
    let Some(state) = ctx.forms.get_mut(form) else {
        return Task::none();
    };
    let event = state.navigate();
    handle_form_event(ctx, form, event)
}

fn handle_form_event(ctx: &mut UpdateContext<'_>, form: FormId, event: FormEvent) -> Task<Message> {
    match event {
        FormEvent::None => Task::none(),
        FormEvent::FieldValidated { field, verdict } => {
            tracing::trace!(?form, ?field, ?verdict, "field validated");
            Task::none()
        }
        FormEvent::ValidationFailed { .. } => {
            ctx.notifications.notify(CHECK_FIELDS_KEY, Severity::Warning);
            Task::none()
        }
        FormEvent::SubmissionStarted(submission) => {
            Task::perform(ctx.submitter.submit(submission), move |result| {
                Message::SubmissionCompleted { form, result }
            })
        }
        FormEvent::SubmissionSucceeded => {
            ctx.notifications.notify(SUBMIT_SUCCESS_KEY, Severity::Success);
            // The sleep is built inside the future so it binds to the task runtime.
            let delay = ctx.redirect_delay;
            Task::perform(
                async move { tokio::time::sleep(delay).await },
                move |()| Message::NavigationDue(form),
            )
        }
        FormEvent::SubmissionFailed(err) => {
            ctx.notifications.notify(err.i18n_key(), Severity::Danger);
            Task::none()
        }
        FormEvent::Navigated => {
            tracing::info!(?form, "showing confirmation");
            *ctx.screen = Screen::Confirmation { form };
            Task::none()
        }
    }
}

/// Handles confirmation screen messages.
pub fn handle_confirmation_message(
    ctx: &mut UpdateContext<'_>,
    message: &confirmation::Message,
) -> Task<Message> {
    match confirmation::update(message) {
        ConfirmationEvent::None => Task::none(),
        ConfirmationEvent::BackToForms => {
            // Several forms may have navigated while this screen was shown.
            let restarted = ctx.forms.restart_navigated();
            tracing::debug!(restarted, "back to forms");
            *ctx.screen = Screen::Forms;
            Task::none()
        }
    }
}

/// Handles toast messages.
pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}

/// Advances toast timers and the busy spinner.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick_at(now);

    if ctx.forms.any_submitting() {
        let elapsed = ctx
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        *ctx.spinner_rotation = animated_spinner::advance(*ctx.spinner_rotation, elapsed);
    }
    *ctx.last_tick = Some(now);

    Task::none()
}
