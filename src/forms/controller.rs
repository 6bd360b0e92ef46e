// SPDX-License-Identifier: MPL-2.0
//! Per-form submission state machine.
//!
//! ```text
//! Idle --submit--> (validate all) --invalid--> Idle
//!                                 --valid----> Submitting --ok----> Submitted --navigate--> Navigated
//!                                                         --error-> Idle
//! Navigated --restart--> Idle
//! ```
//!
//! Validation on submit is synchronous, so the transient validating state
//! never outlives a single call. A field is validated when it loses focus:
//! either focus moves to another field of the same form, or the user presses
//! Enter in it.
//!
//! Iced text inputs report no focus loss, so blur is inferred from edits.
//! Two cases are therefore only caught by the full check on submit: a field
//! tabbed through without typing, and the last edited field when the user
//! moves on to a different form.

use super::{validator, Field, FieldId, FormId, FormSchema, Verdict};
use crate::error::SubmissionError;

/// Lifecycle of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Navigated,
}

/// Messages produced by the form view.
#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(FieldId, String),
    /// Enter pressed inside a field.
    FieldSubmitted(FieldId),
    Submit,
}

/// Outcome of handling a message, for the application to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    FieldValidated { field: FieldId, verdict: Verdict },
    ValidationFailed { invalid_fields: usize },
    SubmissionStarted(Submission),
    SubmissionSucceeded,
    SubmissionFailed(SubmissionError),
    Navigated,
}

/// Payload handed to a [`Submitter`](super::Submitter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub form: String,
    pub values: Vec<(String, String)>,
}

/// The submit button's enabled state and label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    label_key: String,
    busy: bool,
}

impl SubmitControl {
    fn new(label_key: impl Into<String>) -> Self {
        Self {
            label_key: label_key.into(),
            busy: false,
        }
    }

    /// Translation key for the idle label.
    #[must_use]
    pub fn label_key(&self) -> &str {
        &self.label_key
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.busy
    }

    /// Whether the busy indicator and label should be shown.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

/// A registered form and everything needed to render and drive it.
#[derive(Debug, Clone)]
pub struct FormState {
    id: FormId,
    schema_id: String,
    title_key: String,
    fields: Vec<Field>,
    submit: SubmitControl,
    phase: Phase,
    focused: Option<FieldId>,
}

impl FormState {
    #[must_use]
    pub fn new(id: FormId, schema: &FormSchema) -> Self {
        Self {
            id,
            schema_id: schema.id.clone(),
            title_key: schema.title.clone(),
            fields: schema.fields.iter().map(Field::from_decl).collect(),
            submit: SubmitControl::new(schema.submit_label.clone()),
            phase: Phase::Idle,
            focused: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> FormId {
        self.id
    }

    #[must_use]
    pub fn schema_id(&self) -> &str {
        &self.schema_id
    }

    #[must_use]
    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Fields accept input only while idle.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.phase == Phase::Idle
    }

    #[must_use]
    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    /// Whether pressing submit would do anything.
    ///
    /// After a successful submission the control is back to its idle label,
    /// but the form stays inert until it has navigated and been restarted.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Idle && self.submit.is_enabled()
    }

    /// Fields in declaration order, paired with their ids.
    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &Field)> {
        self.fields
            .iter()
            .enumerate()
            .map(|(index, field)| (FieldId(index), field))
    }

    #[must_use]
    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.get(id.0)
    }

    #[must_use]
    pub fn field_id(&self, name: &str) -> Option<FieldId> {
        self.fields
            .iter()
            .position(|field| field.name() == name)
            .map(FieldId)
    }

    #[must_use]
    pub fn focused(&self) -> Option<FieldId> {
        self.focused
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FieldChanged(id, value) => self.change(id, value),
            Message::FieldSubmitted(id) => {
                if self.focused == Some(id) {
                    self.focused = None;
                }
                self.blur(id)
            }
            Message::Submit => {
                self.focused = None;
                self.submit()
            }
        }
    }

    fn change(&mut self, id: FieldId, value: String) -> Event {
        if !self.is_editable() {
            return Event::None;
        }
        let Some(field) = self.fields.get_mut(id.0) else {
            return Event::None;
        };
        field.set_value(value);

        let previous = self.focused.replace(id);
        match previous {
            Some(previous) if previous != id => self.blur(previous),
            _ => Event::None,
        }
    }

    /// Validates a single field and updates its error display.
    pub fn blur(&mut self, id: FieldId) -> Event {
        let Some(field) = self.fields.get_mut(id.0) else {
            return Event::None;
        };
        let verdict = validator::validate(field);
        field.apply(verdict);
        Event::FieldValidated { field: id, verdict }
    }

    /// Validates every field and starts a submission if all pass.
    ///
    /// Ignored unless the form is idle, so a second submit while one is in
    /// flight does nothing.
    pub fn submit(&mut self) -> Event {
        if self.phase != Phase::Idle {
            tracing::debug!(form = %self.schema_id, phase = ?self.phase, "submit ignored");
            return Event::None;
        }

        // Every field is checked so every error becomes visible.
        let mut invalid_fields = 0;
        for field in &mut self.fields {
            let verdict = validator::validate(field);
            field.apply(verdict);
            if !verdict.is_valid() {
                invalid_fields += 1;
            }
        }

        if invalid_fields > 0 {
            tracing::debug!(form = %self.schema_id, invalid_fields, "validation failed");
            return Event::ValidationFailed { invalid_fields };
        }

        self.phase = Phase::Submitting;
        self.submit.busy = true;
        tracing::info!(form = %self.schema_id, "submitting form");
        Event::SubmissionStarted(self.submission())
    }

    fn submission(&self) -> Submission {
        Submission {
            form: self.schema_id.clone(),
            values: self
                .fields
                .iter()
                .map(|field| (field.name().to_string(), field.value().trim().to_string()))
                .collect(),
        }
    }

    /// Applies the result of an in-flight submission.
    ///
    /// The submit control is restored either way. On success the fields are
    /// cleared; on failure the values are kept so the user can retry.
    pub fn complete_submission(&mut self, result: Result<(), SubmissionError>) -> Event {
        if self.phase != Phase::Submitting {
            tracing::warn!(form = %self.schema_id, phase = ?self.phase, "unexpected submission result");
            return Event::None;
        }
        self.submit.busy = false;

        match result {
            Ok(()) => {
                self.reset_fields();
                self.phase = Phase::Submitted;
                tracing::info!(form = %self.schema_id, "submission succeeded");
                Event::SubmissionSucceeded
            }
            Err(err) => {
                self.phase = Phase::Idle;
                tracing::warn!(form = %self.schema_id, %err, "submission failed");
                Event::SubmissionFailed(err)
            }
        }
    }

    /// Moves a submitted form to the confirmation step.
    pub fn navigate(&mut self) -> Event {
        if self.phase != Phase::Submitted {
            return Event::None;
        }
        self.phase = Phase::Navigated;
        Event::Navigated
    }

    /// Makes a navigated form usable again.
    pub fn restart(&mut self) {
        if self.phase == Phase::Navigated {
            self.phase = Phase::Idle;
        }
    }

    fn reset_fields(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.focused = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::forms::{FieldDecl, InputType};

    fn decl(name: &str, input_type: InputType, required: bool) -> FieldDecl {
        FieldDecl {
            name: name.to_string(),
            label: format!("field-{name}"),
            placeholder: None,
            input_type,
            required,
        }
    }

    fn contact_form() -> FormState {
        let schema = FormSchema {
            id: "contact".to_string(),
            title: "form-contact-title".to_string(),
            submit_label: "form-submit".to_string(),
            fields: vec![
                decl("name", InputType::Text, true),
                decl("email", InputType::Email, true),
                decl("phone", InputType::Tel, false),
                decl("message", InputType::Textarea, true),
            ],
        };
        FormState::new(FormId(0), &schema)
    }

    fn set(form: &mut FormState, name: &str, value: &str) {
        let id = form.field_id(name).unwrap();
        form.update(Message::FieldChanged(id, value.to_string()));
    }

    fn fill_valid(form: &mut FormState) {
        set(form, "name", "Jean-Luc");
        set(form, "email", "jl@example.com");
        set(form, "message", "Hello there, friend");
    }

    fn error_of(form: &FormState, name: &str) -> Option<ValidationError> {
        form.field(form.field_id(name).unwrap()).unwrap().error()
    }

    #[test]
    fn editing_does_not_validate_until_blur() {
        let mut form = contact_form();
        set(&mut form, "email", "not-an-email");
        assert_eq!(error_of(&form, "email"), None);

        // Moving focus blurs the previous field.
        set(&mut form, "name", "J");
        assert_eq!(error_of(&form, "email"), Some(ValidationError::InvalidEmail));
        assert_eq!(error_of(&form, "name"), None);
    }

    #[test]
    fn enter_in_field_validates_it() {
        let mut form = contact_form();
        let phone = form.field_id("phone").unwrap();
        form.update(Message::FieldChanged(phone, "123".to_string()));

        let event = form.update(Message::FieldSubmitted(phone));

        assert_eq!(
            event,
            Event::FieldValidated {
                field: phone,
                verdict: Verdict::Invalid(ValidationError::InvalidPhone)
            }
        );
        assert_eq!(form.focused(), None);
    }

    #[test]
    fn fixing_a_field_hides_its_error_on_blur() {
        let mut form = contact_form();
        let email = form.field_id("email").unwrap();
        form.update(Message::FieldChanged(email, "a@b".to_string()));
        form.update(Message::FieldSubmitted(email));
        assert!(form.field(email).unwrap().has_error());

        form.update(Message::FieldChanged(email, "a@b.co".to_string()));
        form.update(Message::FieldSubmitted(email));
        assert!(!form.field(email).unwrap().has_error());
    }

    #[test]
    fn invalid_form_never_starts_submission() {
        let mut form = contact_form();
        set(&mut form, "name", "Jean-Luc");
        set(&mut form, "email", "a@b");

        let event = form.update(Message::Submit);

        // email is invalid, message is required and empty
        assert_eq!(event, Event::ValidationFailed { invalid_fields: 2 });
        assert_eq!(form.phase(), Phase::Idle);
        assert!(form.submit_control().is_enabled());
        assert_eq!(error_of(&form, "message"), Some(ValidationError::Required));
        assert_eq!(error_of(&form, "phone"), None);
    }

    #[test]
    fn valid_form_disables_submit_until_completion() {
        let mut form = contact_form();
        fill_valid(&mut form);

        let event = form.update(Message::Submit);
        let Event::SubmissionStarted(submission) = event else {
            panic!("expected submission to start, got {event:?}");
        };
        assert_eq!(submission.form, "contact");
        assert!(submission
            .values
            .contains(&("email".to_string(), "jl@example.com".to_string())));
        assert!(!form.submit_control().is_enabled());
        assert!(form.submit_control().is_busy());

        let event = form.complete_submission(Ok(()));

        assert_eq!(event, Event::SubmissionSucceeded);
        assert!(form.submit_control().is_enabled());
        assert_eq!(form.phase(), Phase::Submitted);
        assert!(form.fields().all(|(_, f)| f.value().is_empty() && !f.has_error()));
    }

    #[test]
    fn submit_is_unavailable_until_restart_after_success() {
        let mut form = contact_form();
        assert!(form.can_submit());
        fill_valid(&mut form);
        form.update(Message::Submit);
        assert!(!form.can_submit());

        form.complete_submission(Ok(()));
        assert!(!form.submit_control().is_busy());
        assert!(!form.can_submit());
        assert_eq!(form.update(Message::Submit), Event::None);

        form.navigate();
        assert!(!form.can_submit());

        form.restart();
        assert!(form.can_submit());
    }

    #[test]
    fn submit_stays_available_after_failure() {
        let mut form = contact_form();
        fill_valid(&mut form);
        form.update(Message::Submit);
        form.complete_submission(Err(SubmissionError::Network("offline".to_string())));

        assert!(form.can_submit());
    }

    #[test]
    fn untouched_required_field_is_caught_on_submit() {
        let mut form = contact_form();
        set(&mut form, "email", "jl@example.com");
        set(&mut form, "message", "Hello there, friend");
        assert_eq!(error_of(&form, "name"), None);

        form.update(Message::Submit);

        assert_eq!(error_of(&form, "name"), Some(ValidationError::Required));
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = contact_form();
        fill_valid(&mut form);
        form.update(Message::Submit);

        assert_eq!(form.update(Message::Submit), Event::None);
        assert_eq!(form.phase(), Phase::Submitting);
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut form = contact_form();
        fill_valid(&mut form);
        form.update(Message::Submit);

        set(&mut form, "name", "Someone Else");
        assert_eq!(form.field(form.field_id("name").unwrap()).unwrap().value(), "Jean-Luc");
    }

    #[test]
    fn failed_submission_reenables_and_keeps_values() {
        let mut form = contact_form();
        fill_valid(&mut form);
        form.update(Message::Submit);

        let event = form.complete_submission(Err(SubmissionError::Timeout));

        assert_eq!(event, Event::SubmissionFailed(SubmissionError::Timeout));
        assert_eq!(form.phase(), Phase::Idle);
        assert!(form.submit_control().is_enabled());
        assert_eq!(form.field(form.field_id("name").unwrap()).unwrap().value(), "Jean-Luc");
        assert_eq!(form.navigate(), Event::None);
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut form = contact_form();
        assert_eq!(form.complete_submission(Ok(())), Event::None);
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn navigation_and_restart() {
        let mut form = contact_form();
        fill_valid(&mut form);
        form.update(Message::Submit);
        form.complete_submission(Ok(()));

        assert_eq!(form.navigate(), Event::Navigated);
        assert_eq!(form.phase(), Phase::Navigated);
        assert_eq!(form.navigate(), Event::None);

        form.restart();
        assert_eq!(form.phase(), Phase::Idle);
        assert!(form.is_editable());
    }

    #[test]
    fn unknown_field_ids_are_ignored() {
        let mut form = contact_form();
        assert_eq!(form.blur(FieldId(99)), Event::None);
        assert_eq!(
            form.update(Message::FieldChanged(FieldId(99), "x".to_string())),
            Event::None
        );
    }
}
