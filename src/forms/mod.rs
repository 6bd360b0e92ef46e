// SPDX-License-Identifier: MPL-2.0
//! Form domain: fields, validation and the submission workflow.
//!
//! # Components
//!
//! - [`validator`] - Pure field validation (kind inference and verdicts)
//! - [`schema`] - Declarative form layouts loaded from TOML
//! - [`controller`] - Per-form state machine (blur, submit, completion, navigation)
//! - [`submitter`] - Submission port and the simulated implementation
//!
//! Forms are registered once at startup in a [`FormRegistry`]. Each
//! [`FormState`] owns its fields and submit control directly, so event
//! handling never has to look anything up by name.

pub mod controller;
pub mod schema;
pub mod submitter;
pub mod validator;

pub use controller::{Event, FormState, Message, Phase, SubmitControl, Submission};
pub use schema::{FieldDecl, FormSchema};
pub use submitter::{SimulatedSubmitter, Submitter};
pub use validator::{infer_kind, validate, Verdict};

use crate::error::ValidationError;
use serde::Deserialize;

/// Identifies a registered form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormId(usize);

impl FormId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Identifies a field within its form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

impl FieldId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Input type as declared in the form layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Email,
    Tel,
    Textarea,
    /// Anything else (select, checkbox, ...). Never validated beyond `required`.
    #[serde(other)]
    Other,
}

/// Validation category inferred for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Name,
    Textarea,
    Other,
}

/// A single form input with its current value and error display state.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    label_key: String,
    placeholder_key: Option<String>,
    input_type: InputType,
    kind: FieldKind,
    required: bool,
    value: String,
    error: Option<ValidationError>,
}

impl Field {
    /// Builds a field from its declaration, inferring the kind once.
    #[must_use]
    pub fn from_decl(decl: &FieldDecl) -> Self {
        Self {
            name: decl.name.clone(),
            label_key: decl.label.clone(),
            placeholder_key: decl.placeholder.clone(),
            input_type: decl.input_type,
            kind: infer_kind(decl.input_type, &decl.name),
            required: decl.required,
            value: String::new(),
            error: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn label_key(&self) -> &str {
        &self.label_key
    }

    #[must_use]
    pub fn placeholder_key(&self) -> Option<&str> {
        self.placeholder_key.as_deref()
    }

    #[must_use]
    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Current error shown next to the field, if any.
    #[must_use]
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Stores a verdict so the view shows or hides the error.
    pub fn apply(&mut self, verdict: Verdict) {
        self.error = verdict.error();
    }

    /// Clears the value and any displayed error.
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }
}

/// Owns every registered form.
#[derive(Debug, Default)]
pub struct FormRegistry {
    forms: Vec<FormState>,
}

impl FormRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a form from its schema and returns its id.
    ///
    /// Registering a schema whose id is already known returns the existing
    /// form untouched.
    pub fn register(&mut self, schema: &FormSchema) -> FormId {
        if let Some(existing) = self.find(&schema.id) {
            tracing::debug!(form = %schema.id, "form already registered");
            return existing;
        }
        let id = FormId(self.forms.len());
        self.forms.push(FormState::new(id, schema));
        tracing::debug!(form = %schema.id, fields = schema.fields.len(), "registered form");
        id
    }

    /// Looks up a form by its schema id.
    #[must_use]
    pub fn find(&self, schema_id: &str) -> Option<FormId> {
        self.forms
            .iter()
            .find(|form| form.schema_id() == schema_id)
            .map(FormState::id)
    }

    #[must_use]
    pub fn get(&self, id: FormId) -> Option<&FormState> {
        self.forms.get(id.0)
    }

    pub fn get_mut(&mut self, id: FormId) -> Option<&mut FormState> {
        self.forms.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormState> {
        self.forms.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Returns whether any form is waiting on a submission.
    #[must_use]
    pub fn any_submitting(&self) -> bool {
        self.forms.iter().any(FormState::is_submitting)
    }

    /// Returns every form that reached the confirmation step to idle.
    ///
    /// Returns how many forms were restarted.
    pub fn restart_navigated(&mut self) -> usize {
        let mut restarted = 0;
        for form in &mut self.forms {
            if form.phase() == Phase::Navigated {
                form.restart();
                restarted += 1;
            }
        }
        restarted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(name: &str, input_type: InputType, required: bool) -> FieldDecl {
        FieldDecl {
            name: name.to_string(),
            label: format!("field-{name}"),
            placeholder: None,
            input_type,
            required,
        }
    }

    fn schema(id: &str) -> FormSchema {
        FormSchema {
            id: id.to_string(),
            title: "form-contact-title".to_string(),
            submit_label: "form-submit".to_string(),
            fields: vec![decl("email", InputType::Email, true)],
        }
    }

    #[test]
    fn field_kind_is_inferred_at_construction() {
        let field = Field::from_decl(&decl("contact-phone", InputType::Text, false));
        assert_eq!(field.kind(), FieldKind::Tel);
        assert!(!field.is_required());
    }

    #[test]
    fn clear_resets_value_and_error() {
        let mut field = Field::from_decl(&decl("email", InputType::Email, true));
        field.set_value("nope");
        field.apply(Verdict::Invalid(ValidationError::InvalidEmail));
        assert!(field.has_error());

        field.clear();
        assert_eq!(field.value(), "");
        assert!(!field.has_error());
    }

    #[test]
    fn register_is_idempotent_per_schema_id() {
        let mut registry = FormRegistry::new();
        let first = registry.register(&schema("contact"));
        let again = registry.register(&schema("contact"));
        let other = registry.register(&schema("newsletter"));

        assert_eq!(first, again);
        assert_ne!(first, other);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn any_submitting_reflects_form_phases() {
        let mut registry = FormRegistry::new();
        let id = registry.register(&schema("newsletter"));
        assert!(!registry.any_submitting());

        let form = registry.get_mut(id).unwrap();
        let email = form.field_id("email").unwrap();
        form.update(Message::FieldChanged(email, "a@b.co".to_string()));
        form.update(Message::Submit);

        assert!(registry.any_submitting());
    }

    fn submit_and_navigate(registry: &mut FormRegistry, id: FormId) {
        let form = registry.get_mut(id).unwrap();
        let email = form.field_id("email").unwrap();
        form.update(Message::FieldChanged(email, "a@b.co".to_string()));
        form.update(Message::Submit);
        form.complete_submission(Ok(()));
        form.navigate();
    }

    #[test]
    fn restart_navigated_releases_every_navigated_form() {
        let mut registry = FormRegistry::new();
        let contact = registry.register(&schema("contact"));
        let newsletter = registry.register(&schema("newsletter"));
        let idle = registry.register(&schema("callback"));
        submit_and_navigate(&mut registry, contact);
        submit_and_navigate(&mut registry, newsletter);

        assert_eq!(registry.restart_navigated(), 2);

        for id in [contact, newsletter, idle] {
            assert_eq!(registry.get(id).unwrap().phase(), Phase::Idle);
        }
        assert_eq!(registry.restart_navigated(), 0);
    }

    #[test]
    fn unknown_input_types_deserialize_as_other() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: InputType,
        }
        let parsed: Wrapper = toml::from_str("kind = \"select\"").unwrap();
        assert_eq!(parsed.kind, InputType::Other);
    }
}
