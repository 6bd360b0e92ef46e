// SPDX-License-Identifier: MPL-2.0
//! Field validation.
//!
//! Validation is a pure function of the field's declared input type, name,
//! `required` flag and trimmed value. Checks run in a fixed precedence:
//!
//! 1. `required` with an empty trimmed value fails regardless of kind
//! 2. email: `type = email`, or the name contains `email` / `e-mail`
//! 3. tel: `type = tel`, or the name contains `phone` / `tel`
//! 4. name: the name contains `name` / `naam`
//! 5. textarea: at least 10 characters
//!
//! Only the first matching kind is checked. Empty optional values are always
//! valid. A field named `telephone-name` is therefore a tel field.

use super::{Field, FieldKind, InputType};
use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum character count for free-text messages.
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+0-9\s()\-]{10,20}$").expect("phone regex should compile")
});

// Latin letters plus the Latin-1 accented range, with spaces, hyphens and apostrophes.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-ZÀ-ÿ\s\-']{2,50}$").expect("name regex should compile")
});

/// Outcome of validating one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(ValidationError),
}

impl Verdict {
    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, Verdict::Valid)
    }

    #[must_use]
    pub fn error(self) -> Option<ValidationError> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(error) => Some(error),
        }
    }

    /// Translation key of the inline message, if invalid.
    #[must_use]
    pub fn message_key(self) -> Option<&'static str> {
        self.error().map(|error| error.i18n_key())
    }
}

/// Infers the validation kind from the declared input type and field name.
///
/// Name matching is case-insensitive and substring based.
#[must_use]
pub fn infer_kind(input_type: InputType, name: &str) -> FieldKind {
    let name = name.to_lowercase();
    let name_has = |needle: &str| name.contains(needle);

    if input_type == InputType::Email || name_has("email") || name_has("e-mail") {
        FieldKind::Email
    } else if input_type == InputType::Tel || name_has("phone") || name_has("tel") {
        FieldKind::Tel
    } else if name_has("name") || name_has("naam") {
        FieldKind::Name
    } else if input_type == InputType::Textarea {
        FieldKind::Textarea
    } else if input_type == InputType::Text {
        FieldKind::Text
    } else {
        FieldKind::Other
    }
}

/// Validates a field against its inferred kind.
#[must_use]
pub fn validate(field: &Field) -> Verdict {
    validate_value(field.kind(), field.is_required(), field.value())
}

/// Validates a raw value for the given kind.
#[must_use]
pub fn validate_value(kind: FieldKind, required: bool, value: &str) -> Verdict {
    let value = value.trim();

    if value.is_empty() {
        return if required {
            Verdict::Invalid(ValidationError::Required)
        } else {
            Verdict::Valid
        };
    }

    let error = match kind {
        FieldKind::Email if !EMAIL_PATTERN.is_match(value) => Some(ValidationError::InvalidEmail),
        FieldKind::Tel if !PHONE_PATTERN.is_match(value) => Some(ValidationError::InvalidPhone),
        FieldKind::Name if !NAME_PATTERN.is_match(value) => Some(ValidationError::InvalidName),
        FieldKind::Textarea if value.chars().count() < MIN_MESSAGE_CHARS => {
            Some(ValidationError::MessageTooShort)
        }
        _ => None,
    };

    error.map_or(Verdict::Valid, Verdict::Invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(kind: FieldKind, value: &str) -> Verdict {
        validate_value(kind, false, value)
    }

    #[test]
    fn required_empty_is_invalid_for_every_kind() {
        for kind in [
            FieldKind::Text,
            FieldKind::Email,
            FieldKind::Tel,
            FieldKind::Name,
            FieldKind::Textarea,
            FieldKind::Other,
        ] {
            assert_eq!(
                validate_value(kind, true, "   "),
                Verdict::Invalid(ValidationError::Required),
                "{kind:?}"
            );
        }
    }

    #[test]
    fn email_validation() {
        assert!(check(FieldKind::Email, "a@b.co").is_valid());
        assert_eq!(
            check(FieldKind::Email, "a@b"),
            Verdict::Invalid(ValidationError::InvalidEmail)
        );
        assert_eq!(
            check(FieldKind::Email, "a b@c.de"),
            Verdict::Invalid(ValidationError::InvalidEmail)
        );
        assert!(check(FieldKind::Email, "").is_valid());
    }

    #[test]
    fn email_value_is_trimmed() {
        assert!(check(FieldKind::Email, "  a@b.co  ").is_valid());
    }

    #[test]
    fn tel_validation() {
        assert!(check(FieldKind::Tel, "+31 6 1234 5678").is_valid());
        assert!(check(FieldKind::Tel, "(020) 123-4567").is_valid());
        assert_eq!(
            check(FieldKind::Tel, "123"),
            Verdict::Invalid(ValidationError::InvalidPhone)
        );
        assert_eq!(
            check(FieldKind::Tel, "06-1234-abcd"),
            Verdict::Invalid(ValidationError::InvalidPhone)
        );
        assert_eq!(
            check(FieldKind::Tel, "123456789012345678901"),
            Verdict::Invalid(ValidationError::InvalidPhone)
        );
    }

    #[test]
    fn name_validation() {
        assert!(check(FieldKind::Name, "Jean-Luc").is_valid());
        assert!(check(FieldKind::Name, "Zoë O'Brien").is_valid());
        assert_eq!(
            check(FieldKind::Name, "X7"),
            Verdict::Invalid(ValidationError::InvalidName)
        );
        assert_eq!(
            check(FieldKind::Name, "X"),
            Verdict::Invalid(ValidationError::InvalidName)
        );
    }

    #[test]
    fn textarea_requires_ten_characters() {
        assert_eq!(
            check(FieldKind::Textarea, "too short"),
            Verdict::Invalid(ValidationError::MessageTooShort)
        );
        assert!(check(FieldKind::Textarea, "long enough").is_valid());
        assert!(check(FieldKind::Textarea, "éééééééééé").is_valid());
    }

    #[test]
    fn text_and_other_are_always_valid() {
        assert!(check(FieldKind::Text, "X7!").is_valid());
        assert!(check(FieldKind::Other, "anything").is_valid());
    }

    #[test]
    fn kind_precedence_is_fixed() {
        assert_eq!(infer_kind(InputType::Text, "telephone-name"), FieldKind::Tel);
        assert_eq!(infer_kind(InputType::Text, "email-name"), FieldKind::Email);
        assert_eq!(infer_kind(InputType::Tel, "your_name"), FieldKind::Tel);
        assert_eq!(infer_kind(InputType::Textarea, "naam"), FieldKind::Name);
        assert_eq!(infer_kind(InputType::Textarea, "message"), FieldKind::Textarea);
        assert_eq!(infer_kind(InputType::Text, "E-Mail"), FieldKind::Email);
        assert_eq!(infer_kind(InputType::Text, "company"), FieldKind::Text);
        assert_eq!(infer_kind(InputType::Other, "topic"), FieldKind::Other);
    }

    #[test]
    fn validation_is_idempotent() {
        let first = check(FieldKind::Email, "a@b");
        let second = check(FieldKind::Email, "a@b");
        assert_eq!(first, second);
    }

    #[test]
    fn message_key_matches_error() {
        assert_eq!(Verdict::Valid.message_key(), None);
        assert_eq!(
            Verdict::Invalid(ValidationError::Required).message_key(),
            Some("validation-required")
        );
    }
}
