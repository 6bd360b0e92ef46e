// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Forms(String),
}

/// Reasons a single field fails validation.
///
/// These are user-correctable and never propagated as failures: the
/// validator returns them as data and the form view renders them inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty (after trimming).
    Required,
    /// Value does not look like `local@domain.tld`.
    InvalidEmail,
    /// Value is not 10-20 characters of digits, `+`, spaces, parentheses or hyphens.
    InvalidPhone,
    /// Value is not 2-50 letters, spaces, hyphens or apostrophes.
    InvalidName,
    /// Free-text message shorter than the minimum length.
    MessageTooShort,
}

impl ValidationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::Required => "validation-required",
            ValidationError::InvalidEmail => "validation-invalid-email",
            ValidationError::InvalidPhone => "validation-invalid-phone",
            ValidationError::InvalidName => "validation-invalid-name",
            ValidationError::MessageTooShort => "validation-message-too-short",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "field required"),
            ValidationError::InvalidEmail => write!(f, "invalid email address"),
            ValidationError::InvalidPhone => {
                write!(f, "invalid phone number (10-20 characters)")
            }
            ValidationError::InvalidName => write!(
                f,
                "name may only contain letters, spaces and hyphens (2-50 characters)"
            ),
            ValidationError::MessageTooShort => {
                write!(f, "message must be at least 10 characters")
            }
        }
    }
}

/// Failures of a form submission round trip.
///
/// The simulated submitter never produces these; they exist for submitters
/// that talk to a real backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The request could not reach the server.
    Network(String),
    /// The server did not answer in time.
    Timeout,
    /// The server refused the submission.
    Rejected(String),
}

impl SubmissionError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SubmissionError::Network(_) => "notification-submit-error-network",
            SubmissionError::Timeout => "notification-submit-error-timeout",
            SubmissionError::Rejected(_) => "notification-submit-error-rejected",
        }
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Network(msg) => write!(f, "Network error: {}", msg),
            SubmissionError::Timeout => write!(f, "Submission timed out"),
            SubmissionError::Rejected(msg) => write!(f, "Submission rejected: {}", msg),
        }
    }
}

impl std::error::Error for SubmissionError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Forms(e) => write!(f, "Forms Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
