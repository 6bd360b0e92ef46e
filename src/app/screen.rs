// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::forms::FormId;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The page with every registered form.
    #[default]
    Forms,
    /// Shown after the given form was submitted.
    Confirmation { form: FormId },
}
