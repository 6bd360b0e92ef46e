// SPDX-License-Identifier: MPL-2.0
//! Declarative form layouts.
//!
//! The built-in layouts are embedded from `assets/forms/forms.toml`. A
//! replacement file may be supplied through the `[forms] file` config key or
//! the `--forms` command-line flag; if it cannot be loaded, the built-in
//! layouts are used and a warning notification key is returned.
//!
//! ```toml
//! [[forms]]
//! id = "newsletter"
//! title = "form-newsletter-title"
//! submit_label = "form-newsletter-submit"
//!
//! [[forms.fields]]
//! name = "email"
//! label = "field-email"
//! type = "email"
//! required = true
//! ```

use super::InputType;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/forms/"]
struct FormAssets;

const BUILTIN_FILE: &str = "forms.toml";

/// Warning key returned when a custom forms file could not be used.
pub const LOAD_WARNING_KEY: &str = "notification-forms-load-error";

/// One input as declared in the layout file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    /// Translation key for the field label.
    pub label: String,
    /// Translation key for the placeholder text.
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(rename = "type", default)]
    pub input_type: InputType,
    #[serde(default)]
    pub required: bool,
}

/// A form layout: its identity, translation keys and ordered fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormSchema {
    pub id: String,
    pub title: String,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
    pub fields: Vec<FieldDecl>,
}

fn default_submit_label() -> String {
    "form-submit".to_string()
}

#[derive(Debug, Deserialize)]
struct FormsFile {
    #[serde(default)]
    forms: Vec<FormSchema>,
}

/// Parses and checks a forms file.
///
/// # Errors
///
/// Returns [`Error::Forms`] if the TOML is malformed, declares no forms,
/// repeats a form id, or repeats or leaves empty a field name within a form.
pub fn parse(content: &str) -> Result<Vec<FormSchema>> {
    let file: FormsFile = toml::from_str(content).map_err(|e| Error::Forms(e.to_string()))?;
    check(&file.forms)?;
    Ok(file.forms)
}

fn check(forms: &[FormSchema]) -> Result<()> {
    if forms.is_empty() {
        return Err(Error::Forms("no forms declared".to_string()));
    }

    let mut form_ids = HashSet::new();
    for form in forms {
        if !form_ids.insert(form.id.as_str()) {
            return Err(Error::Forms(format!("duplicate form id '{}'", form.id)));
        }

        let mut names = HashSet::new();
        for field in &form.fields {
            if field.name.trim().is_empty() {
                return Err(Error::Forms(format!("form '{}' has an unnamed field", form.id)));
            }
            if !names.insert(field.name.as_str()) {
                return Err(Error::Forms(format!(
                    "form '{}' declares field '{}' twice",
                    form.id, field.name
                )));
            }
        }
    }
    Ok(())
}

/// Returns the embedded layouts.
///
/// # Errors
///
/// Returns an error if the embedded file is missing or invalid.
pub fn builtin() -> Result<Vec<FormSchema>> {
    let file = FormAssets::get(BUILTIN_FILE)
        .ok_or_else(|| Error::Forms(format!("embedded {BUILTIN_FILE} is missing")))?;
    parse(&String::from_utf8_lossy(&file.data))
}

/// Reads layouts from a file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is invalid.
pub fn load_from_path(path: &Path) -> Result<Vec<FormSchema>> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Loads the layouts to register at startup.
///
/// Falls back to the built-in layouts when `custom` fails, returning
/// [`LOAD_WARNING_KEY`] so the caller can notify the user.
#[must_use]
pub fn load(custom: Option<&Path>) -> (Vec<FormSchema>, Option<String>) {
    let mut warning = None;

    if let Some(path) = custom {
        match load_from_path(path) {
            Ok(forms) => {
                tracing::info!(path = %path.display(), count = forms.len(), "loaded custom forms");
                return (forms, None);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "falling back to built-in forms");
                warning = Some(LOAD_WARNING_KEY.to_string());
            }
        }
    }

    match builtin() {
        Ok(forms) => (forms, warning),
        Err(err) => {
            tracing::error!(%err, "built-in forms are unusable");
            (Vec::new(), Some(LOAD_WARNING_KEY.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const NEWSLETTER: &str = r#"
[[forms]]
id = "newsletter"
title = "form-newsletter-title"

[[forms.fields]]
name = "email"
label = "field-email"
type = "email"
required = true
"#;

    #[test]
    fn builtin_forms_parse() {
        let forms = builtin().expect("embedded forms should parse");
        let contact = forms.iter().find(|f| f.id == "contact").expect("contact form");
        assert!(contact.fields.iter().any(|f| f.input_type == InputType::Textarea));
        assert!(forms.iter().any(|f| f.id == "newsletter"));
    }

    #[test]
    fn defaults_are_applied() {
        let forms = parse(NEWSLETTER).unwrap();
        assert_eq!(forms[0].submit_label, "form-submit");
        assert_eq!(forms[0].fields[0].placeholder, None);
        assert!(forms[0].fields[0].required);
    }

    #[test]
    fn missing_type_defaults_to_text() {
        let forms = parse(
            r#"
[[forms]]
id = "x"
title = "t"
fields = [{ name = "company", label = "field-company" }]
"#,
        )
        .unwrap();
        assert_eq!(forms[0].fields[0].input_type, InputType::Text);
        assert!(!forms[0].fields[0].required);
    }

    #[test]
    fn duplicate_form_ids_are_rejected() {
        let doubled = format!("{NEWSLETTER}\n{NEWSLETTER}");
        assert!(matches!(parse(&doubled), Err(Error::Forms(_))));
    }

    #[test]
    fn duplicate_field_names_are_rejected() {
        let content = r#"
[[forms]]
id = "x"
title = "t"
fields = [
    { name = "email", label = "a" },
    { name = "email", label = "b" },
]
"#;
        assert!(matches!(parse(content), Err(Error::Forms(_))));
    }

    #[test]
    fn empty_file_is_rejected() {
        assert!(matches!(parse(""), Err(Error::Forms(_))));
    }

    #[test]
    fn load_uses_custom_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(NEWSLETTER.as_bytes()).unwrap();

        let (forms, warning) = load(Some(file.path()));
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].id, "newsletter");
        assert!(warning.is_none());
    }

    #[test]
    fn load_falls_back_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let (forms, warning) = load(Some(&dir.path().join("missing.toml")));

        assert!(forms.iter().any(|f| f.id == "contact"));
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING_KEY));
    }

    #[test]
    fn load_without_custom_file_uses_builtin() {
        let (forms, warning) = load(None);
        assert!(!forms.is_empty());
        assert!(warning.is_none());
    }
}
