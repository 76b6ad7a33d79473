//! Login form validation.

use std::collections::BTreeMap;

use crate::auth::text::trim_form_value;
use crate::config::UsernameRules;

/// Field name → first failing rule message.
pub type FieldErrors = BTreeMap<String, String>;

const USERNAME: &str = "username";

/// Validate and normalize the submitted username.
///
/// The value is trimmed first; rules run in order (required, length, charset)
/// and the first failure is reported. Lengths count UTF-16 code units, the
/// unit browsers use for `minlength`/`maxlength`.
pub fn validate_username(raw: Option<&str>, rules: &UsernameRules) -> Result<String, FieldErrors> {
    let value = trim_form_value(raw.unwrap_or_default());

    match username_error(value, rules) {
        Some(message) => Err(FieldErrors::from([(USERNAME.to_string(), message)])),
        None => Ok(value.to_string()),
    }
}

fn username_error(value: &str, rules: &UsernameRules) -> Option<String> {
    if value.is_empty() {
        return Some(format!("{USERNAME} is required"));
    }

    let len = value.encode_utf16().count();
    if len < rules.min_length {
        return Some(format!("{USERNAME} must be at least {} characters", rules.min_length));
    }
    if len > rules.max_length {
        return Some(format!("{USERNAME} must be no more than {} characters", rules.max_length));
    }

    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Some(format!("{USERNAME} format is invalid"));
    }

    None
}
