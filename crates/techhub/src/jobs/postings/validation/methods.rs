use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use super::super::domain::{ApplicationMethod, JobField, JobPostingForm};
use super::fields::present;

static EMAIL_SHAPE: OnceLock<Regex> = OnceLock::new();

/// True when the trimmed input parses as an absolute http(s) URL.
pub fn validate_url(value: &str) -> bool {
    match Url::parse(value.trim()) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Loose `local@domain.tld` shape check on the trimmed input.
pub fn validate_email(value: &str) -> bool {
    let pattern = EMAIL_SHAPE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static pattern compiles")
    });
    pattern.is_match(value.trim())
}

/// Recognized methods currently selected on the form; unknown raw values
/// are dropped here and reported by [`methods_error`].
pub(crate) fn selected_methods(form: &JobPostingForm) -> Vec<ApplicationMethod> {
    form.application_methods
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|raw| ApplicationMethod::parse(raw))
        .collect()
}

/// Rule for the `applicationMethods` field itself.
pub(crate) fn methods_error(form: &JobPostingForm) -> Option<String> {
    let selected = form.application_methods.as_deref().unwrap_or_default();
    if selected.is_empty() {
        return Some("At least one application method must be selected".to_string());
    }

    let invalid: Vec<&str> = selected
        .iter()
        .filter(|value| ApplicationMethod::parse(value).is_none())
        .map(String::as_str)
        .collect();
    if invalid.is_empty() {
        None
    } else {
        Some(format!("Invalid application methods: {}", invalid.join(", ")))
    }
}

/// Conditional rules for `applicationUrl` / `applicationEmail`: they only
/// bite while the matching method is selected.
pub(crate) fn method_field_error(field: JobField, form: &JobPostingForm) -> Option<String> {
    let selected = selected_methods(form);
    match field {
        JobField::ApplicationUrl if selected.contains(&ApplicationMethod::ExternalUrl) => {
            match present(&form.application_url) {
                None => Some(
                    "Application URL is required when external website method is selected"
                        .to_string(),
                ),
                Some(value) if !validate_url(value) => {
                    Some("Please enter a valid URL (e.g., https://example.com)".to_string())
                }
                Some(_) => None,
            }
        }
        JobField::ApplicationEmail if selected.contains(&ApplicationMethod::Email) => {
            match present(&form.application_email) {
                None => Some(
                    "Application email is required when email method is selected".to_string(),
                ),
                Some(value) if !validate_email(value) => {
                    Some("Please enter a valid email address".to_string())
                }
                Some(_) => None,
            }
        }
        _ => None,
    }
}
