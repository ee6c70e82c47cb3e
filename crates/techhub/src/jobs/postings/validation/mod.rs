//! Rule evaluation for job-posting forms.
//!
//! Every function here is pure and total: rule violations come back as
//! [`ValidationErrors`] entries, never as panics or `Result` failures.
//! Unrecognized field/rule combinations are a deliberate no-op and return
//! an empty map.

mod fields;
mod methods;
mod skills;

pub use fields::{validate_job_field, validate_job_field_at};
pub use methods::{validate_email, validate_url};
pub use skills::validate_skills;

use chrono::{Local, NaiveDate};
use serde_json::Value;

use super::domain::{AdminContext, ApplicationMethod, JobField, JobPostingForm, ValidationErrors};

/// Validate one admin-only field against the form snapshot and the
/// caller-supplied capability context.
pub fn validate_admin_field(
    field: JobField,
    form: &JobPostingForm,
    context: &AdminContext,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match field {
        JobField::CompanyId => {
            let raw = form.company_id.as_deref().unwrap_or("");
            if raw.trim().is_empty() {
                errors.insert(field, "Company selection is required for admin job posting");
            } else if context.access_check_denies(raw) {
                errors.insert(field, "You do not have access to the selected company");
            } else if context.list_excludes(raw) {
                errors.insert(
                    field,
                    "Selected company is not in your accessible companies list",
                );
            }
        }
        JobField::ApplicationMethods => {
            if let Some(message) = methods::methods_error(form) {
                errors.insert(field, message);
            }
        }
        JobField::ApplicationUrl | JobField::ApplicationEmail => {
            if let Some(message) = methods::method_field_error(field, form) {
                errors.insert(field, message);
            }
        }
        // Standard fields are not admin concerns.
        _ => {}
    }

    errors
}

/// Dispatch a single field to its rule family; the entry point for
/// real-time (per-keystroke or per-blur) validation.
pub fn validate_single_field(
    field: JobField,
    form: &JobPostingForm,
    context: &AdminContext,
) -> ValidationErrors {
    validate_single_field_at(field, form, context, Local::now().date_naive())
}

/// Same as [`validate_single_field`] with an explicit "today" for the
/// deadline rule.
pub fn validate_single_field_at(
    field: JobField,
    form: &JobPostingForm,
    context: &AdminContext,
    today: NaiveDate,
) -> ValidationErrors {
    if field.is_admin() {
        return validate_admin_field(field, form, context);
    }
    if field == JobField::Skills {
        return validate_skills(form.skills.as_ref());
    }
    validate_job_field_at(field, form, today)
}

/// Run the complete admin rule set over a form snapshot and merge the
/// results into one map. Never fails; an empty map means the form is valid.
pub fn validate_admin_job_form(form: &JobPostingForm, context: &AdminContext) -> ValidationErrors {
    validate_admin_job_form_at(form, context, Local::now().date_naive())
}

/// Same as [`validate_admin_job_form`] with an explicit "today" for the
/// deadline rule.
pub fn validate_admin_job_form_at(
    form: &JobPostingForm,
    context: &AdminContext,
    today: NaiveDate,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for field in JobField::ADMIN {
        errors.merge(validate_admin_field(field, form, context));
    }
    for field in JobField::STANDARD {
        errors.merge(fields::validate_job_field_at(field, form, today));
    }

    // A form that never touched skills is treated as an empty list here,
    // unlike the single-field path.
    let fallback = Value::Array(Vec::new());
    errors.merge(validate_skills(Some(form.skills.as_ref().unwrap_or(&fallback))));

    // Cross-field: the salary ordering rule owns the final max_salary message.
    if let (Some(minimum), Some(maximum)) =
        (fields::salary(&form.min_salary), fields::salary(&form.max_salary))
    {
        if maximum <= minimum {
            errors.insert(
                JobField::MaxSalary,
                "Maximum salary must be greater than minimum salary",
            );
        }
    }

    // Method-conditional requirements are re-asserted on the merged map,
    // with the whole-form message strings.
    let selected = methods::selected_methods(form);
    let url_missing = form.application_url.as_deref().map_or(true, str::is_empty);
    if selected.contains(&ApplicationMethod::ExternalUrl) && url_missing {
        errors.insert(
            JobField::ApplicationUrl,
            "Application URL is required when external URL method is selected",
        );
    }
    let email_missing = form.application_email.as_deref().map_or(true, str::is_empty);
    if selected.contains(&ApplicationMethod::Email) && email_missing {
        errors.insert(
            JobField::ApplicationEmail,
            "Application email is required when email method is selected",
        );
    }

    errors
}

/// Normalize an error payload from the jobs API (a bare string, a list of
/// strings, or a `{"message": ...}` object) into one display string.
pub fn format_validation_error(error: &Value) -> String {
    match error {
        Value::String(message) => message.clone(),
        Value::Array(parts) => parts
            .iter()
            .map(|part| match part {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| "Invalid input".to_string()),
        _ => "Invalid input".to_string(),
    }
}
