use std::sync::OnceLock;

use chrono::{DateTime, Local, NaiveDate};
use regex::Regex;

use super::super::domain::{CharacterLimits, JobField, JobPostingForm, ValidationErrors};

static HTML_TAG: OnceLock<Regex> = OnceLock::new();

/// Naive markup strip: removes `<...>` spans before measuring text length.
/// This is a regex pass, not an HTML parser; malformed markup can skew the
/// resulting count.
pub(crate) fn strip_html(value: &str) -> String {
    let pattern = HTML_TAG.get_or_init(|| Regex::new("<[^>]*>").expect("static pattern compiles"));
    pattern.replace_all(value, "").into_owned()
}

/// Trimmed, non-empty view of an optional form value.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

/// Finite numeric reading of a salary input, if it has one.
pub(crate) fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Salary value of a field that is both present and numeric.
pub(crate) fn salary(value: &Option<String>) -> Option<f64> {
    present(value).and_then(parse_amount)
}

/// Deadline inputs arrive either as a plain date or a full timestamp.
pub(crate) fn parse_deadline(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|stamp| stamp.date_naive())
        })
}

const fn bounds(field: JobField) -> CharacterLimits {
    match field.limits() {
        Some(limits) => limits,
        None => CharacterLimits { min: 0, max: usize::MAX },
    }
}

/// Evaluate one standard job field against the form snapshot.
///
/// Admin-only fields and `skills` fall through to an empty map here; use
/// `validate_admin_field` and `validate_skills` for those.
pub fn validate_job_field(field: JobField, form: &JobPostingForm) -> ValidationErrors {
    validate_job_field_at(field, form, Local::now().date_naive())
}

/// Same as [`validate_job_field`] with an explicit "today" for the
/// deadline rule.
pub fn validate_job_field_at(
    field: JobField,
    form: &JobPostingForm,
    today: NaiveDate,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match field {
        JobField::Title => {
            let limits = bounds(field);
            let trimmed = form.title.as_deref().unwrap_or("").trim();
            let count = trimmed.chars().count();
            if trimmed.is_empty() {
                errors.insert(field, "Job title is required");
            } else if count < limits.min {
                errors.insert(
                    field,
                    format!("Title must be at least {} characters", limits.min),
                );
            } else if count > limits.max {
                errors.insert(
                    field,
                    format!("Title must not exceed {} characters", limits.max),
                );
            }
        }
        JobField::Description => {
            let limits = bounds(field);
            let text = strip_html(form.description.as_deref().unwrap_or(""));
            let text = text.trim();
            let count = text.chars().count();
            if text.is_empty() {
                errors.insert(field, "Job description is required");
            } else if count < limits.min {
                errors.insert(
                    field,
                    format!("Description must be at least {} characters", limits.min),
                );
            } else if count > limits.max {
                errors.insert(
                    field,
                    format!("Description must not exceed {} characters", limits.max),
                );
            }
        }
        JobField::Responsibilities => {
            optional_section(&mut errors, field, "Responsibilities", &form.responsibilities);
        }
        JobField::Requirements => {
            optional_section(&mut errors, field, "Requirements", &form.requirements);
        }
        JobField::Benefits => {
            optional_section(&mut errors, field, "Benefits", &form.benefits);
        }
        JobField::Category => {
            if present(&form.category).is_none() {
                errors.insert(field, "Job category is required");
            }
        }
        JobField::Location => {
            if let Some(trimmed) = present(&form.location) {
                let limits = bounds(field);
                let count = trimmed.chars().count();
                if count < limits.min {
                    errors.insert(
                        field,
                        format!("Location must be at least {} characters", limits.min),
                    );
                } else if count > limits.max {
                    errors.insert(
                        field,
                        format!("Location must not exceed {} characters", limits.max),
                    );
                }
            }
        }
        JobField::MinSalary => {
            if let Some(raw) = present(&form.min_salary) {
                match parse_amount(raw) {
                    Some(amount) if amount >= 0.0 => {}
                    _ => errors.insert(field, "Minimum salary must be a positive number"),
                }
            }
        }
        JobField::MaxSalary => {
            if let Some(raw) = present(&form.max_salary) {
                match parse_amount(raw) {
                    Some(amount) if amount >= 0.0 => {
                        if let Some(minimum) = salary(&form.min_salary) {
                            if amount <= minimum {
                                errors.insert(
                                    field,
                                    "Maximum salary must be greater than minimum salary",
                                );
                            }
                        }
                    }
                    _ => errors.insert(field, "Maximum salary must be a positive number"),
                }
            }
        }
        JobField::ApplicationDeadline => {
            if let Some(raw) = present(&form.application_deadline) {
                // A date the client let through unparsed is left to the
                // backend; only a parseable, non-future date is an error.
                if let Some(date) = parse_deadline(raw) {
                    if date <= today {
                        errors.insert(field, "Application deadline must be in the future");
                    }
                }
            }
        }
        // skills and the admin-only fields have their own rule families.
        JobField::Skills
        | JobField::CompanyId
        | JobField::ApplicationMethods
        | JobField::ApplicationUrl
        | JobField::ApplicationEmail => {}
    }

    errors
}

fn optional_section(
    errors: &mut ValidationErrors,
    field: JobField,
    label: &str,
    value: &Option<String>,
) {
    let Some(raw) = value.as_deref() else {
        return;
    };
    let limits = bounds(field);
    let text = strip_html(raw);
    let text = text.trim();
    let count = text.chars().count();
    if count > 0 && count < limits.min {
        errors.insert(
            field,
            format!("{label} must be at least {} characters", limits.min),
        );
    } else if count > limits.max {
        errors.insert(
            field,
            format!("{label} must not exceed {} characters", limits.max),
        );
    }
}
