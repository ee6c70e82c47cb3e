use std::collections::HashSet;

use serde_json::Value;

use super::super::domain::{JobField, ValidationErrors, MAX_SKILLS};

const SKILL_NAME_MAX: usize = 50;

/// Validate the skills collection.
///
/// Later rules overwrite earlier messages for the same key, matching the
/// original evaluation order. Anything that is not a JSON array, `None`
/// included, reports the shape error instead of failing.
pub fn validate_skills(skills: Option<&Value>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let Some(Value::Array(entries)) = skills else {
        errors.insert(JobField::Skills, "Skills must be an array");
        return errors;
    };

    if entries.is_empty() {
        errors.insert(JobField::Skills, "At least one skill is recommended");
    } else if entries.len() > MAX_SKILLS {
        errors.insert(JobField::Skills, format!("Maximum {MAX_SKILLS} skills allowed"));
    }

    if entries.iter().any(|entry| !has_valid_name(entry)) {
        errors.insert(
            JobField::Skills,
            format!("All skills must have valid names (1-{SKILL_NAME_MAX} characters)"),
        );
    }

    let mut seen = HashSet::new();
    let mut duplicated = false;
    for entry in entries {
        let Some(name) = entry.get("name").and_then(Value::as_str) else {
            continue;
        };
        if !seen.insert(name.trim().to_lowercase()) {
            duplicated = true;
        }
    }
    if duplicated {
        errors.insert(JobField::Skills, "Duplicate skills are not allowed");
    }

    errors
}

fn has_valid_name(entry: &Value) -> bool {
    entry
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .is_some_and(|name| !name.is_empty() && name.chars().count() <= SKILL_NAME_MAX)
}
