use chrono::NaiveDate;
use serde_json::json;

use crate::jobs::postings::domain::{
    AdminContext, CompanyRef, JobField, JobPostingForm, ValidationErrors,
};

/// Fixed reference date for deadline rules.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date")
}

/// A form that passes every admin rule under [`admin_context`].
pub(super) fn valid_form() -> JobPostingForm {
    JobPostingForm {
        title: Some("Senior Backend Engineer".to_string()),
        description: Some(
            "Own the posting pipeline end to end, from intake validation to the publishing \
             workers, and keep the listing data trustworthy for employers."
                .to_string(),
        ),
        responsibilities: None,
        requirements: None,
        benefits: None,
        category: Some("Engineering".to_string()),
        location: Some("Des Moines, IA".to_string()),
        min_salary: Some("95000".to_string()),
        max_salary: Some("120000".to_string()),
        application_deadline: None,
        skills: Some(json!([{ "name": "Rust" }, { "name": "PostgreSQL" }])),
        company_id: Some("acme-01".to_string()),
        application_methods: Some(vec!["internal".to_string()]),
        application_url: None,
        application_email: None,
    }
}

pub(super) fn admin_context() -> AdminContext {
    AdminContext::new().with_accessible_companies(vec![
        CompanyRef {
            id: "acme-01".to_string(),
        },
        CompanyRef {
            id: "globex-02".to_string(),
        },
    ])
}

pub(super) fn text(len: usize) -> String {
    "x".repeat(len)
}

/// Message for the field, panicking when it is absent or an empty marker.
pub(super) fn message_for(errors: &ValidationErrors, field: JobField) -> String {
    match errors.get(field) {
        Some(message) if !message.is_empty() => message.to_string(),
        other => panic!("expected an error for {field}, got {other:?}"),
    }
}
