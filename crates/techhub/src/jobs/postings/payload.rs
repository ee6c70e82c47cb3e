//! Wire shapes for the application-method configuration of a posting.
//!
//! The jobs API accepts a descriptor list plus three legacy flat fields;
//! older job documents may carry only the flat fields. The codec here owns
//! both directions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::ApplicationMethod;

/// One application-method descriptor as the jobs API expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    #[serde(rename = "type")]
    pub method: ApplicationMethod,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub primary: bool,
}

/// Submission payload fragment covering the application methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationMethodsPayload {
    pub application_methods: Vec<MethodDescriptor>,
    pub use_internal_application: bool,
    pub application_url: Option<String>,
    pub application_email: Option<String>,
}

/// Build the submission fragment from the selected methods and their
/// inputs. Descriptors whose url/email is blank are dropped rather than
/// sent half-filled.
pub fn format_for_api(
    selected: &[ApplicationMethod],
    application_url: Option<&str>,
    application_email: Option<&str>,
) -> ApplicationMethodsPayload {
    let url = application_url.map(str::trim).filter(|value| !value.is_empty());
    let email = application_email.map(str::trim).filter(|value| !value.is_empty());

    let mut descriptors = Vec::new();
    for method in selected {
        match method {
            ApplicationMethod::Internal => descriptors.push(MethodDescriptor {
                method: ApplicationMethod::Internal,
                label: ApplicationMethod::Internal.label().to_string(),
                url: None,
                email: None,
                primary: true,
            }),
            ApplicationMethod::ExternalUrl => {
                if let Some(url) = url {
                    descriptors.push(MethodDescriptor {
                        method: ApplicationMethod::ExternalUrl,
                        label: ApplicationMethod::ExternalUrl.label().to_string(),
                        url: Some(url.to_string()),
                        email: None,
                        primary: false,
                    });
                }
            }
            ApplicationMethod::Email => {
                if let Some(email) = email {
                    descriptors.push(MethodDescriptor {
                        method: ApplicationMethod::Email,
                        label: ApplicationMethod::Email.label().to_string(),
                        url: None,
                        email: Some(email.to_string()),
                        primary: false,
                    });
                }
            }
        }
    }

    let external_selected = selected.contains(&ApplicationMethod::ExternalUrl);
    let email_selected = selected.contains(&ApplicationMethod::Email);

    ApplicationMethodsPayload {
        application_methods: descriptors,
        use_internal_application: selected.contains(&ApplicationMethod::Internal),
        application_url: external_selected
            .then(|| url.map(str::to_string))
            .flatten(),
        application_email: email_selected
            .then(|| email.map(str::to_string))
            .flatten(),
    }
}

/// Application methods recovered from a job document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedApplicationMethods {
    pub selected: Vec<ApplicationMethod>,
    pub application_url: Option<String>,
    pub application_email: Option<String>,
}

/// Read the method configuration out of a job payload, tolerating both the
/// legacy flat fields and the `application_methods` descriptor array.
/// Methods are deduplicated; the first url/email seen wins.
pub fn parse_from_job(job: &Value) -> ParsedApplicationMethods {
    let mut parsed = ParsedApplicationMethods::default();

    if job
        .get("use_internal_application")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        parsed.selected.push(ApplicationMethod::Internal);
    }
    if let Some(url) = non_empty_str(job.get("application_url")) {
        parsed.selected.push(ApplicationMethod::ExternalUrl);
        parsed.application_url = Some(url.to_string());
    }
    if let Some(email) = non_empty_str(job.get("application_email")) {
        parsed.selected.push(ApplicationMethod::Email);
        parsed.application_email = Some(email.to_string());
    }

    if let Some(entries) = job.get("application_methods").and_then(Value::as_array) {
        for entry in entries {
            let Some(method) = entry
                .get("type")
                .and_then(Value::as_str)
                .and_then(ApplicationMethod::parse)
            else {
                continue;
            };

            if !parsed.selected.contains(&method) {
                parsed.selected.push(method);
            }
            match method {
                ApplicationMethod::ExternalUrl => {
                    if parsed.application_url.is_none() {
                        if let Some(url) = non_empty_str(entry.get("url")) {
                            parsed.application_url = Some(url.to_string());
                        }
                    }
                }
                ApplicationMethod::Email => {
                    if parsed.application_email.is_none() {
                        if let Some(email) = non_empty_str(entry.get("email")) {
                            parsed.application_email = Some(email.to_string());
                        }
                    }
                }
                ApplicationMethod::Internal => {}
            }
        }
    }

    parsed
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}
