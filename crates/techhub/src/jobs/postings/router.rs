use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use super::domain::{AdminContext, CompanyRef, JobField, JobPostingForm, ValidationErrors};
use super::validation::{validate_admin_job_form, validate_single_field};

/// Router exposing the posting validator to form frontends.
///
/// Rule violations are data, not HTTP errors: both endpoints answer 200
/// with a report envelope, and only malformed payloads are rejected.
pub fn job_validation_router() -> Router {
    Router::new()
        .route("/api/v1/admin/jobs/validate", post(validate_form_handler))
        .route(
            "/api/v1/admin/jobs/validate/field",
            post(validate_field_handler),
        )
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidateFormRequest {
    pub(crate) form: JobPostingForm,
    #[serde(default, rename = "accessibleCompanies")]
    pub(crate) accessible_companies: Option<Vec<CompanyRef>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidateFieldRequest {
    pub(crate) field: JobField,
    pub(crate) form: JobPostingForm,
    #[serde(default, rename = "accessibleCompanies")]
    pub(crate) accessible_companies: Option<Vec<CompanyRef>>,
}

/// Response envelope shared by both endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct ValidationReport {
    pub(crate) valid: bool,
    pub(crate) errors: ValidationErrors,
    #[serde(rename = "firstErrorField")]
    pub(crate) first_error_field: Option<JobField>,
}

impl ValidationReport {
    pub(crate) fn from_errors(errors: ValidationErrors) -> Self {
        Self {
            valid: !errors.has_errors(),
            first_error_field: errors.first_error_field(),
            errors,
        }
    }
}

fn context_from(companies: Option<Vec<CompanyRef>>) -> AdminContext {
    match companies {
        Some(companies) => AdminContext::new().with_accessible_companies(companies),
        None => AdminContext::new(),
    }
}

pub(crate) async fn validate_form_handler(
    axum::Json(request): axum::Json<ValidateFormRequest>,
) -> Response {
    let context = context_from(request.accessible_companies);
    let errors = validate_admin_job_form(&request.form, &context);
    (StatusCode::OK, axum::Json(ValidationReport::from_errors(errors))).into_response()
}

pub(crate) async fn validate_field_handler(
    axum::Json(request): axum::Json<ValidateFieldRequest>,
) -> Response {
    let context = context_from(request.accessible_companies);
    let errors = validate_single_field(request.field, &request.form, &context);
    (StatusCode::OK, axum::Json(ValidationReport::from_errors(errors))).into_response()
}
