//! Job-posting form validation, editor session state, and the wire shapes
//! for application-method configuration.

pub mod domain;
pub mod payload;
pub mod router;
pub mod session;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    AdminContext, ApplicationMethod, CharacterLimits, CompanyRef, JobField, JobPostingForm,
    UnknownFieldError, ValidationErrors, MAX_SKILLS,
};
pub use payload::{
    format_for_api, parse_from_job, ApplicationMethodsPayload, MethodDescriptor,
    ParsedApplicationMethods,
};
pub use router::job_validation_router;
pub use session::{SubmitOutcome, ValidationSession};
pub use validation::{
    format_validation_error, validate_admin_field, validate_admin_job_form,
    validate_admin_job_form_at, validate_email, validate_job_field, validate_job_field_at,
    validate_single_field, validate_single_field_at, validate_skills, validate_url,
};
