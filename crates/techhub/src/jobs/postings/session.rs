//! Validation state for a posting editor session.
//!
//! Tracks the current error map plus which fields the user has interacted
//! with, so callers can defer noisy validation until a field has been
//! visited once. The scrolling/focus side of the original editor stays with
//! the frontend; only the state machine lives here.

use std::collections::BTreeSet;

use super::domain::{AdminContext, JobField, JobPostingForm, ValidationErrors};
use super::validation::{validate_admin_job_form, validate_single_field};

/// Form-level validation state: errors so far plus touched fields.
#[derive(Debug, Default)]
pub struct ValidationSession {
    context: AdminContext,
    errors: ValidationErrors,
    touched: BTreeSet<JobField>,
}

/// Outcome of a submit-time validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub valid: bool,
    pub errors: ValidationErrors,
    pub first_error_field: Option<JobField>,
}

impl ValidationSession {
    pub fn new(context: AdminContext) -> Self {
        Self {
            context,
            errors: ValidationErrors::new(),
            touched: BTreeSet::new(),
        }
    }

    pub fn context(&self) -> &AdminContext {
        &self.context
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    pub fn first_error_field(&self) -> Option<JobField> {
        self.errors.first_error_field()
    }

    /// Current non-empty message for the field, if any.
    pub fn field_error(&self, field: JobField) -> Option<&str> {
        self.errors.get(field).filter(|message| !message.is_empty())
    }

    pub fn is_touched(&self, field: JobField) -> bool {
        self.touched.contains(&field)
    }

    pub fn touch(&mut self, field: JobField) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self, fields: impl IntoIterator<Item = JobField>) {
        self.touched.extend(fields);
    }

    /// Validate one field against the snapshot and store the result,
    /// returning the message when the field is invalid.
    pub fn validate_field(&mut self, field: JobField, form: &JobPostingForm) -> Option<String> {
        let result = validate_single_field(field, form, &self.context);
        match result.get(field) {
            Some(message) if !message.is_empty() => {
                let message = message.to_string();
                self.errors.insert(field, message.clone());
                Some(message)
            }
            _ => {
                self.errors.remove(field);
                None
            }
        }
    }

    /// Validate the whole form and replace the stored error map.
    pub fn validate_form(&mut self, form: &JobPostingForm) -> &ValidationErrors {
        self.errors = validate_admin_job_form(form, &self.context);
        &self.errors
    }

    /// Change notification: marks the field touched, and re-validates it
    /// only once the user has already visited it.
    pub fn handle_change(&mut self, field: JobField, form: &JobPostingForm) {
        let previously_touched = self.touched.contains(&field);
        self.touch(field);
        if previously_touched {
            self.validate_field(field, form);
        }
    }

    /// Blur notification: marks the field touched and validates it.
    pub fn handle_blur(&mut self, field: JobField, form: &JobPostingForm) {
        self.touch(field);
        self.validate_field(field, form);
    }

    /// Submit-time pass: touches every field, validates the whole form,
    /// and reports where to send the user first.
    pub fn submit(&mut self, form: &JobPostingForm) -> SubmitOutcome {
        self.touch_all(JobField::ALL);
        let errors = self.validate_form(form).clone();
        SubmitOutcome {
            valid: !errors.has_errors(),
            first_error_field: errors.first_error_field(),
            errors,
        }
    }

    pub fn clear_field(&mut self, field: JobField) {
        self.errors.remove(field);
    }

    pub fn clear_errors(&mut self) {
        self.errors = ValidationErrors::new();
    }

    pub fn clear_touched(&mut self) {
        self.touched.clear();
    }

    /// Drop both errors and touched state.
    pub fn reset(&mut self) {
        self.errors = ValidationErrors::new();
        self.touched.clear();
    }
}
