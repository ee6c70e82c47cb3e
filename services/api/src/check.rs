use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::Args;
use serde_json::Value;
use techhub::error::AppError;
use techhub::jobs::postings::{
    validate_admin_job_form_at, validate_single_field_at, AdminContext, CompanyRef, JobField,
    JobPostingForm, UnknownFieldError, ValidationErrors,
};

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Job-posting JSON document; stdin when omitted
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Company id the admin may post for (repeatable); unrestricted when omitted
    #[arg(long = "company")]
    pub(crate) companies: Vec<String>,
    /// Validate a single field instead of the whole form
    #[arg(long)]
    pub(crate) field: Option<String>,
    /// Reference date for the deadline rule (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let document = read_document(args.file.as_deref())?;
    let form: JobPostingForm = serde_json::from_value(document)?;

    let mut context = AdminContext::new();
    if !args.companies.is_empty() {
        context = context.with_accessible_companies(
            args.companies
                .iter()
                .map(|id| CompanyRef { id: id.clone() })
                .collect(),
        );
    }

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let errors = match args.field.as_deref() {
        Some(name) => {
            let field: JobField = name
                .parse()
                .map_err(|err: UnknownFieldError| AppError::Input(err.to_string()))?;
            validate_single_field_at(field, &form, &context, today)
        }
        None => validate_admin_job_form_at(&form, &context, today),
    };

    render_report(&errors);

    if errors.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn read_document(path: Option<&Path>) -> Result<Value, AppError> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let document = serde_json::from_str(&raw)?;
    Ok(document)
}

fn render_report(errors: &ValidationErrors) {
    let failing: Vec<_> = errors
        .iter()
        .filter(|(_, message)| !message.is_empty())
        .collect();

    if failing.is_empty() {
        println!("Form is valid.");
        return;
    }

    println!("Form failed validation ({} field(s)):", failing.len());
    for (field, message) in &failing {
        println!("  {:<22} {}", field.to_string(), message);
    }
    if let Some(first) = errors.first_error_field() {
        println!("First invalid field: {first}");
    }
}
