use super::common::*;
use crate::jobs::postings::domain::{AdminContext, JobField, JobPostingForm};
use crate::jobs::postings::validation::{validate_admin_field, validate_email, validate_url};

#[test]
fn url_predicate_accepts_http_and_https_only() {
    assert!(validate_url("https://x.io"));
    assert!(validate_url("http://example.com/careers?ref=board"));
    assert!(validate_url("  https://example.com  "));
    assert!(!validate_url("ftp://x.io"));
    assert!(!validate_url("not a url"));
    assert!(!validate_url("x.io"));
    assert!(!validate_url(""));
}

#[test]
fn email_predicate_requires_a_local_domain_and_tld() {
    assert!(validate_email("a@b.co"));
    assert!(validate_email(" jobs@acme.example "));
    assert!(!validate_email("a@b"));
    assert!(!validate_email("a b@c.com"));
    assert!(!validate_email("@c.com"));
    assert!(!validate_email(""));
}

#[test]
fn company_selection_is_required() {
    let context = admin_context();
    for company_id in [None, Some("  ".to_string())] {
        let form = JobPostingForm {
            company_id,
            ..valid_form()
        };
        let errors = validate_admin_field(JobField::CompanyId, &form, &context);
        assert_eq!(
            message_for(&errors, JobField::CompanyId),
            "Company selection is required for admin job posting"
        );
    }
}

#[test]
fn access_predicate_denials_win_over_the_company_list() {
    let context = admin_context().with_access_check(|_| false);
    let form = valid_form();
    let errors = validate_admin_field(JobField::CompanyId, &form, &context);
    assert_eq!(
        message_for(&errors, JobField::CompanyId),
        "You do not have access to the selected company"
    );
}

#[test]
fn unlisted_companies_are_rejected() {
    let context = admin_context();
    let form = JobPostingForm {
        company_id: Some("initech-09".to_string()),
        ..valid_form()
    };
    let errors = validate_admin_field(JobField::CompanyId, &form, &context);
    assert_eq!(
        message_for(&errors, JobField::CompanyId),
        "Selected company is not in your accessible companies list"
    );
}

#[test]
fn without_a_context_any_company_passes() {
    let form = JobPostingForm {
        company_id: Some("anything".to_string()),
        ..valid_form()
    };
    let errors = validate_admin_field(JobField::CompanyId, &form, &AdminContext::new());
    assert!(errors.is_empty());
}

#[test]
fn at_least_one_application_method_is_required() {
    let context = admin_context();
    for application_methods in [None, Some(Vec::new())] {
        let form = JobPostingForm {
            application_methods,
            ..valid_form()
        };
        let errors = validate_admin_field(JobField::ApplicationMethods, &form, &context);
        assert_eq!(
            message_for(&errors, JobField::ApplicationMethods),
            "At least one application method must be selected"
        );
    }
}

#[test]
fn unrecognized_methods_are_listed_in_the_message() {
    let form = JobPostingForm {
        application_methods: Some(vec![
            "internal".to_string(),
            "fax".to_string(),
            "pigeon".to_string(),
        ]),
        ..valid_form()
    };
    let errors = validate_admin_field(JobField::ApplicationMethods, &form, &admin_context());
    assert_eq!(
        message_for(&errors, JobField::ApplicationMethods),
        "Invalid application methods: fax, pigeon"
    );
}

#[test]
fn recognized_method_sets_pass() {
    let form = JobPostingForm {
        application_methods: Some(vec![
            "internal".to_string(),
            "external_url".to_string(),
            "email".to_string(),
        ]),
        application_url: Some("https://acme.example/careers".to_string()),
        application_email: Some("jobs@acme.example".to_string()),
        ..valid_form()
    };
    let errors = validate_admin_field(JobField::ApplicationMethods, &form, &admin_context());
    assert!(errors.is_empty());
}

#[test]
fn application_url_is_only_checked_when_the_method_is_selected() {
    let context = admin_context();

    let form = JobPostingForm {
        application_methods: Some(vec!["internal".to_string()]),
        application_url: Some("not a url".to_string()),
        ..valid_form()
    };
    assert!(validate_admin_field(JobField::ApplicationUrl, &form, &context).is_empty());

    let form = JobPostingForm {
        application_methods: Some(vec!["external_url".to_string()]),
        application_url: None,
        ..valid_form()
    };
    assert_eq!(
        message_for(
            &validate_admin_field(JobField::ApplicationUrl, &form, &context),
            JobField::ApplicationUrl
        ),
        "Application URL is required when external website method is selected"
    );

    let form = JobPostingForm {
        application_methods: Some(vec!["external_url".to_string()]),
        application_url: Some("ftp://acme.example".to_string()),
        ..valid_form()
    };
    assert_eq!(
        message_for(
            &validate_admin_field(JobField::ApplicationUrl, &form, &context),
            JobField::ApplicationUrl
        ),
        "Please enter a valid URL (e.g., https://example.com)"
    );

    let form = JobPostingForm {
        application_methods: Some(vec!["external_url".to_string()]),
        application_url: Some("https://acme.example/careers".to_string()),
        ..valid_form()
    };
    assert!(validate_admin_field(JobField::ApplicationUrl, &form, &context).is_empty());
}

#[test]
fn application_email_is_only_checked_when_the_method_is_selected() {
    let context = admin_context();

    let form = JobPostingForm {
        application_methods: Some(vec!["internal".to_string()]),
        application_email: Some("nonsense".to_string()),
        ..valid_form()
    };
    assert!(validate_admin_field(JobField::ApplicationEmail, &form, &context).is_empty());

    let form = JobPostingForm {
        application_methods: Some(vec!["email".to_string()]),
        application_email: None,
        ..valid_form()
    };
    assert_eq!(
        message_for(
            &validate_admin_field(JobField::ApplicationEmail, &form, &context),
            JobField::ApplicationEmail
        ),
        "Application email is required when email method is selected"
    );

    let form = JobPostingForm {
        application_methods: Some(vec!["email".to_string()]),
        application_email: Some("not-an-email".to_string()),
        ..valid_form()
    };
    assert_eq!(
        message_for(
            &validate_admin_field(JobField::ApplicationEmail, &form, &context),
            JobField::ApplicationEmail
        ),
        "Please enter a valid email address"
    );
}

#[test]
fn admin_dispatch_ignores_standard_fields() {
    let form = JobPostingForm {
        title: None,
        ..valid_form()
    };
    assert!(validate_admin_field(JobField::Title, &form, &admin_context()).is_empty());
}
