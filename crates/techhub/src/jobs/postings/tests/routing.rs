use serde_json::{json, Value};
use tower::ServiceExt;

use crate::jobs::postings::router::job_validation_router;

async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

async fn post_json(path: &str, body: Value) -> axum::response::Response {
    job_validation_router()
        .oneshot(
            axum::http::Request::post(path)
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .expect("route executes")
}

#[tokio::test]
async fn a_valid_form_yields_an_empty_report() {
    let response = post_json(
        "/api/v1/admin/jobs/validate",
        json!({
            "form": {
                "title": "Senior Backend Engineer",
                "description": "Own the posting pipeline end to end, from intake validation \
                                to the publishing workers, and keep listings trustworthy.",
                "category": "Engineering",
                "companyId": "acme-01",
                "applicationMethods": ["internal"],
                "skills": [{ "name": "Rust" }]
            },
            "accessibleCompanies": [{ "id": "acme-01" }]
        }),
    )
    .await;

    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("valid"), Some(&json!(true)));
    assert_eq!(payload.get("errors"), Some(&json!({})));
    assert_eq!(payload.get("firstErrorField"), Some(&json!(null)));
}

#[tokio::test]
async fn company_access_is_checked_against_the_supplied_list() {
    let response = post_json(
        "/api/v1/admin/jobs/validate",
        json!({
            "form": { "companyId": "initech-09" },
            "accessibleCompanies": [{ "id": "acme-01" }]
        }),
    )
    .await;

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("valid"), Some(&json!(false)));
    assert_eq!(
        payload.get("errors").and_then(|errors| errors.get("companyId")),
        Some(&json!("Selected company is not in your accessible companies list"))
    );
}

#[tokio::test]
async fn the_field_endpoint_reports_a_single_rule_family() {
    let response = post_json(
        "/api/v1/admin/jobs/validate/field",
        json!({ "field": "skills", "form": {} }),
    )
    .await;

    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("errors").and_then(|errors| errors.get("skills")),
        Some(&json!("Skills must be an array"))
    );
    assert_eq!(payload.get("firstErrorField"), Some(&json!("skills")));
}
