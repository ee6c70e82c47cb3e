use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use techhub::jobs::postings::job_validation_router;

/// Validation endpoints plus the service plumbing routes.
pub(crate) fn with_service_routes() -> axum::Router {
    job_validation_router()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn read_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let router = with_service_routes();

        let response = router
            .oneshot(
                axum::http::Request::get("/health")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload.get("status"), Some(&json!("ok")));
    }

    #[tokio::test]
    async fn validate_endpoint_flags_missing_application_url() {
        let router = with_service_routes();
        let request_body = json!({
            "form": {
                "applicationMethods": ["external_url"],
                "applicationUrl": ""
            }
        });

        let response = router
            .oneshot(
                axum::http::Request::post("/api/v1/admin/jobs/validate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(request_body.to_string()))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload.get("valid"), Some(&json!(false)));
        let url_error = payload
            .get("errors")
            .and_then(|errors| errors.get("applicationUrl"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        assert!(!url_error.is_empty());
    }

    #[tokio::test]
    async fn field_endpoint_validates_one_field() {
        let router = with_service_routes();
        let request_body = json!({
            "field": "title",
            "form": { "title": "  " }
        });

        let response = router
            .oneshot(
                axum::http::Request::post("/api/v1/admin/jobs/validate/field")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(request_body.to_string()))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(
            payload
                .get("errors")
                .and_then(|errors| errors.get("title")),
            Some(&json!("Job title is required"))
        );
        assert_eq!(payload.get("firstErrorField"), Some(&json!("title")));
    }

    #[tokio::test]
    async fn field_endpoint_rejects_unknown_field_names() {
        let router = with_service_routes();
        let request_body = json!({
            "field": "salary_band",
            "form": {}
        });

        let response = router
            .oneshot(
                axum::http::Request::post("/api/v1/admin/jobs/validate/field")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(request_body.to_string()))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert!(response.status().is_client_error());
    }
}
