//! HTTP request handlers for the attrition engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::FilterSelection;

use super::request::MetricsRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/filters", get(filters_handler))
        .route("/metrics", post(metrics_handler))
        .with_state(state)
}

/// Handler for GET /filters.
///
/// Returns the values available to each filter control.
async fn filters_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(state.filter_options().clone()),
    )
}

/// Handler for POST /metrics.
///
/// Accepts a filter selection and returns the full metrics result.
async fn metrics_handler(
    State(state): State<AppState>,
    payload: Result<Json<MetricsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing metrics request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::validation_error(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let selection: FilterSelection = request.into();
    let start_time = Instant::now();
    let result = state
        .engine()
        .compute_selection(state.dataset(), &selection);

    info!(
        correlation_id = %correlation_id,
        total = result.kpis.total,
        terminated = result.kpis.terminated,
        attrition_rate = %result.kpi_display.attrition_rate,
        duration_us = start_time.elapsed().as_micros(),
        "Metrics computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    use crate::engine::AttritionEngine;
    use crate::models::{Dataset, EmployeeRecord};

    fn create_test_state() -> AppState {
        let dataset = Dataset::new(vec![
            EmployeeRecord::new("1", "A", "Sales", "F", Decimal::new(50000, 0)),
            EmployeeRecord::new("2", "B", "Sales", "M", Decimal::new(52000, 0))
                .terminated("Voluntarily Terminated", NaiveDate::from_ymd_opt(2015, 3, 1)),
            EmployeeRecord::new("3", "C", "IT/IS", "F", Decimal::new(70000, 0))
                .terminated("Terminated for Cause", NaiveDate::from_ymd_opt(2016, 8, 9)),
        ])
        .unwrap();
        AppState::new(dataset, AttritionEngine::default())
    }

    async fn post_metrics(body: &str) -> (StatusCode, serde_json::Value) {
        let app = create_router(create_test_state());
        let request = Request::builder()
            .method("POST")
            .uri("/metrics")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_metrics_endpoint_unfiltered() {
        let (status, json) = post_metrics("{}").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["kpis"]["total"], 3);
        assert_eq!(json["kpis"]["terminated"], 2);
        assert_eq!(json["kpi_display"]["attrition_rate"], "66.7%");
    }

    #[tokio::test]
    async fn test_metrics_endpoint_with_filters() {
        let (status, json) = post_metrics(r#"{"departments": ["Sales"], "year_range": [2015, 2015]}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["kpis"]["total"], 2);
        assert_eq!(json["kpis"]["terminated"], 1);
    }

    #[tokio::test]
    async fn test_metrics_endpoint_malformed_json() {
        let (status, json) = post_metrics("{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_metrics_endpoint_wrong_field_type() {
        let (status, json) = post_metrics(r#"{"departments": "Sales"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_metrics_endpoint_missing_content_type() {
        let app = create_router(create_test_state());
        let request = Request::builder()
            .method("POST")
            .uri("/metrics")
            .body(Body::from("{}"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_filters_endpoint() {
        let app = create_router(create_test_state());
        let request = Request::builder()
            .method("GET")
            .uri("/filters")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["departments"], serde_json::json!(["IT/IS", "Sales"]));
        assert_eq!(json["min_year"], 2015);
        assert_eq!(json["max_year"], 2016);
    }
}
