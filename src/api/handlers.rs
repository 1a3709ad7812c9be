//! HTTP request handlers for the Payroll Computation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::HashMap;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    PayrollContext, PayrollOutcome, PayrollQuery, aggregate_time_entries, run_payroll_query,
};
use crate::models::{DeMinimisBenefits, TimeEntry};

use super::request::{PayrollReportRequest, PeriodSummariesRequest, employees_by_id};
use super::response::{ApiError, ApiErrorResponse, PeriodSummariesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/report", post(report_handler))
        .route("/payroll/summaries", post(summaries_handler))
        .with_state(state)
}

/// Handler for POST /payroll/report.
///
/// Runs one payroll query and returns the report with amounts truncated to
/// two decimal places.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let employees = employees_by_id(request.employees);
    let benefits: HashMap<String, DeMinimisBenefits> =
        request.benefits.into_iter().map(Into::into).collect();
    let entries: Vec<TimeEntry> = request.time_entries.into_iter().map(Into::into).collect();
    let query: PayrollQuery = request.query.into();

    let config = state.config();
    let ctx = PayrollContext {
        employees: &employees,
        benefits: &benefits,
        calendar: config.holidays(),
        rules: config.rules(),
    };

    let start_time = Instant::now();
    match run_payroll_query(&ctx, &entries, &query) {
        Ok(PayrollOutcome::Found(report)) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %query.employee_id,
                entries_count = entries.len(),
                net_pay = %report.net_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll report completed successfully"
            );
            json_response(StatusCode::OK, &report.presented())
        }
        Ok(PayrollOutcome::NotFound(reason)) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %query.employee_id,
                reason = %reason,
                "Payroll report found nothing"
            );
            error_response(ApiErrorResponse::not_found(reason, &query.employee_id))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll report failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /payroll/summaries.
///
/// Validates every employee, then aggregates every time entry and returns all
/// period summaries in key order.
async fn summaries_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodSummariesRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing period summaries request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let employees = employees_by_id(request.employees);
    if let Some(err) = employees.values().find_map(|employee| employee.validate().err()) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Period summaries rejected"
        );
        return error_response(err.into());
    }
    let entries: Vec<TimeEntry> = request.time_entries.into_iter().map(Into::into).collect();

    let config = state.config();
    let summaries = aggregate_time_entries(
        &employees,
        &entries,
        config.holidays(),
        config.rules(),
        request.period_mode,
    );

    info!(
        correlation_id = %correlation_id,
        entries_count = entries.len(),
        summaries_count = summaries.len(),
        "Period summaries completed successfully"
    );

    json_response(
        StatusCode::OK,
        &PeriodSummariesResponse {
            summaries: summaries.into_values().collect(),
        },
    )
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
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

    error_response(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    })
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, &api_error.error)
}
