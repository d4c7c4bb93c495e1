//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{classify_period, compute_pay_summary, summarize};
use crate::error::EngineResult;

use super::request::{PayrollInput, PayrollRequest};
use super::response::{ApiError, ApiErrorResponse, PayrollBreakdown};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .route("/payroll/breakdown", post(breakdown_handler))
        .with_state(state)
}

/// Handler for POST /payroll.
///
/// Accepts a payroll request and returns the period pay summary.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        calendar = state.calendar_code(),
        "Processing payroll request"
    );

    let input = match parse_input(correlation_id, payload) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let calendar = input.calendar(state.calendar());
    let start_time = Instant::now();
    let result = compute_pay_summary(&input.employee, &input.period, &input.records, &calendar);

    respond(correlation_id, start_time, &input, result, |summary| {
        info!(
            correlation_id = %correlation_id,
            gross_pay = %summary.gross_pay,
            net_pay = %summary.net_pay,
            "Payroll computed"
        );
    })
}

/// Handler for POST /payroll/breakdown.
///
/// Same input as `/payroll`; the response also carries every classified day.
async fn breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        calendar = state.calendar_code(),
        "Processing breakdown request"
    );

    let input = match parse_input(correlation_id, payload) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let calendar = input.calendar(state.calendar());
    let start_time = Instant::now();
    let result = classify_period(&input.employee, &input.period, &input.records, &calendar)
        .map(|attendance| PayrollBreakdown {
            summary: summarize(&attendance),
            days: attendance.days,
        });

    respond(correlation_id, start_time, &input, result, |breakdown| {
        info!(
            correlation_id = %correlation_id,
            days = breakdown.days.len(),
            gross_pay = %breakdown.summary.gross_pay,
            "Breakdown computed"
        );
    })
}

/// Extracts the request body and converts it to domain input.
fn parse_input(
    correlation_id: Uuid,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Result<PayrollInput, Response> {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // serde's message lives in the body text
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
            return Err(json_response(StatusCode::BAD_REQUEST, error));
        }
    };

    PayrollInput::try_from(request).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Request rejected"
        );
        let api_error: ApiErrorResponse = err.into();
        json_response(api_error.status, api_error.error)
    })
}

/// Turns an engine result into a response, logging the outcome.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    start_time: Instant,
    input: &PayrollInput,
    result: EngineResult<T>,
    on_success: impl FnOnce(&T),
) -> Response {
    match result {
        Ok(body) => {
            on_success(&body);
            info!(
                correlation_id = %correlation_id,
                employee_id = %input.employee.id,
                records_count = input.records.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, body)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
