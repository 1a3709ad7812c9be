//! HTTP API module for the Payroll Computation Engine.
//!
//! This module provides the REST API endpoints for computing payroll reports
//! and period summaries from posted employee and attendance data.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BenefitEntitlementRequest, EmployeeRequest, PayrollReportRequest, PeriodSummariesRequest,
    QueryRequest, TimeEntryRequest,
};
pub use response::{ApiError, PeriodSummariesResponse};
pub use state::AppState;
