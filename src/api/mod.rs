//! HTTP API module for the payroll engine.
//!
//! A thin adapter over the pure engine: `POST /payroll` returns the period
//! summary and `POST /payroll/breakdown` adds the per-day classification.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceRequest, EmployeeRequest, HolidayRequest, MAX_PERIOD_DAYS, PayrollInput,
    PayrollRequest, PeriodRequest,
};
pub use response::{ApiError, PayrollBreakdown};
pub use state::AppState;
