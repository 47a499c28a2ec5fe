//! AWS Lambda handler for generating amortization schedules
//!
//! Accepts the raw loan form fields as JSON and returns the schedule, its
//! summary and chart-ready series. Validation failures are reported in the
//! `error` field rather than failing the invocation.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::warn;
use serde::{Deserialize, Serialize};

use loan_amortization::report::ChartData;
use loan_amortization::schedule::{ScheduleSummary, DEFAULT_MAX_PERIODS};
use loan_amortization::{LoanForm, Period, ScheduleConfig, ScheduleGenerator};

/// Input for one schedule calculation
#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    /// Raw loan form fields
    #[serde(flatten)]
    pub form: LoanForm,

    /// Period cap (default: 100000)
    #[serde(default = "default_max_periods")]
    pub max_periods: u32,
}

fn default_max_periods() -> u32 { DEFAULT_MAX_PERIODS }

/// Output of a schedule calculation
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ScheduleSummary>,
    pub periods: Vec<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartData>,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScheduleResponse {
    fn failed(message: String, execution_time_ms: u64) -> Self {
        Self {
            period_rate: None,
            summary: None,
            periods: Vec::new(),
            chart: None,
            execution_time_ms,
            error: Some(message),
        }
    }
}

fn build_response(request: &ScheduleRequest) -> ScheduleResponse {
    let start = std::time::Instant::now();
    let elapsed_ms = || start.elapsed().as_millis() as u64;

    let loan = match request.form.parse() {
        Ok(loan) => loan,
        Err(e) => {
            warn!("Rejected loan form: {}", e);
            return ScheduleResponse::failed(e.to_string(), elapsed_ms());
        }
    };

    let generator = ScheduleGenerator::new(ScheduleConfig {
        max_periods: request.max_periods,
    });
    match generator.generate(&loan) {
        Ok(schedule) => ScheduleResponse {
            period_rate: Some(schedule.period_rate),
            summary: Some(schedule.summary()),
            chart: Some(schedule.chart_data()),
            periods: schedule.periods,
            execution_time_ms: elapsed_ms(),
            error: None,
        },
        Err(e) => ScheduleResponse::failed(e.user_message().to_string(), elapsed_ms()),
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<ScheduleRequest>) -> Result<ScheduleResponse, Error> {
    Ok(build_response(&event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
