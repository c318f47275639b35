//! Deal forecast and pipeline summaries.
//!
//! Monetary values are integer minor currency units (cents).

use serde::Serialize;

/// Forecast bucket for a single period (e.g. `2026-Q4`).
#[derive(Debug, Clone, Serialize)]
pub struct ForecastPeriod {
    pub period: String,
    pub value: i64,
    pub weighted_value: i64,
}

/// Revenue forecast across open deals.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Forecast {
    pub total_value: i64,
    pub weighted_value: i64,
    pub periods: Vec<ForecastPeriod>,
}

/// Deal count and value for one pipeline stage.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineStage {
    pub stage: String,
    pub count: u64,
    pub value: i64,
}

/// Deals grouped by pipeline stage.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Pipeline {
    pub stages: Vec<PipelineStage>,
    pub total_value: i64,
    pub total_deals: u64,
}
