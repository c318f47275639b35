use serde::Serialize;
use serde_json::Value;

/// Rows produced by a report run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportResult {
    pub rows: Vec<Value>,
    pub total: u64,
}
