//! Outcome of a bulk operation over leads, deals, or activities.

use serde::Serialize;

/// Summary returned by every bulk endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkResult {
    pub processed: u64,
    pub errors: Vec<String>,
}

impl BulkResult {
    /// Nothing processed, nothing failed.
    pub fn empty() -> Self {
        Self::default()
    }
}
