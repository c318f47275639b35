pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use services::reporting::ReportingService;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub reporting: Arc<dyn ReportingService>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: config::AppConfig, reporting: Arc<dyn ReportingService>) -> Self {
        Self {
            config,
            reporting,
            started_at: Utc::now(),
        }
    }
}
