//! Reporting collaborator: the hosted service that owns dashboard aggregation.
//!
//! Handlers only see the [`ReportingService`] trait. The production
//! implementation talks to the upstream over HTTP; when no upstream is
//! configured every call fails, which the dashboard route turns into a 500.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::AppConfig;

/// Failure talking to the reporting collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("reporting service is not configured")]
    NotConfigured,

    #[error("reporting service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("reporting service returned {status}")]
    UpstreamStatus { status: u16 },
}

/// Source of aggregated dashboard data.
#[async_trait]
pub trait ReportingService: Send + Sync + std::fmt::Debug {
    /// Fetch the dashboard payload. The value is passed to clients untouched.
    async fn dashboard_data(&self) -> Result<Value, ServiceError>;
}

/// HTTP client for an upstream reporting API exposing `GET /dashboard`.
#[derive(Debug, Clone)]
pub struct HttpReportingService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpReportingService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn dashboard_url(&self) -> String {
        format!("{}/dashboard", self.base_url)
    }
}

#[async_trait]
impl ReportingService for HttpReportingService {
    async fn dashboard_data(&self) -> Result<Value, ServiceError> {
        let url = self.dashboard_url();
        tracing::debug!(url = %url, "Fetching dashboard data");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

/// Stand-in used when `REPORTING_SERVICE_URL` is not set.
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredReportingService;

#[async_trait]
impl ReportingService for UnconfiguredReportingService {
    async fn dashboard_data(&self) -> Result<Value, ServiceError> {
        Err(ServiceError::NotConfigured)
    }
}

/// Pick the reporting implementation matching the configuration.
pub fn from_config(config: &AppConfig) -> Result<Box<dyn ReportingService>, ServiceError> {
    match &config.reporting_service_url {
        Some(url) => {
            let timeout = Duration::from_secs(config.reporting_timeout_secs);
            tracing::info!(
                url = %url,
                timeout_secs = config.reporting_timeout_secs,
                "Using HTTP reporting service"
            );
            Ok(Box::new(HttpReportingService::new(url.clone(), timeout)?))
        }
        None => {
            tracing::warn!("REPORTING_SERVICE_URL not set; dashboard requests will fail");
            Ok(Box::new(UnconfiguredReportingService))
        }
    }
}
