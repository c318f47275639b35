use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub frontend_url: Option<String>,
    pub reporting_service_url: Option<String>,
    pub reporting_timeout_secs: u64,
    pub static_dir: Option<PathBuf>,
    pub max_body_bytes: usize,
}

impl AppConfig {
    const DEFAULT_PORT: u16 = 3000;
    const DEFAULT_REPORTING_TIMEOUT_SECS: u64 = 10;
    const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

    pub fn from_env() -> Result<Self, env::VarError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Missing keys fall back to defaults; a value that is present but not
    /// valid unicode is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let optional = |key: &str| match lookup(key) {
            Ok(value) if value.trim().is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(e),
        };

        Ok(Self {
            host: optional("BACKEND_HOST")?.unwrap_or_else(|| "0.0.0.0".to_string()),
            port: optional("BACKEND_PORT")?
                .and_then(|v| v.parse().ok())
                .unwrap_or(Self::DEFAULT_PORT),
            frontend_url: optional("FRONTEND_URL")?,
            reporting_service_url: optional("REPORTING_SERVICE_URL")?
                .map(|url| url.trim_end_matches('/').to_string()),
            reporting_timeout_secs: optional("REPORTING_TIMEOUT_SECS")?
                .and_then(|v| v.parse().ok())
                .unwrap_or(Self::DEFAULT_REPORTING_TIMEOUT_SECS),
            static_dir: optional("STATIC_DIR")?.map(PathBuf::from),
            max_body_bytes: optional("MAX_BODY_BYTES")?
                .and_then(|v| v.parse().ok())
                .unwrap_or(Self::DEFAULT_MAX_BODY_BYTES),
        })
    }
}
