//! Base request configuration shared by every endpoint wrapper.
//!
//! `ApiConfig` is the single place that knows the service's base URL, the
//! JSON content type, and how much of each exchange gets logged. Wrappers own
//! a copy and call `request` to seed every outgoing `HttpRequest`.

use std::str::FromStr;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

/// Base URL of the live Stellar Burgers API.
pub const DEFAULT_BASE_URL: &str = "https://stellarburgers.nomoreparties.site/api/";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "BURGERS_BASE_URL";

/// Environment variable overriding the log detail (`off`, `headers`, `all`).
pub const LOG_DETAIL_ENV: &str = "BURGERS_LOG_DETAIL";

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// How much of each request/response pair the transport logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogDetail {
    /// Nothing beyond transport failures.
    Off,
    /// Method, URL, status and headers.
    Headers,
    /// Everything, bodies included.
    #[default]
    All,
}

impl LogDetail {
    pub fn logs_exchange(&self) -> bool {
        !matches!(self, LogDetail::Off)
    }

    pub fn logs_bodies(&self) -> bool {
        matches!(self, LogDetail::All)
    }
}

impl FromStr for LogDetail {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(LogDetail::Off),
            "headers" => Ok(LogDetail::Headers),
            "all" => Ok(LogDetail::All),
            other => Err(ApiError::InvalidConfig(format!(
                "{LOG_DETAIL_ENV} must be one of off, headers, all; got `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    content_type: String,
    log_detail: LogDetail,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            content_type: JSON_CONTENT_TYPE.to_string(),
            log_detail: LogDetail::default(),
        }
    }

    /// Configuration from `BURGERS_BASE_URL` and `BURGERS_LOG_DETAIL`, falling
    /// back to the live service with full logging.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_env_or(DEFAULT_BASE_URL)
    }

    /// As `from_env`, with `base_url` used when `BURGERS_BASE_URL` is unset.
    pub fn from_env_or(base_url: &str) -> Result<Self, ApiError> {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| base_url.to_string());
        let mut config = Self::new(&base_url);
        if let Ok(detail) = std::env::var(LOG_DETAIL_ENV) {
            config.log_detail = detail.parse()?;
        }
        Ok(config)
    }

    pub fn with_log_detail(mut self, log_detail: LogDetail) -> Self {
        self.log_detail = log_detail;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn log_detail(&self) -> LogDetail {
        self.log_detail
    }

    /// Absolute URL for an endpoint path such as `auth/register`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Seed a request for `path` carrying the default content type.
    pub fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: self.url(path),
            headers: vec![("content-type".to_string(), self.content_type.clone())],
            body: None,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
