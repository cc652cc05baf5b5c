//! Executes `HttpRequest` values against the network.
//!
//! # Design
//! `Transport` is the only seam between request building and I/O. The
//! production implementation wraps a blocking `ureq` agent configured so that
//! 4xx/5xx responses come back as data rather than `Err`: the suite asserts
//! on error statuses, it never wants them turned into failures. Only a
//! request that produced no response at all surfaces as `ApiError`.
//!
//! Every exchange is logged through `tracing` at the configured `LogDetail`.

use tracing::{debug, info, warn};

use crate::config::{ApiConfig, LogDetail};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Something that can turn an `HttpRequest` into an `HttpResponse`.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by `ureq`, no retries, library-default timeouts.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    log_detail: LogDetail,
}

impl UreqTransport {
    pub fn new(config: &ApiConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            log_detail: config.log_detail(),
        }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        log_request(&request, self.log_detail);

        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let result = match method {
            HttpMethod::Get => with_headers(self.agent.get(&url), &headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&url), &headers).call(),
            HttpMethod::Post => {
                let builder = with_headers(self.agent.post(&url), &headers);
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
            HttpMethod::Patch => {
                let builder = with_headers(self.agent.patch(&url), &headers);
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.inspect_err(|e| warn!(%method, %url, error = %e, "request failed"))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        let response = HttpResponse {
            status,
            headers,
            body,
        };
        log_response(&method, &url, &response, self.log_detail);
        Ok(response)
    }
}

fn with_headers<B>(
    builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    headers
        .iter()
        .fold(builder, |builder, (name, value)| builder.header(name.as_str(), value.as_str()))
}

fn log_request(request: &HttpRequest, detail: LogDetail) {
    if !detail.logs_exchange() {
        return;
    }
    info!(method = %request.method, url = %request.url, "sending request");
    debug!(headers = ?redacted(&request.headers), "request headers");
    if detail.logs_bodies() {
        if let Some(body) = &request.body {
            debug!(%body, "request body");
        }
    }
}

fn log_response(method: &HttpMethod, url: &str, response: &HttpResponse, detail: LogDetail) {
    if !detail.logs_exchange() {
        return;
    }
    info!(%method, %url, status = response.status, "received response");
    debug!(headers = ?response.headers, "response headers");
    if detail.logs_bodies() {
        debug!(body = %response.body, "response body");
    }
}

fn redacted(headers: &[(String, String)]) -> Vec<(&str, &str)> {
    headers
        .iter()
        .map(|(name, value)| {
            if name.eq_ignore_ascii_case("authorization") {
                (name.as_str(), "***")
            } else {
                (name.as_str(), value.as_str())
            }
        })
        .collect()
}
