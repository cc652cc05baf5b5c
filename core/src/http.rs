//! HTTP transport types.
//!
//! # Design
//! Requests and responses are plain data. The endpoint wrappers build
//! `HttpRequest` values without touching the network and hand them to a
//! `Transport`, which returns the raw `HttpResponse`. Keeping the two halves
//! apart lets every request shape be unit tested without a server.
//!
//! All fields use owned types (`String`, `Vec`) so values can be logged,
//! cloned into fakes and compared in tests without lifetime concerns.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built by `ApiConfig::request` and the `build_*` methods of the endpoint
/// wrappers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Append a header, keeping any already present.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response described as plain data.
///
/// Returned untouched by the wrappers whatever the status: asserting on it is
/// the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Decode the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Look up a dotted path such as `order.number` or `orders.0.number` in
    /// the JSON body.
    ///
    /// Returns `None` when the body is not JSON, a segment is missing, or the
    /// value found is `null`, so "field absent" and "field null" read the
    /// same way in assertions.
    pub fn path(&self, path: &str) -> Option<Value> {
        let root: Value = serde_json::from_str(&self.body).ok()?;
        let mut current = &root;
        for segment in path.split('.') {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        if current.is_null() {
            None
        } else {
            Some(current.clone())
        }
    }

    /// `path` narrowed to a string value.
    pub fn path_str(&self, path: &str) -> Option<String> {
        match self.path(path)? {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// `path` narrowed to a boolean value.
    pub fn path_bool(&self, path: &str) -> Option<bool> {
        self.path(path)?.as_bool()
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}
