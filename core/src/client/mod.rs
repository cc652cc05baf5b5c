//! Endpoint wrappers for the Stellar Burgers API.
//!
//! # Design
//! One wrapper per resource, each owning an `ApiConfig` (base URL, content
//! type, log detail) and a `Transport`. Every operation comes in two halves:
//! a pure `build_*` method producing the `HttpRequest`, and an executing
//! method that sends it and hands back the raw `HttpResponse` whatever its
//! status. Status and body interpretation belong to the caller.

mod order;
mod user;

pub use order::OrderClient;
pub use user::UserClient;

use serde::Serialize;

use crate::auth::AccessToken;
use crate::error::ApiError;
use crate::http::HttpRequest;

fn json_body<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn authorized(request: HttpRequest, token: Option<&AccessToken>) -> HttpRequest {
    match token {
        Some(token) => request.with_header("authorization", token.authorization()),
        None => request,
    }
}
