//! Access tokens handed out by `auth/register` and `auth/login`.
//!
//! The service returns tokens with the scheme already attached
//! (`"Bearer eyJhbGciOi..."`). That string cannot be fed back as a credential
//! as-is, so `AccessToken::parse` strips the marker once, by name, and the
//! wrappers put it back when they build the `Authorization` header.
//!
//! This ties the client to the server's token format: if the service ever
//! returns bare credentials or another scheme, `parse` fails loudly with
//! `ApiError::MalformedToken` instead of silently chopping characters.

use std::fmt;

use crate::error::ApiError;
use crate::http::HttpResponse;

/// Scheme marker the service prefixes to every access token.
pub const BEARER_SCHEME: &str = "Bearer";

/// JSON field carrying the token in register and login responses.
pub const ACCESS_TOKEN_FIELD: &str = "accessToken";

/// A bare bearer credential, scheme marker removed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Strip the `Bearer ` scheme from a token as returned by the service.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let credential = raw
            .strip_prefix(BEARER_SCHEME)
            .and_then(|rest| rest.strip_prefix(' '))
            .map(str::trim)
            .ok_or_else(|| ApiError::MalformedToken(format!("missing `{BEARER_SCHEME} ` scheme")))?;
        if credential.is_empty() {
            return Err(ApiError::MalformedToken("empty credential".to_string()));
        }
        Ok(Self(credential.to_string()))
    }

    /// Wrap a credential that has no scheme marker.
    pub fn from_credential(credential: impl Into<String>) -> Self {
        Self(credential.into())
    }

    /// Pull the token out of a register or login response.
    ///
    /// `None` when the response carries no token (failed registration, error
    /// body, non-JSON body) or the token is malformed.
    pub fn from_response(response: &HttpResponse) -> Option<Self> {
        let raw = response.path_str(ACCESS_TOKEN_FIELD)?;
        Self::parse(&raw).ok()
    }

    pub fn credential(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("{BEARER_SCHEME} {}", self.0)
    }
}

// Tokens end up in log output; keep them out of it.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}
