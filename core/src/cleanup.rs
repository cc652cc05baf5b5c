//! Teardown for accounts created during a scenario.
//!
//! `AccountCleanup` holds on to the access token of every user a scenario
//! registers and deletes those accounts when it goes out of scope, whether the
//! scenario passed, failed an assertion, or panicked. Registrations that never
//! produced a token are simply not tracked: nothing to delete, nothing to
//! retry. Deletion is best-effort; a failure is logged and otherwise ignored.

use tracing::{debug, warn};

use crate::auth::AccessToken;
use crate::client::UserClient;
use crate::http::HttpResponse;
use crate::transport::{Transport, UreqTransport};

pub struct AccountCleanup<'a, T: Transport = UreqTransport> {
    client: &'a UserClient<T>,
    tokens: Vec<AccessToken>,
}

impl<'a, T: Transport> AccountCleanup<'a, T> {
    pub fn new(client: &'a UserClient<T>) -> Self {
        Self {
            client,
            tokens: Vec::new(),
        }
    }

    pub fn track(&mut self, token: AccessToken) {
        self.tokens.push(token);
    }

    /// Track the token carried by a register or login response, if any, and
    /// return a copy of it.
    pub fn track_response(&mut self, response: &HttpResponse) -> Option<AccessToken> {
        let token = AccessToken::from_response(response)?;
        self.tokens.push(token.clone());
        Some(token)
    }

    /// Stop tracking a token, e.g. after the scenario deleted the account
    /// itself.
    pub fn forget(&mut self, token: &AccessToken) {
        self.tokens.retain(|tracked| tracked != token);
    }

    pub fn tracked(&self) -> usize {
        self.tokens.len()
    }
}

impl<T: Transport> Drop for AccountCleanup<'_, T> {
    fn drop(&mut self) {
        for token in self.tokens.drain(..) {
            match self.client.delete_user(&token) {
                Ok(response) if response.is_success() => {
                    debug!(status = response.status, "deleted test account");
                }
                Ok(response) => {
                    warn!(status = response.status, body = %response.body, "test account deletion rejected");
                }
                Err(e) => warn!(error = %e, "test account deletion failed"),
            }
        }
    }
}
