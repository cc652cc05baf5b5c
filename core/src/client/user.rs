use crate::auth::AccessToken;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::model::User;
use crate::transport::{Transport, UreqTransport};

use super::{authorized, json_body};

pub const REGISTER_ENDPOINT: &str = "auth/register";
pub const LOGIN_ENDPOINT: &str = "auth/login";
pub const USER_ENDPOINT: &str = "auth/user";

/// Registration, login, profile and account deletion.
#[derive(Debug, Clone)]
pub struct UserClient<T = UreqTransport> {
    config: ApiConfig,
    transport: T,
}

impl UserClient {
    pub fn new(config: ApiConfig) -> Self {
        let transport = UreqTransport::new(&config);
        Self { config, transport }
    }
}

impl<T: Transport> UserClient<T> {
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_create_user(&self, user: &User) -> Result<HttpRequest, ApiError> {
        Ok(self
            .config
            .request(HttpMethod::Post, REGISTER_ENDPOINT)
            .with_body(json_body(user)?))
    }

    pub fn build_login_user(&self, user: &User) -> Result<HttpRequest, ApiError> {
        Ok(self
            .config
            .request(HttpMethod::Post, LOGIN_ENDPOINT)
            .with_body(json_body(&user.credentials())?))
    }

    pub fn build_get_user(&self, token: &AccessToken) -> HttpRequest {
        authorized(self.config.request(HttpMethod::Get, USER_ENDPOINT), Some(token))
    }

    /// PATCH `auth/user`; `None` builds the unauthenticated variant.
    pub fn build_update_user(
        &self,
        token: Option<&AccessToken>,
        user: &User,
    ) -> Result<HttpRequest, ApiError> {
        let request = self
            .config
            .request(HttpMethod::Patch, USER_ENDPOINT)
            .with_body(json_body(user)?);
        Ok(authorized(request, token))
    }

    pub fn build_delete_user(&self, token: &AccessToken) -> HttpRequest {
        authorized(self.config.request(HttpMethod::Delete, USER_ENDPOINT), Some(token))
    }

    #[tracing::instrument(name = "Create new user", skip_all)]
    pub fn create_user(&self, user: &User) -> Result<HttpResponse, ApiError> {
        self.transport.execute(self.build_create_user(user)?)
    }

    #[tracing::instrument(name = "Log in user", skip_all)]
    pub fn login_user(&self, user: &User) -> Result<HttpResponse, ApiError> {
        self.transport.execute(self.build_login_user(user)?)
    }

    #[tracing::instrument(name = "Fetch user profile", skip_all)]
    pub fn get_user(&self, token: &AccessToken) -> Result<HttpResponse, ApiError> {
        self.transport.execute(self.build_get_user(token))
    }

    #[tracing::instrument(name = "Update user data", skip_all)]
    pub fn update_user(&self, token: &AccessToken, user: &User) -> Result<HttpResponse, ApiError> {
        self.transport.execute(self.build_update_user(Some(token), user)?)
    }

    /// Same PATCH as `update_user` with no `Authorization` header.
    #[tracing::instrument(name = "Update user data without authorization", skip_all)]
    pub fn update_user_without_token(&self, user: &User) -> Result<HttpResponse, ApiError> {
        self.transport.execute(self.build_update_user(None, user)?)
    }

    #[tracing::instrument(name = "Delete user", skip_all)]
    pub fn delete_user(&self, token: &AccessToken) -> Result<HttpResponse, ApiError> {
        self.transport.execute(self.build_delete_user(token))
    }
}
