use crate::auth::AccessToken;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};

use super::authorized;

pub const ORDERS_ENDPOINT: &str = "orders";
pub const ALL_ORDERS_ENDPOINT: &str = "orders/all";
pub const INGREDIENTS_ENDPOINT: &str = "ingredients";

/// Order placement, order feeds and the ingredient catalog.
///
/// Order bodies are passed through as raw JSON so scenarios can submit
/// payloads the typed `OrderRequest` could never produce.
#[derive(Debug, Clone)]
pub struct OrderClient<T = UreqTransport> {
    config: ApiConfig,
    transport: T,
}

impl OrderClient {
    pub fn new(config: ApiConfig) -> Self {
        let transport = UreqTransport::new(&config);
        Self { config, transport }
    }
}

impl<T: Transport> OrderClient<T> {
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_create_order(&self, token: Option<&AccessToken>, ingredients_json: &str) -> HttpRequest {
        let request = self
            .config
            .request(HttpMethod::Post, ORDERS_ENDPOINT)
            .with_body(ingredients_json);
        authorized(request, token)
    }

    pub fn build_list_orders(&self, token: Option<&AccessToken>) -> HttpRequest {
        authorized(self.config.request(HttpMethod::Get, ORDERS_ENDPOINT), token)
    }

    pub fn build_list_all_orders(&self) -> HttpRequest {
        self.config.request(HttpMethod::Get, ALL_ORDERS_ENDPOINT)
    }

    pub fn build_list_ingredients(&self) -> HttpRequest {
        self.config.request(HttpMethod::Get, INGREDIENTS_ENDPOINT)
    }

    #[tracing::instrument(name = "Create order", skip_all)]
    pub fn create_order(
        &self,
        token: Option<&AccessToken>,
        ingredients_json: &str,
    ) -> Result<HttpResponse, ApiError> {
        self.transport.execute(self.build_create_order(token, ingredients_json))
    }

    /// The caller's own orders. The service requires a token; `None` is for
    /// asserting the rejection.
    #[tracing::instrument(name = "List user orders", skip_all)]
    pub fn list_orders(&self, token: Option<&AccessToken>) -> Result<HttpResponse, ApiError> {
        self.transport.execute(self.build_list_orders(token))
    }

    /// Public feed of recent orders from every customer.
    #[tracing::instrument(name = "List all orders", skip_all)]
    pub fn list_all_orders(&self) -> Result<HttpResponse, ApiError> {
        self.transport.execute(self.build_list_all_orders())
    }

    #[tracing::instrument(name = "List ingredients", skip_all)]
    pub fn list_ingredients(&self) -> Result<HttpResponse, ApiError> {
        self.transport.execute(self.build_list_ingredients())
    }
}
