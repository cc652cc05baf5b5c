//! Blocking API client and test-support toolkit for the Stellar Burgers
//! food-ordering service.
//!
//! # Overview
//! Thin endpoint wrappers (`UserClient`, `OrderClient`) over a shared base
//! configuration (`ApiConfig`), plus what an end-to-end suite needs around
//! them: a random user factory, explicit bearer-token parsing, and a drop
//! guard that deletes the accounts a scenario created.
//!
//! # Design
//! - Each operation is split into `build_*` (pure, produces an `HttpRequest`)
//!   and an executing method that sends it through a `Transport`.
//! - Wrappers never turn HTTP error statuses into errors; the raw
//!   `HttpResponse` goes back to the caller for assertion. Only transport
//!   failures surface as `ApiError`.
//! - Response DTOs are defined independently from the mock-server crate;
//!   the API tests run against both and catch schema drift.

pub mod auth;
pub mod cleanup;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod telemetry;
pub mod transport;
pub mod types;

pub use auth::AccessToken;
pub use cleanup::AccountCleanup;
pub use client::{OrderClient, UserClient};
pub use config::{ApiConfig, LogDetail};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use model::{Credentials, User};
pub use transport::{Transport, UreqTransport};
pub use types::{
    AuthResponse, Ingredient, IngredientsList, MessageResponse, OrderCreated, OrderRequest, OrdersList,
    OrderSummary, UserProfile, UserResponse,
};
