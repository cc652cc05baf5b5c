//! Response DTOs for the Stellar Burgers API.
//!
//! # Design
//! These mirror the JSON the service sends back, but are defined independently
//! of the mock server's own types: the API test binary runs against both, so
//! any drift between the emulation and these shapes shows up as a failing
//! scenario. Fields the suite never reads are left out; serde ignores them.

use serde::{Deserialize, Serialize};

/// Profile as echoed by register, login and `auth/user`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
}

/// Body of a successful `auth/register` or `auth/login`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    pub user: UserProfile,
    pub access_token: String,
    pub refresh_token: String,
}

/// Body of a successful `GET` or `PATCH auth/user`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserProfile,
}

/// Any body of the form `{"success": .., "message": ..}`: every error, and a
/// successful account deletion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Request body for `POST orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub ingredients: Vec<String>,
}

impl OrderRequest {
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OrderNumber {
    pub number: u64,
}

/// Body of a successful `POST orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreated {
    pub success: bool,
    pub name: String,
    pub order: OrderNumber,
}

/// One entry of an order feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub ingredients: Vec<String>,
    pub status: String,
    pub name: String,
    pub number: u64,
    pub created_at: String,
    pub updated_at: String,
}

/// Body of `GET orders` and `GET orders/all`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersList {
    pub success: bool,
    pub orders: Vec<OrderSummary>,
    pub total: u64,
    pub total_today: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub proteins: u32,
    pub fat: u32,
    pub carbohydrates: u32,
    pub calories: u32,
    pub price: u32,
}

/// Body of `GET ingredients`.
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientsList {
    pub success: bool,
    pub data: Vec<Ingredient>,
}
