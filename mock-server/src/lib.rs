//! In-memory emulation of the Stellar Burgers REST API.
//!
//! Serves the same routes, status codes and messages as the live service for
//! everything the API test suite touches, so the suite can run without
//! network access.

pub mod catalog;
pub mod store;

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::store::{Account, Order, Registration, Rejection, Session, Store};

pub type Db = Arc<RwLock<Store>>;

#[derive(Deserialize)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct OrderBody {
    pub ingredients: Option<Vec<String>>,
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/user", get(get_user).patch(update_user).delete(delete_user))
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/api/orders/all", get(list_all_orders))
        .route("/api/ingredients", get(list_ingredients))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

impl Rejection {
    pub fn status(&self) -> StatusCode {
        match self {
            Rejection::MissingFields | Rejection::UserExists | Rejection::EmailTaken | Rejection::MalformedToken => {
                StatusCode::FORBIDDEN
            }
            Rejection::BadCredentials | Rejection::NotAuthorised => StatusCode::UNAUTHORIZED,
            Rejection::NoIngredients | Rejection::MalformedBody => StatusCode::BAD_REQUEST,
            Rejection::InvalidIngredient => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rejection::MissingFields => "Email, password and name are required fields",
            Rejection::UserExists => "User already exists",
            Rejection::BadCredentials => "email or password are incorrect",
            Rejection::EmailTaken => "User with such email already exists",
            Rejection::NotAuthorised => "You should be authorised",
            Rejection::MalformedBody => "Request body must be a JSON object",
            Rejection::MalformedToken => "jwt malformed",
            Rejection::NoIngredients => "Ingredient ids must be provided",
            Rejection::InvalidIngredient => "Internal Server Error",
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        // The live service crashes on ids outside its catalog and answers with
        // its framework's HTML error page rather than JSON.
        if self == Rejection::InvalidIngredient {
            return (self.status(), Html(format!("<pre>{}</pre>", self.message()))).into_response();
        }
        (self.status(), Json(json!({ "success": false, "message": self.message() }))).into_response()
    }
}

/// Bearer credential from the `Authorization` header, if one was sent.
fn credential(headers: &HeaderMap) -> Result<Option<String>, Rejection> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };
    let value = value.to_str().map_err(|_| Rejection::MalformedToken)?;
    value
        .strip_prefix("Bearer ")
        .map(|credential| Some(credential.trim().to_string()))
        .ok_or(Rejection::MalformedToken)
}

fn require_account(store: &Store, headers: &HeaderMap) -> Result<Uuid, Rejection> {
    let credential = credential(headers)?.ok_or(Rejection::NotAuthorised)?;
    store.authenticate(&credential).map(|account| account.id)
}

fn optional_account(store: &Store, headers: &HeaderMap) -> Result<Option<Uuid>, Rejection> {
    match credential(headers)? {
        Some(credential) => store.authenticate(&credential).map(|account| Some(account.id)),
        None => Ok(None),
    }
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn user_json(account: &Account) -> Value {
    json!({ "email": account.email, "name": account.name })
}

fn auth_json(account: &Account, session: &Session) -> Value {
    json!({
        "success": true,
        "user": user_json(account),
        "accessToken": session.access_token,
        "refreshToken": session.refresh_token,
    })
}

fn feed_entry_json(order: &Order) -> Value {
    json!({
        "_id": order.id,
        "ingredients": order.ingredients.iter().map(|i| i.id).collect::<Vec<_>>(),
        "status": order.status,
        "name": order.name,
        "createdAt": timestamp(&order.created_at),
        "updatedAt": timestamp(&order.updated_at),
        "number": order.number,
    })
}

async fn register(
    State(db): State<Db>,
    Json(input): Json<Registration>,
) -> Result<Json<Value>, Rejection> {
    let (account, session) = db.write().await.register(input)?;
    tracing::info!(email = %account.email, "registered account");
    Ok(Json(auth_json(&account, &session)))
}

async fn login(
    State(db): State<Db>,
    Json(input): Json<Credentials>,
) -> Result<Json<Value>, Rejection> {
    let (account, session) = db.write().await.login(input.email, input.password)?;
    tracing::info!(email = %account.email, "logged in");
    Ok(Json(auth_json(&account, &session)))
}

async fn get_user(State(db): State<Db>, headers: HeaderMap) -> Result<Json<Value>, Rejection> {
    let store = db.read().await;
    let id = require_account(&store, &headers)?;
    let account = store.account(id).ok_or(Rejection::MalformedToken)?;
    Ok(Json(json!({ "success": true, "user": user_json(account) })))
}

async fn update_user(
    State(db): State<Db>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, Rejection> {
    let mut store = db.write().await;
    let id = require_account(&store, &headers)?;
    // Authorisation is checked before the body is looked at.
    let changes: Registration = if body.is_empty() {
        Registration::default()
    } else {
        serde_json::from_slice(&body).map_err(|_| Rejection::MalformedBody)?
    };
    let account = store.update(id, changes)?;
    tracing::info!(email = %account.email, "updated account");
    Ok(Json(json!({ "success": true, "user": user_json(&account) })))
}

async fn delete_user(
    State(db): State<Db>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<Value>), Rejection> {
    let mut store = db.write().await;
    let id = require_account(&store, &headers)?;
    let account = store.delete(id).ok_or(Rejection::MalformedToken)?;
    tracing::info!(email = %account.email, "deleted account");
    Ok((
        StatusCode::ACCEPTED,
        Json(json!({ "success": true, "message": "User successfully removed" })),
    ))
}

async fn create_order(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<OrderBody>,
) -> Result<Json<Value>, Rejection> {
    let mut store = db.write().await;
    let owner = optional_account(&store, &headers)?;
    let order = store.place_order(owner, input.ingredients)?;
    tracing::info!(number = order.number, authenticated = owner.is_some(), "placed order");

    let Some(account) = owner.and_then(|id| store.account(id)) else {
        return Ok(Json(json!({
            "success": true,
            "name": order.name,
            "order": { "number": order.number },
        })));
    };
    Ok(Json(json!({
        "success": true,
        "name": order.name,
        "order": {
            "ingredients": order.ingredients,
            "_id": order.id,
            "owner": {
                "name": account.name,
                "email": account.email,
                "createdAt": timestamp(&account.created_at),
                "updatedAt": timestamp(&account.updated_at),
            },
            "status": order.status,
            "name": order.name,
            "createdAt": timestamp(&order.created_at),
            "updatedAt": timestamp(&order.updated_at),
            "number": order.number,
            "price": order.price(),
        },
    })))
}

async fn list_orders(State(db): State<Db>, headers: HeaderMap) -> Result<Json<Value>, Rejection> {
    let store = db.read().await;
    let id = require_account(&store, &headers)?;
    let orders: Vec<Value> = store.feed(Some(id)).into_iter().map(feed_entry_json).collect();
    Ok(Json(json!({
        "success": true,
        "orders": orders,
        "total": store.total_orders(),
        "totalToday": store.orders_today(),
    })))
}

async fn list_all_orders(State(db): State<Db>) -> Json<Value> {
    let store = db.read().await;
    let orders: Vec<Value> = store.feed(None).into_iter().map(feed_entry_json).collect();
    Json(json!({
        "success": true,
        "orders": orders,
        "total": store.total_orders(),
        "totalToday": store.orders_today(),
    }))
}

async fn list_ingredients() -> Json<Value> {
    Json(json!({ "success": true, "data": catalog::CATALOG }))
}
