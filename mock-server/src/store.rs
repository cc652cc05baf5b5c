//! In-memory accounts, sessions and orders.
//!
//! The store enforces the same rules the live service does and reports
//! violations as `Rejection`s; turning those into status codes and messages
//! is the router's job.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::{self, Ingredient};

/// First order number handed out.
const FIRST_ORDER_NUMBER: u64 = 10_000;

/// Orders returned by the feeds.
pub const FEED_LIMIT: usize = 50;

#[derive(Clone, Debug)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct Order {
    pub id: Uuid,
    pub ingredients: Vec<&'static Ingredient>,
    pub owner: Option<Uuid>,
    pub name: String,
    pub number: u64,
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn price(&self) -> u32 {
        self.ingredients.iter().map(|i| i.price).sum()
    }
}

/// Every way a request is refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    MissingFields,
    UserExists,
    BadCredentials,
    EmailTaken,
    NotAuthorised,
    MalformedBody,
    MalformedToken,
    NoIngredients,
    InvalidIngredient,
}

/// Register and profile-update payload. Every field may be missing or `null`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Registration {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Tokens issued on register and login.
#[derive(Clone, Debug)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug)]
pub struct Store {
    accounts: HashMap<Uuid, Account>,
    sessions: HashMap<String, Uuid>,
    orders: Vec<Order>,
    next_order_number: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            accounts: HashMap::new(),
            sessions: HashMap::new(),
            orders: Vec::new(),
            next_order_number: FIRST_ORDER_NUMBER,
        }
    }
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

impl Store {
    pub fn register(&mut self, input: Registration) -> Result<(Account, Session), Rejection> {
        let (Some(email), Some(password), Some(name)) =
            (present(input.email), present(input.password), present(input.name))
        else {
            return Err(Rejection::MissingFields);
        };
        let email = email.to_lowercase();
        if self.account_by_email(&email).is_some() {
            return Err(Rejection::UserExists);
        }
        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            email,
            password,
            name,
            created_at: now,
            updated_at: now,
        };
        self.accounts.insert(account.id, account.clone());
        let session = self.open_session(account.id);
        Ok((account, session))
    }

    pub fn login(&mut self, email: Option<String>, password: Option<String>) -> Result<(Account, Session), Rejection> {
        let (Some(email), Some(password)) = (present(email), present(password)) else {
            return Err(Rejection::BadCredentials);
        };
        let account = self
            .account_by_email(&email.to_lowercase())
            .filter(|account| account.password == password)
            .cloned()
            .ok_or(Rejection::BadCredentials)?;
        let session = self.open_session(account.id);
        Ok((account, session))
    }

    /// Resolve a bearer credential (scheme already stripped) to its account.
    pub fn authenticate(&self, credential: &str) -> Result<&Account, Rejection> {
        self.sessions
            .get(credential)
            .and_then(|id| self.accounts.get(id))
            .ok_or(Rejection::MalformedToken)
    }

    pub fn update(&mut self, account_id: Uuid, changes: Registration) -> Result<Account, Rejection> {
        let email = present(changes.email).map(|email| email.to_lowercase());
        if let Some(email) = &email {
            if self
                .account_by_email(email)
                .is_some_and(|other| other.id != account_id)
            {
                return Err(Rejection::EmailTaken);
            }
        }
        let account = self
            .accounts
            .get_mut(&account_id)
            .ok_or(Rejection::MalformedToken)?;
        if let Some(email) = email {
            account.email = email;
        }
        if let Some(password) = present(changes.password) {
            account.password = password;
        }
        if let Some(name) = present(changes.name) {
            account.name = name;
        }
        account.updated_at = Utc::now();
        Ok(account.clone())
    }

    /// Remove the account and revoke every session it holds.
    pub fn delete(&mut self, account_id: Uuid) -> Option<Account> {
        let account = self.accounts.remove(&account_id)?;
        self.sessions.retain(|_, owner| *owner != account_id);
        Some(account)
    }

    pub fn place_order(&mut self, owner: Option<Uuid>, ids: Option<Vec<String>>) -> Result<Order, Rejection> {
        let ids = ids.filter(|ids| !ids.is_empty()).ok_or(Rejection::NoIngredients)?;
        let ingredients = ids
            .iter()
            .map(|id| catalog::find(id))
            .collect::<Option<Vec<_>>>()
            .ok_or(Rejection::InvalidIngredient)?;

        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            name: catalog::burger_name(&ingredients),
            ingredients,
            owner,
            number: self.next_order_number,
            status: "done",
            created_at: now,
            updated_at: now,
        };
        self.next_order_number += 1;
        self.orders.push(order.clone());
        Ok(order)
    }

    /// The most recent orders, newest last, optionally restricted to one owner.
    pub fn feed(&self, owner: Option<Uuid>) -> Vec<&Order> {
        let matching: Vec<&Order> = self
            .orders
            .iter()
            .filter(|order| owner.is_none() || order.owner == owner)
            .collect();
        let skip = matching.len().saturating_sub(FEED_LIMIT);
        matching.into_iter().skip(skip).collect()
    }

    pub fn total_orders(&self) -> usize {
        self.orders.len()
    }

    pub fn orders_today(&self) -> usize {
        let today = Utc::now().date_naive();
        self.orders
            .iter()
            .filter(|order| order.created_at.date_naive() == today)
            .count()
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.get(&id)
    }

    fn account_by_email(&self, email: &str) -> Option<&Account> {
        self.accounts.values().find(|account| account.email == email)
    }

    fn open_session(&mut self, account_id: Uuid) -> Session {
        let credential = Uuid::new_v4().simple().to_string();
        self.sessions.insert(credential.clone(), account_id);
        Session {
            access_token: format!("Bearer {credential}"),
            refresh_token: Uuid::new_v4().simple().to_string(),
        }
    }
}
