//! Test data factory.
//!
//! `User` is the request payload for registration, login and profile
//! updates. Every field is optional so a scenario can null one out to exercise
//! validation; absent fields serialize as explicit `null`s, the same shape the
//! service receives from any client that leaves a field unset.

use fake::faker::internet::en::{Password, SafeEmail};
use fake::faker::name::en::Name;
use fake::Fake;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Login payload: the subset of `User` the login endpoint reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl User {
    pub fn new(email: &str, password: &str, name: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            name: Some(name.to_string()),
        }
    }

    /// A fresh, valid user with a collision-free email.
    ///
    /// The local part of a fake address gets a random UUID fragment appended,
    /// so sequential and parallel runs against a shared service never trip
    /// over each other's accounts.
    pub fn generate() -> Self {
        let email: String = SafeEmail().fake();
        let (local, domain) = email.split_once('@').unwrap_or((email.as_str(), "example.com"));
        let suffix = Uuid::new_v4().simple().to_string();
        let password: String = Password(8..16).fake();
        let name: String = Name().fake();
        Self {
            email: Some(format!("{local}.{}@{domain}", &suffix[..12])),
            password: Some(password),
            name: Some(name),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn without_email(mut self) -> Self {
        self.email = None;
        self
    }

    pub fn without_password(mut self) -> Self {
        self.password = None;
        self
    }

    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// The email as the service echoes it back: lower-cased.
    pub fn normalized_email(&self) -> Option<String> {
        self.email.as_deref().map(str::to_lowercase)
    }
}
