use burgers_core::{User, UserResponse};

use crate::helpers::{assert_rejected, TestApp, EMAIL_ALREADY_EXISTS, GARBAGE_SUFFIX, UNAUTHORISED};

fn garbled(value: &Option<String>) -> String {
    format!("{}{GARBAGE_SUFFIX}", value.as_deref().unwrap_or_default())
}

#[test]
fn authorized_user_can_change_all_fields() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let user = User::generate();
    let token = app.register(&mut cleanup, &user);
    let changed = user
        .clone()
        .with_email(garbled(&user.email))
        .with_password(garbled(&user.password))
        .with_name(garbled(&user.name));

    let response = app.users.update_user(&token, &changed).expect("Failed to execute request.");

    assert_eq!(response.status, 200, "body: {}", response.body);
    let body: UserResponse = response.json().unwrap();
    assert!(body.success);
    assert_eq!(Some(body.user.email), changed.normalized_email());
    assert_eq!(Some(body.user.name), changed.name);
}

#[test]
fn authorized_user_can_change_email() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let user = User::generate();
    let token = app.register(&mut cleanup, &user);
    let changed = user.clone().with_email(garbled(&user.email));

    let response = app.users.update_user(&token, &changed).expect("Failed to execute request.");

    assert_eq!(response.path_bool("success"), Some(true), "body: {}", response.body);
    assert_eq!(response.status, 200);
    assert_eq!(response.path_str("user.email"), changed.normalized_email());
}

#[test]
fn authorized_user_can_change_password() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let user = User::generate();
    let token = app.register(&mut cleanup, &user);
    let changed = user.clone().with_password(garbled(&user.password));

    let response = app.users.update_user(&token, &changed).expect("Failed to execute request.");

    assert_eq!(response.path_bool("success"), Some(true), "body: {}", response.body);
    assert_eq!(response.status, 200);
    assert_eq!(response.path_str("user.email"), user.normalized_email());

    let relogin = app.users.login_user(&changed).expect("Failed to execute request.");
    assert_eq!(relogin.path_bool("success"), Some(true), "body: {}", relogin.body);
}

#[test]
fn authorized_user_can_change_name() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let user = User::generate();
    let token = app.register(&mut cleanup, &user);
    let changed = user.clone().with_name(garbled(&user.name));

    let response = app.users.update_user(&token, &changed).expect("Failed to execute request.");

    assert_eq!(response.path_bool("success"), Some(true), "body: {}", response.body);
    assert_eq!(response.status, 200);
    assert_eq!(response.path_str("user.name"), changed.name);
}

#[test]
fn unauthorized_user_cannot_change_all_fields() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let user = User::generate();
    app.register(&mut cleanup, &user);
    let changed = user
        .clone()
        .with_email(garbled(&user.email))
        .with_password(garbled(&user.password))
        .with_name(garbled(&user.name));

    let response = app
        .users
        .update_user_without_token(&changed)
        .expect("Failed to execute request.");

    assert_rejected(&response, 401, UNAUTHORISED);
}

#[test]
fn unauthorized_user_cannot_change_email() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let user = User::generate();
    app.register(&mut cleanup, &user);
    let changed = user.clone().with_email(garbled(&user.email));

    let response = app
        .users
        .update_user_without_token(&changed)
        .expect("Failed to execute request.");

    assert_rejected(&response, 401, UNAUTHORISED);
}

#[test]
fn unauthorized_user_cannot_change_password() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let user = User::generate();
    app.register(&mut cleanup, &user);
    let changed = user.clone().with_password(garbled(&user.password));

    let response = app
        .users
        .update_user_without_token(&changed)
        .expect("Failed to execute request.");

    assert_rejected(&response, 401, UNAUTHORISED);
}

#[test]
fn unauthorized_user_cannot_change_name() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let user = User::generate();
    app.register(&mut cleanup, &user);
    let changed = user.clone().with_name(garbled(&user.name));

    let response = app
        .users
        .update_user_without_token(&changed)
        .expect("Failed to execute request.");

    assert_rejected(&response, 401, UNAUTHORISED);
}

#[test]
fn email_cannot_be_changed_to_one_already_taken() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let user = User::generate();
    let token = app.register(&mut cleanup, &user);
    let other = User::generate();
    app.register(&mut cleanup, &other);
    let changed = user.with_email(other.email.clone().unwrap());

    let response = app.users.update_user(&token, &changed).expect("Failed to execute request.");

    assert_rejected(&response, 403, EMAIL_ALREADY_EXISTS);
}
