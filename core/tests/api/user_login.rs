use burgers_core::{AuthResponse, User};

use crate::helpers::{assert_rejected, TestApp, GARBAGE_SUFFIX, INCORRECT_CREDENTIALS};

#[test]
fn user_can_log_in_with_correct_credentials() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let user = User::generate();
    app.register(&mut cleanup, &user);

    let response = app.users.login_user(&user).expect("Failed to execute request.");

    // Expected 201 at some point; the service answers 200 OK.
    assert!(response.is_success(), "status {}", response.status);
    let body: AuthResponse = response.json().unwrap();
    assert!(body.success);
    assert!(body.access_token.contains("Bearer"));
    assert_eq!(Some(body.user.email), user.normalized_email());
    assert_eq!(Some(body.user.name), user.name);
}

#[test]
fn login_with_wrong_email_and_password_is_rejected() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let user = User::generate();
    app.register(&mut cleanup, &user);
    let email = format!("{}{GARBAGE_SUFFIX}", user.email.as_deref().unwrap());
    let password = format!("{}{GARBAGE_SUFFIX}", user.password.as_deref().unwrap());

    let response = app
        .users
        .login_user(&user.with_email(email).with_password(password))
        .expect("Failed to execute request.");

    assert_rejected(&response, 401, INCORRECT_CREDENTIALS);
}

#[test]
fn login_with_wrong_email_is_rejected() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let user = User::generate();
    app.register(&mut cleanup, &user);
    let email = format!("{}{GARBAGE_SUFFIX}", user.email.as_deref().unwrap());

    let response = app
        .users
        .login_user(&user.with_email(email))
        .expect("Failed to execute request.");

    assert_rejected(&response, 401, INCORRECT_CREDENTIALS);
}

#[test]
fn login_with_wrong_password_is_rejected() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let user = User::generate();
    app.register(&mut cleanup, &user);
    let password = format!("{}{GARBAGE_SUFFIX}", user.password.as_deref().unwrap());

    let response = app
        .users
        .login_user(&user.with_password(password))
        .expect("Failed to execute request.");

    assert_rejected(&response, 401, INCORRECT_CREDENTIALS);
}
