use burgers_core::{OrderCreated, User};
use claims::assert_some;

use crate::helpers::{
    assert_rejected, TestApp, CORRECT_INGREDIENTS, EMPTY_INGREDIENTS, INGREDIENTS_MISSING, UNKNOWN_INGREDIENTS,
    WRONG_INGREDIENTS,
};

#[test]
fn order_with_auth_and_ingredients_can_be_created() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let token = app.register(&mut cleanup, &User::generate());

    let response = app
        .orders
        .create_order(Some(&token), CORRECT_INGREDIENTS)
        .expect("Failed to execute request.");

    assert_some!(response.path("order.number"), "body: {}", response.body);
    // Nothing documents the status; a creation would suggest 201, the service
    // answers 200.
    assert!(response.is_success(), "status {}", response.status);
    assert_eq!(response.path_bool("success"), Some(true));
    assert_some!(response.path("order.owner"));
}

#[test]
fn order_without_auth_and_with_ingredients_can_be_created() {
    let app = TestApp::new();

    let response = app
        .orders
        .create_order(None, CORRECT_INGREDIENTS)
        .expect("Failed to execute request.");

    assert_some!(response.path("order.number"), "body: {}", response.body);
    // As above: 200 where 201 would be expected.
    assert!(response.is_success(), "status {}", response.status);
    let body: OrderCreated = response.json().unwrap();
    assert!(body.success);
    assert!(!body.name.is_empty());
}

#[test]
fn order_with_auth_and_without_ingredients_is_rejected() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let token = app.register(&mut cleanup, &User::generate());

    let response = app
        .orders
        .create_order(Some(&token), EMPTY_INGREDIENTS)
        .expect("Failed to execute request.");

    assert_rejected(&response, 400, INGREDIENTS_MISSING);
}

#[test]
fn order_without_auth_and_without_ingredients_is_rejected() {
    let app = TestApp::new();

    let response = app
        .orders
        .create_order(None, EMPTY_INGREDIENTS)
        .expect("Failed to execute request.");

    assert_rejected(&response, 400, INGREDIENTS_MISSING);
}

#[test]
fn order_with_auth_and_wrong_ingredients_fails() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let token = app.register(&mut cleanup, &User::generate());

    let response = app
        .orders
        .create_order(Some(&token), WRONG_INGREDIENTS)
        .expect("Failed to execute request.");

    assert_eq!(response.status, 500, "body: {}", response.body);
}

#[test]
fn order_without_auth_and_with_wrong_ingredients_fails() {
    let app = TestApp::new();

    let response = app
        .orders
        .create_order(None, WRONG_INGREDIENTS)
        .expect("Failed to execute request.");

    assert_eq!(response.status, 500, "body: {}", response.body);
}

#[test]
fn order_with_unknown_ingredients_fails() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let token = app.register(&mut cleanup, &User::generate());

    for token in [Some(&token), None] {
        let response = app
            .orders
            .create_order(token, UNKNOWN_INGREDIENTS)
            .expect("Failed to execute request.");

        assert_eq!(response.status, 500, "body: {}", response.body);
    }
}
