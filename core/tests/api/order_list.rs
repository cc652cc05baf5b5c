use burgers_core::{OrdersList, User};
use claims::assert_none;

use crate::helpers::{assert_rejected, TestApp, CORRECT_INGREDIENTS, UNAUTHORISED};

#[test]
fn authorized_user_can_list_own_orders() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let token = app.register(&mut cleanup, &User::generate());
    let placed = app
        .orders
        .create_order(Some(&token), CORRECT_INGREDIENTS)
        .expect("Failed to execute request.");
    let number = placed.path("order.number").and_then(|n| n.as_u64());

    let response = app.orders.list_orders(Some(&token)).expect("Failed to execute request.");

    assert_eq!(response.path_bool("success"), Some(true), "body: {}", response.body);
    assert_eq!(response.status, 200);
    let body: OrdersList = response.json().unwrap();
    assert_eq!(body.orders.len(), 1);
    assert_eq!(Some(body.orders[0].number), number);
}

#[test]
fn unauthorized_user_cannot_list_orders() {
    let app = TestApp::new();
    let mut cleanup = app.cleanup();
    let token = app.register(&mut cleanup, &User::generate());
    app.orders
        .create_order(Some(&token), CORRECT_INGREDIENTS)
        .expect("Failed to execute request.");

    let response = app.orders.list_orders(None).expect("Failed to execute request.");

    assert_none!(response.path("order.number"));
    assert_rejected(&response, 401, UNAUTHORISED);
}
