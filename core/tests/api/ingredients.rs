use burgers_core::{IngredientsList, OrdersList};

use crate::helpers::{TestApp, CORRECT_INGREDIENTS};

#[test]
fn catalog_contains_fixture_ingredients() {
    let app = TestApp::new();

    let response = app.orders.list_ingredients().expect("Failed to execute request.");

    assert_eq!(response.status, 200, "body: {}", response.body);
    let catalog: IngredientsList = response.json().unwrap();
    assert!(catalog.success);
    let fixture: serde_json::Value = serde_json::from_str(CORRECT_INGREDIENTS).unwrap();
    let ids = fixture["ingredients"].as_array().unwrap();
    assert!(!ids.is_empty());
    for id in ids {
        let id = id.as_str().unwrap();
        assert!(catalog.data.iter().any(|i| i.id == id), "{id} missing from catalog");
    }
    assert!(catalog.data.iter().any(|i| i.kind == "bun"));
}

#[test]
fn public_feed_is_readable_without_token() {
    let app = TestApp::new();
    app.orders
        .create_order(None, CORRECT_INGREDIENTS)
        .expect("Failed to execute request.");

    let response = app.orders.list_all_orders().expect("Failed to execute request.");

    assert_eq!(response.status, 200, "body: {}", response.body);
    let feed: OrdersList = response.json().unwrap();
    assert!(feed.success);
    assert!(!feed.orders.is_empty());
    assert!(feed.orders.len() <= 50);
    assert!(feed.total >= 1);
}
