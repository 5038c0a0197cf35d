//! Tests for the persisted catalog shape.

use catalog_model::{CatalogState, ProductDraft, ProductId, seed_state};

#[test]
fn product_serializes_with_camel_case_keys() {
    let product = ProductDraft::new("Смартфон XYZ", "Современный смартфон", 29999.0)
        .with_image_url("/img/smartphone_01.webp")
        .into_product(ProductId::new(1));

    let json = serde_json::to_string_pretty(&product).expect("serialize product");
    insta::assert_snapshot!(json, @r#"
    {
      "id": 1,
      "name": "Смартфон XYZ",
      "description": "Современный смартфон",
      "price": 29999.0,
      "available": true,
      "imageUrl": "/img/smartphone_01.webp"
    }
    "#);
}

#[test]
fn empty_state_serializes_next_id() {
    let json = serde_json::to_string(&CatalogState::default()).expect("serialize state");
    assert_eq!(json, r#"{"products":[],"nextId":1}"#);
}

#[test]
fn seed_state_survives_json() {
    let seed = seed_state();
    let json = serde_json::to_string(&seed).expect("serialize seed");
    let back: CatalogState = serde_json::from_str(&json).expect("deserialize seed");
    assert_eq!(back, seed);
}

#[test]
fn state_written_by_a_browser_is_readable() {
    // Integer prices and a missing imageUrl, as the web version wrote them.
    let json = r#"{
        "products": [
            {"id": 1, "name": "A", "description": "B", "price": 100, "available": true},
            {"id": 4, "name": "C", "description": "D", "price": 250.5, "available": false, "imageUrl": ""}
        ],
        "nextId": 9
    }"#;
    let state: CatalogState = serde_json::from_str(json).expect("parse state");

    assert_eq!(state.len(), 2);
    assert_eq!(state.next_id, ProductId::new(9));
    assert_eq!(state.products[0].price, 100.0);
    assert!(state.check_invariants().is_ok());
}
