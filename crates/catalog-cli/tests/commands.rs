//! Command execution against an in-memory catalog.

use catalog_cli::cli::Cli;
use catalog_cli::commands::{Status, execute};
use catalog_cli::config::Settings;
use catalog_cli::render::{EMPTY_CATALOG, NO_MATCHES};
use catalog_model::{CatalogState, Product, ProductId, seed_state};
use catalog_persistence::{MemoryStorage, RESET_FLAG_KEY};
use catalog_query::SortKey;
use catalog_store::CatalogStore;
use clap::Parser;

fn seeded() -> CatalogStore<MemoryStorage> {
    CatalogStore::load(MemoryStorage::new())
}

fn run_with(
    store: &mut CatalogStore<MemoryStorage>,
    settings: &Settings,
    args: &[&str],
) -> anyhow::Result<(Status, String)> {
    let cli = Cli::try_parse_from(std::iter::once("catalog").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    let status = execute(&cli.command, store, settings, &mut out)?;
    Ok((status, String::from_utf8(out)?))
}

fn run(store: &mut CatalogStore<MemoryStorage>, args: &[&str]) -> anyhow::Result<(Status, String)> {
    run_with(store, &Settings::default(), args)
}

fn listed_ids(store: &mut CatalogStore<MemoryStorage>, args: &[&str]) -> Vec<u64> {
    let mut full = vec!["list", "--format", "json"];
    full.extend_from_slice(args);
    let (_, out) = run(store, &full).unwrap();
    let products: Vec<Product> = serde_json::from_str(&out).unwrap();
    products.iter().map(|p| p.id.get()).collect()
}

#[test]
fn list_smartphones_by_price() {
    let mut store = seeded();
    assert_eq!(
        listed_ids(&mut store, &["--search", "смартфон", "--sort", "price_asc"]),
        vec![5, 1, 4]
    );
}

#[test]
fn list_price_window_and_availability() {
    let mut store = seeded();
    assert_eq!(
        listed_ids(&mut store, &["--min-price", "29999", "--max-price", "54999"]),
        vec![1, 4, 7]
    );
    assert_eq!(listed_ids(&mut store, &["--hide-available"]), vec![3, 7]);
    assert!(listed_ids(&mut store, &["--hide-available", "--hide-unavailable"]).is_empty());
}

#[test]
fn default_sort_comes_from_settings() {
    let mut store = seeded();
    let settings = Settings {
        default_sort: SortKey::PriceDesc,
        ..Settings::default()
    };
    let (_, out) = run_with(&mut store, &settings, &["list", "--format", "json"]).unwrap();
    let products: Vec<Product> = serde_json::from_str(&out).unwrap();
    let ids: Vec<u64> = products.iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![6, 2, 7, 4, 1, 5, 3]);
}

#[test]
fn table_output_reports_count_and_messages() {
    let mut store = seeded();
    let (_, out) = run(&mut store, &["list", "--search", "смартфон"]).unwrap();
    assert!(out.starts_with("Found products: 3\n"));
    assert!(out.contains("Search: \"смартфон\""));

    let (_, out) = run(&mut store, &["list", "--search", "холодильник"]).unwrap();
    assert_eq!(out.trim_end(), NO_MATCHES);

    let mut empty = CatalogStore::with_state(MemoryStorage::new(), Default::default());
    let (_, out) = run(&mut empty, &["list"]).unwrap();
    assert_eq!(out.trim_end(), EMPTY_CATALOG);
}

#[test]
fn show_missing_product_is_not_found() {
    let mut store = seeded();
    let (status, out) = run(&mut store, &["show", "42"]).unwrap();
    assert_eq!(status, Status::NotFound(ProductId::new(42)));
    assert_eq!(status.exit_code(), 2);
    assert!(out.is_empty());

    let (status, out) = run(&mut store, &["show", "3"]).unwrap();
    assert_eq!(status, Status::Success);
    assert!(out.contains("Наушники QWE"));
}

#[test]
fn add_creates_product_with_next_id() {
    let mut store = seeded();
    let (status, out) = run(
        &mut store,
        &[
            "add",
            "--name",
            "  Планшет  ",
            "--description",
            "Лёгкий планшет",
            "--price",
            "19999",
            "--image-url",
            "https://example.com/tablet.png",
            "--unavailable",
        ],
    )
    .unwrap();

    assert_eq!(status, Status::Success);
    assert_eq!(out.trim_end(), "Added product 8: Планшет");
    let product = store.get(ProductId::new(8)).unwrap();
    assert_eq!(product.name, "Планшет");
    assert_eq!(product.price, 19999.0);
    assert!(!product.available);
    assert_eq!(store.next_id(), ProductId::new(9));
}

#[test]
fn add_rejects_invalid_form() {
    let mut store = seeded();
    let error = run(&mut store, &["add", "--name", "X", "--price=-5"]).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("product description is required"));
    assert!(message.contains("price must be a positive number"));
    assert_eq!(store.state(), &seed_state());
}

#[test]
fn edit_merges_with_current_values() {
    let mut store = seeded();
    run(
        &mut store,
        &["edit", "3", "--price", "7999", "--available", "true"],
    )
    .unwrap();

    let product = store.get(ProductId::new(3)).unwrap();
    assert_eq!(product.price, 7999.0);
    assert!(product.available);
    assert_eq!(product.name, "Наушники QWE");
    assert_eq!(product.description, "Беспроводные наушники с шумоподавлением");
}

#[test]
fn edit_revalidates_the_image_url() {
    let mut store = seeded();
    let error = run(&mut store, &["edit", "1", "--price", "1000"]).unwrap_err();
    assert!(format!("{error:#}").contains("enter a valid image URL"));

    run(
        &mut store,
        &["edit", "1", "--price", "1000", "--image-url", ""],
    )
    .unwrap();
    let product = store.get(ProductId::new(1)).unwrap();
    assert_eq!(product.price, 1000.0);
    assert!(!product.has_image());
}

#[test]
fn mutations_on_missing_ids_succeed_without_changes() {
    let mut store = seeded();
    for args in [
        &["delete", "99"][..],
        &["toggle", "99"][..],
        &["edit", "99", "--name", "X"][..],
    ] {
        let (status, out) = run(&mut store, args).unwrap();
        assert_eq!(status, Status::Success);
        assert!(out.contains("nothing changed"));
    }
    assert_eq!(store.state(), &seed_state());
    assert!(store.backend().is_empty());
}

#[test]
fn toggle_and_delete() {
    let mut store = seeded();
    let (_, out) = run(&mut store, &["toggle", "3"]).unwrap();
    assert_eq!(out.trim_end(), "Product 3: In stock");

    let (_, out) = run(&mut store, &["delete", "3"]).unwrap();
    assert_eq!(out.trim_end(), "Deleted product 3");
    assert!(store.get(ProductId::new(3)).is_none());
}

#[test]
fn failed_save_fails_the_command() {
    let mut storage = MemoryStorage::new();
    storage.set_fail_writes(true);
    let mut store = CatalogStore::load(storage);

    let error = run(&mut store, &["toggle", "3"]).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("change not saved"));
    assert!(message.contains("writes disabled"));
    assert!(store.get(ProductId::new(3)).unwrap().available);

    let error = run(&mut store, &["delete", "1"]).unwrap_err();
    assert!(format!("{error:#}").contains("change not saved"));
    assert!(store.backend().is_empty());

    let (status, _) = run(&mut store, &["show", "2"]).unwrap();
    assert_eq!(status, Status::Success);
}

#[test]
fn add_fails_once_ids_run_out() {
    let state = CatalogState {
        products: Vec::new(),
        next_id: ProductId::new(u64::MAX),
    };
    let mut store = CatalogStore::with_state(MemoryStorage::new(), state.clone());

    let error = run(
        &mut store,
        &["add", "--name", "A", "--description", "B", "--price", "1"],
    )
    .unwrap_err();

    assert!(format!("{error:#}").contains("no product id left"));
    assert_eq!(store.state(), &state);
}

#[test]
fn bounds_follow_catalog() {
    let mut store = seeded();
    let (_, out) = run(&mut store, &["bounds"]).unwrap();
    assert_eq!(out.trim_end(), "Price range: 8 999 ₽ to 89 999 ₽");
}

#[test]
fn reset_now_and_on_next_start() {
    let mut store = seeded();
    run(&mut store, &["delete", "1"]).unwrap();

    run(&mut store, &["reset", "--on-next-start"]).unwrap();
    assert!(store.get(ProductId::new(1)).is_none());
    assert!(store.backend().contains(RESET_FLAG_KEY));

    let (_, out) = run(&mut store, &["reset"]).unwrap();
    assert_eq!(out.trim_end(), "Catalog reset to the built-in 7 products.");
    assert_eq!(store.state(), &seed_state());
    assert!(!store.backend().contains(RESET_FLAG_KEY));
}

#[test]
fn rejects_unknown_sort_key_and_bad_id() {
    assert!(Cli::try_parse_from(["catalog", "list", "--sort", "cheapest"]).is_err());
    assert!(Cli::try_parse_from(["catalog", "show", "abc"]).is_err());
}

#[test]
fn data_dir_flag_is_global() {
    let cli = Cli::try_parse_from(["catalog", "bounds", "--data-dir", "/tmp/catalog"]).unwrap();
    assert_eq!(
        cli.data_dir.as_deref(),
        Some(std::path::Path::new("/tmp/catalog"))
    );
}

#[test]
fn json_listing_uses_stored_field_names() {
    let mut store = seeded();
    let (_, out) = run(&mut store, &["list", "--search", "наушники", "--format", "json"]).unwrap();
    insta::assert_snapshot!(out.trim_end(), @r#"
    [
      {
        "id": 3,
        "name": "Наушники QWE",
        "description": "Беспроводные наушники с шумоподавлением",
        "price": 8999.0,
        "available": false,
        "imageUrl": ""
      }
    ]
    "#);
}
