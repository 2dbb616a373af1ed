#![cfg(feature = "console")]

use std::fs;

use card_inventory::commands::CommandError;
use card_inventory::console::{Outcome, Session, SessionError, load_inventory};
use card_inventory::domain::inventory::Inventory;
use card_inventory::listing::ListingKind;
use card_inventory::models::config::{AppConfig, ListingSettings, OutputFormat};
use card_inventory::render::ListingRenderer;
use tempfile::TempDir;

mod common;

fn config() -> AppConfig {
    AppConfig {
        viewport_breakpoint_px: 700,
        viewport_width_px: 1280,
        inventory_path: None,
        import_csv_path: None,
        templates_dir: "templates/**/*".to_string(),
        output: OutputFormat::Json,
        cards: ListingSettings::cards(),
        sealed_products: ListingSettings::sealed_products(),
    }
}

fn session(config: &AppConfig, card_count: usize) -> Session {
    let inventory = Inventory {
        cards: common::cards(card_count),
        sealed_products: Vec::new(),
    };
    Session::new(config, &inventory, ListingRenderer::bundled().unwrap())
}

fn output(outcome: Outcome) -> serde_json::Value {
    match outcome {
        Outcome::Output(text) => serde_json::from_str(&text).unwrap(),
        Outcome::Quit => panic!("unexpected quit"),
    }
}

#[test]
fn test_commands_drive_the_card_listing() {
    let mut session = session(&config(), 60);

    let value = output(session.handle("cards page 3").unwrap());
    assert_eq!(value["view"]["current_page"], 3);

    let value = output(session.handle("cards prev").unwrap());
    assert_eq!(value["view"]["current_page"], 2);

    let value = output(session.handle("cards filter near mint").unwrap());
    assert_eq!(value["view"]["current_page"], 1);
    assert_eq!(value["view"]["filtered_count"], 30);

    session.handle("cards select all").unwrap();
    let table = session.cards().unwrap().table();
    assert_eq!(table.selected_rows().len(), 25);

    session.handle("cards check 1").unwrap();
    session.handle("cards select none").unwrap();
    assert!(session.cards().unwrap().table().selected_rows().is_empty());
}

#[test]
fn test_viewport_command_resizes_every_listing() {
    let mut session = session(&config(), 60);
    session.handle("cards page 3").unwrap();

    session.handle("viewport 700").unwrap();
    let table = session.cards().unwrap().table();
    assert_eq!(table.page_size(), 12);
    assert_eq!(table.total_pages(), 5);
    assert_eq!(table.current_page(), 3);

    session.handle("viewport 701").unwrap();
    let table = session.cards().unwrap().table();
    assert_eq!(table.page_size(), 25);
    assert_eq!(table.current_page(), 3);
}

#[test]
fn test_errors_and_quit() {
    let mut config = config();
    config.sealed_products.page_size_desktop = 0;
    let mut session = session(&config, 3);

    assert!(session.sealed_products().is_none());
    assert!(matches!(
        session.handle("sealed show"),
        Err(SessionError::Inactive(ListingKind::SealedProducts))
    ));
    assert!(matches!(
        session.handle("ledger"),
        Err(SessionError::Command(CommandError::UnknownListing(_)))
    ));
    assert_eq!(session.handle("quit").unwrap(), Outcome::Quit);
}

#[test]
fn test_load_inventory_merges_snapshot_and_import() {
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join("inventory.json");
    let import = dir.path().join("import.csv");
    fs::write(
        &snapshot,
        r#"{"cards": [{"id": 3, "name": "Thoughtseize"}],
            "sealed_products": [{"id": 1, "name": "Kaldheim Bundle"}]}"#,
    )
    .unwrap();
    fs::write(
        &import,
        "Quantity,Name,Set Code,Card Number,Printing,Condition\n\
         4,Fatal Push,AER,57,Normal,Near Mint\n",
    )
    .unwrap();

    let config = AppConfig {
        inventory_path: Some(snapshot.to_string_lossy().into_owned()),
        import_csv_path: Some(import.to_string_lossy().into_owned()),
        ..config()
    };
    let inventory = load_inventory(&config).unwrap();

    let names: Vec<&str> = inventory.cards.iter().map(|card| &*card.name).collect();
    assert_eq!(names, vec!["Fatal Push", "Thoughtseize"]);
    assert_eq!(inventory.cards[0].id.get(), 4);
    assert_eq!(inventory.sealed_products.len(), 1);
}

#[test]
fn test_missing_snapshot_reports_path() {
    let config = AppConfig {
        inventory_path: Some("does/not/exist.json".to_string()),
        ..config()
    };
    let err = load_inventory(&config).err().unwrap();
    assert!(err.to_string().contains("does/not/exist.json"));
}
