#![cfg(feature = "console")]

use std::fs;

use card_inventory::models::config::{ConfigError, OutputFormat, load_config};
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, body: &str) {
    fs::write(dir.path().join(name), body).unwrap();
}

fn dir_str(dir: &TempDir) -> &str {
    dir.path().to_str().unwrap()
}

#[test]
fn test_defaults_fill_missing_settings() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "default.yaml", "inventory_path: \"inventory.json\"\n");

    let config = load_config(dir_str(&dir), "local").unwrap();
    assert_eq!(config.viewport_breakpoint_px, 700);
    assert_eq!(config.inventory_path.as_deref(), Some("inventory.json"));
    assert_eq!(config.output, OutputFormat::Html);
    assert_eq!(config.cards.page_size_desktop, 25);
    assert_eq!(config.sealed_products.page_size_desktop, 15);
    assert!(!config.sealed_products.filter_input);
}

#[test]
fn test_profile_overrides_default() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        "default.yaml",
        "output: html\ncards:\n  page_size_desktop: 25\n  filter_input: true\n",
    );
    write_config(
        &dir,
        "staging.yaml",
        "output: json\ncards:\n  page_size_desktop: 50\n",
    );

    let config = load_config(dir_str(&dir), "staging").unwrap();
    assert_eq!(config.output, OutputFormat::Json);
    assert_eq!(config.cards.page_size_desktop, 50);
    assert!(config.cards.filter_input);
    assert_eq!(config.cards.page_size_mobile, None);
}

#[test]
fn test_zero_page_size_fails_validation() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        "default.yaml",
        "sealed_products:\n  page_size_desktop: 0\n",
    );

    assert!(matches!(
        load_config(dir_str(&dir), "local"),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_missing_default_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        load_config(dir_str(&dir), "local"),
        Err(ConfigError::Source(_))
    ));
}
