//! Interactive console reading listing commands from stdin.

use std::env;
use std::io::{self, BufRead, Write};

use dotenvy::dotenv;

use card_inventory::console::{Outcome, Session, SessionError, load_inventory};
use card_inventory::models::config::load_config;
use card_inventory::render::ListingRenderer;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let app_config = match load_config("config", &app_env) {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading config: {err}");
            std::process::exit(1);
        }
    };

    let inventory = match load_inventory(&app_config) {
        Ok(inventory) => inventory,
        Err(err) => {
            log::error!("Error loading inventory: {err}");
            std::process::exit(1);
        }
    };

    let renderer = match ListingRenderer::from_glob(&app_config.templates_dir) {
        Ok(renderer) => renderer,
        Err(err) => {
            log::error!("Template parsing error(s): {err}");
            std::process::exit(1);
        }
    };

    let mut session = Session::new(&app_config, &inventory, renderer);
    log::info!(
        "Loaded {} cards and {} sealed products",
        inventory.cards.len(),
        inventory.sealed_products.len()
    );

    let mut stdout = io::stdout().lock();
    match session.show_all() {
        Ok(text) => {
            if writeln!(stdout, "{text}").is_err() {
                return;
            }
        }
        Err(err) => log::error!("Error rendering listings: {err}"),
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::error!("Error reading input: {err}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match session.handle(&line) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Output(text)) => {
                if writeln!(stdout, "{text}").is_err() {
                    break;
                }
            }
            Err(SessionError::Render(err)) => log::error!("Error rendering listing: {err}"),
            Err(err) => log::warn!("{err}"),
        }
    }
}
