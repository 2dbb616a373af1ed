//! Interactive session driving both inventory listings from text commands.

use std::fs::File;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::commands::{self, Command, CommandError, TableCommand};
use crate::domain::inventory::Inventory;
use crate::forms::import::{ImportError, parse_inventory_csv};
use crate::listing::{Listing, ListingKind};
use crate::models::config::{AppConfig, OutputFormat};
use crate::render::{ListingRenderer, RenderError, render_json};
use crate::table::viewport::{BreakpointClassifier, ViewportWidth};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid inventory snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("CSV import failed: {0}")]
    Import(#[from] ImportError),
}

fn open(path: &str) -> Result<File, StartupError> {
    File::open(Path::new(path)).map_err(|source| StartupError::Io {
        path: path.to_string(),
        source,
    })
}

/// Reads the inventory snapshot and appends any configured CSV import.
pub fn load_inventory(config: &AppConfig) -> Result<Inventory, StartupError> {
    let mut inventory = match &config.inventory_path {
        Some(path) => Inventory::from_json_reader(open(path)?)?,
        None => Inventory::default(),
    };

    if let Some(path) = &config.import_csv_path {
        let cards = parse_inventory_csv(open(path)?)?;
        if cards.is_empty() {
            log::warn!("{path} did not contain any rows to import");
        } else {
            let added = inventory.add_cards(cards);
            log::info!("Imported {added} card entries from {path}");
        }
    }

    inventory.sort_for_listing();
    Ok(inventory)
}

/// Result of handling one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print.
    Output(String),
    Quit,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("listing `{0}` is not active")]
    Inactive(ListingKind),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Both listings with independent controllers sharing one viewport width.
pub struct Session {
    cards: Option<Listing<BreakpointClassifier>>,
    sealed_products: Option<Listing<BreakpointClassifier>>,
    width: ViewportWidth,
    renderer: ListingRenderer,
    output: OutputFormat,
}

impl Session {
    pub fn new(config: &AppConfig, inventory: &Inventory, renderer: ListingRenderer) -> Self {
        let width = ViewportWidth::new(config.viewport_width_px);
        let classifier = BreakpointClassifier::new(config.viewport_breakpoint_px, width.clone());

        let cards = Listing::mount(
            ListingKind::Cards,
            &config.cards,
            &inventory.cards,
            classifier.clone(),
        );
        let sealed_products = Listing::mount(
            ListingKind::SealedProducts,
            &config.sealed_products,
            &inventory.sealed_products,
            classifier,
        );

        Self {
            cards,
            sealed_products,
            width,
            renderer,
            output: config.output,
        }
    }

    fn listing_mut(
        &mut self,
        kind: ListingKind,
    ) -> Result<&mut Listing<BreakpointClassifier>, SessionError> {
        let listing = match kind {
            ListingKind::Cards => self.cards.as_mut(),
            ListingKind::SealedProducts => self.sealed_products.as_mut(),
        };
        listing.ok_or(SessionError::Inactive(kind))
    }

    fn listing(&self, kind: ListingKind) -> Result<&Listing<BreakpointClassifier>, SessionError> {
        let listing = match kind {
            ListingKind::Cards => self.cards.as_ref(),
            ListingKind::SealedProducts => self.sealed_products.as_ref(),
        };
        listing.ok_or(SessionError::Inactive(kind))
    }

    /// Renders one listing in the configured output format.
    pub fn show(&self, kind: ListingKind) -> Result<String, SessionError> {
        let page = self.listing(kind)?.page_data();
        let text = match self.output {
            OutputFormat::Html => self.renderer.render_html(&page)?,
            OutputFormat::Json => render_json(&page)?,
        };
        Ok(text)
    }

    /// Renders every active listing.
    pub fn show_all(&self) -> Result<String, SessionError> {
        let mut parts = Vec::new();
        for kind in ListingKind::ALL {
            match self.show(kind) {
                Ok(text) => parts.push(text),
                Err(SessionError::Inactive(_)) => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(parts.join("\n"))
    }

    /// Parses and runs one input line.
    pub fn handle(&mut self, line: &str) -> Result<Outcome, SessionError> {
        match line.parse::<Command>()? {
            Command::Quit => Ok(Outcome::Quit),
            Command::Viewport(px) => {
                self.width.set(px);
                log::info!("Viewport width is now {px}px");
                for listing in [self.cards.as_mut(), self.sealed_products.as_mut()]
                    .into_iter()
                    .flatten()
                {
                    listing.table_mut().on_viewport_change();
                }
                Ok(Outcome::Output(self.show_all()?))
            }
            Command::Listing { kind, command } => {
                let listing = self.listing_mut(kind)?;
                commands::apply(listing, &command);
                if let TableCommand::Check(_) | TableCommand::Uncheck(_) = command {
                    let selected = listing.table().selected_rows();
                    log::info!("{kind}: {} rows selected", selected.len());
                }
                Ok(Outcome::Output(self.show(kind)?))
            }
        }
    }

    pub fn cards(&self) -> Option<&Listing<BreakpointClassifier>> {
        self.cards.as_ref()
    }

    pub fn sealed_products(&self) -> Option<&Listing<BreakpointClassifier>> {
        self.sealed_products.as_ref()
    }
}
