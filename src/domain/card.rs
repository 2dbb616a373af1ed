use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::price::format_cents;
use crate::domain::row::Searchable;
use crate::domain::types::{ItemName, RowId};

/// A single card held in inventory.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InventoryCard {
    pub id: RowId,
    pub scryfall_id: Option<String>,
    pub name: ItemName,
    pub set_code: Option<String>,
    pub collector_number: Option<String>,
    pub condition: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub is_foil: bool,
    #[serde(default)]
    pub acquisition_price_cents: i64,
    #[serde(default)]
    pub market_price_cents: i64,
    #[serde(default)]
    pub quantity: u32,
    pub acquired_at: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Card payload produced by an import, before it has been assigned an id.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCard {
    pub scryfall_id: Option<String>,
    pub name: ItemName,
    pub set_code: Option<String>,
    pub collector_number: Option<String>,
    pub condition: Option<String>,
    pub language: Option<String>,
    pub is_foil: bool,
    pub acquisition_price_cents: i64,
    pub market_price_cents: i64,
    pub quantity: u32,
    pub acquired_at: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl NewCard {
    /// Builds a payload, trimming optional text and dropping empty values.
    #[must_use]
    pub fn new(
        name: ItemName,
        set_code: Option<String>,
        collector_number: Option<String>,
        condition: Option<String>,
        language: Option<String>,
        is_foil: bool,
        quantity: u32,
    ) -> Self {
        Self {
            scryfall_id: None,
            name,
            set_code: non_blank(set_code),
            collector_number: non_blank(collector_number),
            condition: non_blank(condition),
            language: non_blank(language),
            is_foil,
            acquisition_price_cents: 0,
            market_price_cents: 0,
            quantity,
            acquired_at: None,
            notes: None,
        }
    }

    #[must_use]
    pub fn with_prices(mut self, acquisition_cents: i64, market_cents: i64) -> Self {
        self.acquisition_price_cents = acquisition_cents;
        self.market_price_cents = market_cents;
        self
    }

    /// Assigns the identifier the card will be listed under.
    pub fn into_card(self, id: RowId) -> InventoryCard {
        InventoryCard {
            id,
            scryfall_id: self.scryfall_id,
            name: self.name,
            set_code: self.set_code,
            collector_number: self.collector_number,
            condition: self.condition,
            language: self.language,
            is_foil: self.is_foil,
            acquisition_price_cents: self.acquisition_price_cents,
            market_price_cents: self.market_price_cents,
            quantity: self.quantity,
            acquired_at: self.acquired_at,
            notes: self.notes,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl Searchable for InventoryCard {
    fn row_id(&self) -> RowId {
        self.id
    }

    fn label(&self) -> String {
        match (&self.set_code, &self.collector_number) {
            (Some(set), Some(number)) => format!("{} ({set} #{number})", self.name),
            (Some(set), None) => format!("{} ({set})", self.name),
            _ => self.name.to_string(),
        }
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.to_string()),
            "scryfall_id" => self.scryfall_id.clone(),
            "set_code" => self.set_code.clone(),
            "collector_number" => self.collector_number.clone(),
            "condition" => self.condition.clone(),
            "language" => self.language.clone(),
            "is_foil" => self.is_foil.then(|| "foil".to_string()),
            "acquisition_price" => Some(format_cents(self.acquisition_price_cents)),
            "market_price" => Some(format_cents(self.market_price_cents)),
            "quantity" => Some(self.quantity.to_string()),
            "acquired_at" => self.acquired_at.map(|d| d.format("%Y-%m-%d").to_string()),
            "notes" => self.notes.clone(),
            _ => None,
        }
    }

    fn full_text(&self) -> String {
        [
            "name",
            "set_code",
            "collector_number",
            "condition",
            "language",
            "is_foil",
            "acquisition_price",
            "market_price",
            "quantity",
            "acquired_at",
            "notes",
        ]
        .iter()
        .filter_map(|field| self.field_value(field))
        .collect::<Vec<_>>()
        .join(" ")
    }
}
