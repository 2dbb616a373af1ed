use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::price::format_cents;
use crate::domain::row::Searchable;
use crate::domain::types::{ItemName, RowId};

/// A sealed product (booster box, bundle, deck) held in inventory.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SealedProduct {
    pub id: RowId,
    pub name: ItemName,
    pub set_code: Option<String>,
    pub product_type: Option<String>,
    #[serde(default)]
    pub acquisition_price_cents: i64,
    #[serde(default)]
    pub market_price_cents: i64,
    #[serde(default)]
    pub quantity: u32,
    pub acquired_at: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Searchable for SealedProduct {
    fn row_id(&self) -> RowId {
        self.id
    }

    fn label(&self) -> String {
        match &self.product_type {
            Some(kind) => format!("{} [{kind}]", self.name),
            None => self.name.to_string(),
        }
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.to_string()),
            "set_code" => self.set_code.clone(),
            "product_type" => self.product_type.clone(),
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
            "product_type",
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
