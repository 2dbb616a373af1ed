use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::domain::card::{InventoryCard, NewCard};
use crate::domain::sealed_product::SealedProduct;
use crate::domain::types::RowId;

/// Snapshot of everything the two listings show.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Inventory {
    #[serde(default)]
    pub cards: Vec<InventoryCard>,
    #[serde(default)]
    pub sealed_products: Vec<SealedProduct>,
}

impl Inventory {
    /// Reads a JSON snapshot.
    pub fn from_json_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }

    /// Appends imported cards, numbering them after the highest existing id.
    ///
    /// Returns the number of cards added.
    pub fn add_cards(&mut self, new_cards: Vec<NewCard>) -> usize {
        let mut next_id = self.cards.iter().map(|c| c.id.get()).max().unwrap_or(0);
        let mut added = 0;
        for new_card in new_cards {
            next_id += 1;
            match RowId::new(next_id) {
                Ok(id) => {
                    self.cards.push(new_card.into_card(id));
                    added += 1;
                }
                Err(err) => log::error!("Cannot number imported card {}: {err}", new_card.name),
            }
        }
        added
    }

    /// Orders cards the way the listing shows them: case-insensitive name,
    /// then set code and collector number with missing values last.
    pub fn sort_for_listing(&mut self) {
        self.cards.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| cmp_missing_last(&a.set_code, &b.set_code))
                .then_with(|| cmp_missing_last(&a.collector_number, &b.collector_number))
        });
        self.sealed_products
            .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    }
}

fn cmp_missing_last(a: &Option<String>, b: &Option<String>) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
