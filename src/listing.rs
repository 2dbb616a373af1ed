//! The two inventory listings and how they are wired to table controllers.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::domain::row::{Searchable, build_rows};
use crate::dto::table::{ListingPageData, RowView};
use crate::models::config::ListingSettings;
use crate::table::controller::TableController;
use crate::table::viewport::ViewportClassifier;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Cards,
    SealedProducts,
}

impl ListingKind {
    pub const ALL: [ListingKind; 2] = [ListingKind::Cards, ListingKind::SealedProducts];

    /// Prefix of the listing's anchors.
    pub fn anchor(self) -> &'static str {
        match self {
            ListingKind::Cards => "cards",
            ListingKind::SealedProducts => "sealed",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ListingKind::Cards => "Single cards",
            ListingKind::SealedProducts => "Sealed products",
        }
    }

    pub fn default_settings(self) -> ListingSettings {
        match self {
            ListingKind::Cards => ListingSettings::cards(),
            ListingKind::SealedProducts => ListingSettings::sealed_products(),
        }
    }
}

impl Display for ListingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for ListingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cards" | "card" => Ok(ListingKind::Cards),
            "sealed" | "sealed_products" | "sealed-products" => Ok(ListingKind::SealedProducts),
            other => Err(other.to_string()),
        }
    }
}

/// A mounted listing: one table controller plus what it lists.
pub struct Listing<C> {
    kind: ListingKind,
    table: TableController<C>,
}

impl<C: ViewportClassifier> Listing<C> {
    /// Builds rows from `records` and mounts a controller over them.
    ///
    /// Returns `None` when the settings cannot produce a usable table.
    pub fn mount<T: Searchable>(
        kind: ListingKind,
        settings: &ListingSettings,
        records: &[T],
        classifier: C,
    ) -> Option<Self> {
        let options = match settings.table_options(kind.anchor()) {
            Ok(options) => options,
            Err(err) => {
                log::warn!("Listing {kind} not activated: {err}");
                return None;
            }
        };

        let rows = build_rows(records, settings.searchable_fields.as_deref());
        log::debug!("Mounting listing {kind} with {} rows", rows.len());

        let table = TableController::mount(options, rows, classifier)?;
        Some(Self { kind, table })
    }

    pub fn kind(&self) -> ListingKind {
        self.kind
    }

    pub fn table(&self) -> &TableController<C> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableController<C> {
        &mut self.table
    }

    /// Collects what a template needs to draw the listing's current page.
    pub fn page_data(&self) -> ListingPageData<'_> {
        let rows = self
            .table
            .visible_rows()
            .map(|row| RowView {
                id: row.id(),
                label: row.label().to_string(),
                checked: self.table.is_row_selected(row.id()),
            })
            .collect();

        ListingPageData {
            title: self.kind.title(),
            anchor: self.kind.anchor(),
            has_filter_input: self.table.options().has_filter_input(),
            has_master_toggle: self.table.options().has_master_toggle(),
            rows,
            view: self.table.view(),
        }
    }
}
