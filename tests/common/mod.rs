//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use card_inventory::domain::card::{InventoryCard, NewCard};
use card_inventory::domain::row::Row;
use card_inventory::domain::types::{ItemName, PageSize, RowId};
use card_inventory::table::{TableAnchors, TableController, TableOptions, ViewportClass};

/// Classifier whose answer the test can flip between renders.
#[derive(Clone, Default)]
pub struct SwitchableViewport(Rc<Cell<ViewportClass>>);

impl SwitchableViewport {
    pub fn set(&self, class: ViewportClass) {
        self.0.set(class);
    }

    pub fn classifier(&self) -> impl Fn() -> ViewportClass + use<> {
        let cell = self.0.clone();
        move || cell.get()
    }
}

pub fn row_id(raw: i64) -> RowId {
    RowId::new(raw).unwrap()
}

/// `count` rows labelled `Item 1..=count`; every row text also carries a
/// parity word so filters can select half of them.
pub fn numbered_rows(count: usize) -> Vec<Row> {
    (1..=count)
        .map(|n| {
            let parity = if n % 2 == 0 { "even" } else { "odd" };
            Row::new(
                row_id(n as i64),
                format!("Item {n}"),
                &format!("Item {n} {parity}"),
            )
        })
        .collect()
}

pub fn options(desktop: usize, mobile: usize) -> TableOptions {
    TableOptions::new(
        TableAnchors::with_prefix("test"),
        PageSize::new(desktop).unwrap(),
    )
    .mobile_page_size(PageSize::new(mobile).unwrap())
    .filter_input("test-filter")
    .master_toggle("test-select-all")
}

pub fn desktop() -> ViewportClass {
    ViewportClass::Desktop
}

pub fn mount_desktop(
    count: usize,
    page_size: usize,
) -> TableController<fn() -> ViewportClass> {
    TableController::mount(
        options(page_size, page_size.div_ceil(2)),
        numbered_rows(count),
        desktop as fn() -> ViewportClass,
    )
    .unwrap()
}

pub fn ids(raw: impl IntoIterator<Item = i64>) -> Vec<RowId> {
    raw.into_iter().map(row_id).collect()
}

/// `count` cards named `Card 1..=count` from set `TST`.
pub fn cards(count: usize) -> Vec<InventoryCard> {
    (1..=count)
        .map(|n| {
            let condition = if n % 2 == 0 { "Near Mint" } else { "Played" };
            NewCard::new(
                ItemName::new(format!("Card {n}")).unwrap(),
                Some("TST".to_string()),
                Some(n.to_string()),
                Some(condition.to_string()),
                Some("English".to_string()),
                false,
                1,
            )
            .into_card(row_id(n as i64))
        })
        .collect()
}
