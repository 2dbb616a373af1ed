//! Inventory records and the rows listings are built from.

pub mod card;
pub mod inventory;
pub mod price;
pub mod row;
pub mod sealed_product;
pub mod types;
