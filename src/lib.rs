//! Client-side style table controllers for a trading card inventory:
//! substring filtering, windowed pagination, responsive page sizes and
//! visibility-scoped bulk selection.

pub mod commands;
#[cfg(feature = "console")]
pub mod console;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod listing;
pub mod models;
pub mod pagination;
#[cfg(feature = "console")]
pub mod render;
pub mod table;
