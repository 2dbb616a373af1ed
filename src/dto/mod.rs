//! DTO modules that bridge the table controller with templates and JSON output.

pub mod table;
