//! Inbound data formats turned into domain payloads.

pub mod import;
