//! File parsers for message catalogs.
//!
//! - `json`: JSON message file parser (scans locale directories)

pub mod json;
