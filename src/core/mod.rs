//! Booking core: pricing and translation.
//!
//! ## Module Structure
//!
//! - `pricing`: booking price calculation (exact decimal arithmetic)
//! - `i18n`: catalog, translation resolver, locale formatting
//! - `parsers`: message file parsers
//! - `context`: configuration and catalog loading for commands

pub mod context;
pub mod i18n;
pub mod parsers;
pub mod pricing;

pub use context::{AppContext, CatalogSource};
