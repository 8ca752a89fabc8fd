//! Voyager - booking prices and translations for a travel site
//!
//! Voyager is a CLI tool and library that prices bookings (accommodation,
//! extras, service fee and taxes) with exact decimal arithmetic and resolves
//! UI translations with locale fallback and `{name}` placeholders.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Pricing engine, message catalog and translation resolver
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
