//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Voyager commands.
//! It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `quote`: Price a booking and print the breakdown
//! - `translate`: Resolve a translation key
//! - `locales`: List the locales of the catalog
//! - `init`: Initialize voyager configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, CommandFactory, Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Locale to display (overrides LANG and the config file)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Project directory to search for .voyagerrc.json
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Price per guest per night
    #[arg(long)]
    pub base_price: Decimal,

    /// Number of nights (default: 1, or the length of --check-in..--check-out)
    #[arg(long, conflicts_with = "check_in")]
    pub nights: Option<u32>,

    /// Number of guests
    #[arg(long, default_value_t = 1)]
    pub guests: u32,

    /// Extra by preset name or as NAME=PRICE
    /// Can be specified multiple times: --extra insurance --extra spa=95
    #[arg(long = "extra", value_name = "NAME|NAME=PRICE")]
    pub extras: Vec<String>,

    /// Tax rate as a fraction (overrides config file)
    #[arg(long)]
    pub tax_rate: Option<Decimal>,

    /// Service fee rate as a fraction (overrides config file)
    #[arg(long)]
    pub service_fee_rate: Option<Decimal>,

    /// First night of the stay (YYYY-MM-DD)
    #[arg(long, requires = "check_out")]
    pub check_in: Option<NaiveDate>,

    /// Departure day (YYYY-MM-DD)
    #[arg(long, requires = "check_in")]
    pub check_out: Option<NaiveDate>,

    /// Split the total into this many payments
    #[arg(long)]
    pub installments: Option<u32>,

    /// Currency code for display (overrides config file)
    #[arg(long)]
    pub currency: Option<String>,

    /// Print the breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct TranslateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Dotted key, e.g. common.welcome
    pub key: String,

    /// Placeholder value as NAME=VALUE
    /// Can be specified multiple times: -p nights=7 -p guests=2
    #[arg(short, long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// Exit with status 1 when the key has no translation
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct LocalesArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the locales as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Price a booking (accommodation, extras, service fee, taxes)
    Quote(QuoteArgs),
    /// Resolve a translation key with locale fallback
    Translate(TranslateArgs),
    /// List available locales
    Locales(LocalesArgs),
    /// Initialize a new .voyagerrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
