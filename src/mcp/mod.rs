//! Model Context Protocol (MCP) server implementation.
//!
//! This module provides an MCP server that exposes Voyager pricing and
//! translation to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `helpers`: Context loading, parameter parsing and result encoding
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific parameter and result types

mod helpers;
mod server;
pub mod types;

pub use server::{VoyagerMcpServer, run_server};
