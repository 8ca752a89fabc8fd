//! Helper functions for MCP server operations.

use std::{path::PathBuf, str::FromStr};

use chrono::NaiveDate;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use rust_decimal::Decimal;
use serde::Serialize;

use super::types::ExtraParam;
use crate::{
    cli::args::CommonArgs,
    config::Config,
    core::{AppContext, pricing::Extra},
};

/// Load config and catalog for the project at `project_root_path`.
pub fn load_context(project_root_path: &str) -> Result<AppContext, McpError> {
    let args = CommonArgs {
        locale: None,
        messages_root: None,
        path: PathBuf::from(project_root_path),
        verbose: false,
    };
    AppContext::new(&args)
        .map_err(|e| McpError::internal_error(format!("Failed to load project: {:#}", e), None))
}

/// Serialize `value` as the pretty JSON text content of a tool result.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

pub fn parse_decimal(field: &str, value: &str) -> Result<Decimal, McpError> {
    Decimal::from_str(value.trim()).map_err(|e| {
        McpError::invalid_params(format!("Invalid '{}' \"{}\": {}", field, value, e), None)
    })
}

pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, McpError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        McpError::invalid_params(
            format!("Invalid '{}' \"{}\": {} (expected YYYY-MM-DD)", field, value, e),
            None,
        )
    })
}

/// Turn extras parameters into priced extras, looking up presets by name.
pub fn resolve_extras(extras: &[ExtraParam], config: &Config) -> Result<Vec<Extra>, McpError> {
    extras
        .iter()
        .map(|extra| match &extra.price {
            Some(price) => Ok(Extra::new(
                extra.name.as_str(),
                parse_decimal(&format!("extras.{}", extra.name), price)?,
            )),
            None => config.extra_preset(&extra.name).cloned().ok_or_else(|| {
                McpError::invalid_params(
                    format!(
                        "Unknown extra \"{}\": give a price or use a configured preset",
                        extra.name
                    ),
                    None,
                )
            }),
        })
        .collect()
}
