use anyhow::Result;
use chrono::Local;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::{
    config::load_config,
    core::{
        CatalogSource,
        i18n::placeholder_names,
        pricing::{BookingCharge, PriceCategory, compute_price, installment_plan},
    },
};

use super::helpers::{json_result, load_context, parse_date, parse_decimal, resolve_extras};
use super::types::{
    BreakdownItem, ConfigDto, ConfigValues, GetConfigParams, InstallmentItem, ListLocalesParams,
    LocaleItem, LocalesResult, QuotePriceParams, QuotePriceResult, TranslateParams,
    TranslateResult,
};

#[derive(Clone)]
pub struct VoyagerMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for VoyagerMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl VoyagerMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Price a booking
    #[tool(
        description = "Price a booking: accommodation (basePrice x nights x guests), extras, service fee and taxes. Amounts are decimal strings. Optionally splits the total into installments."
    )]
    pub async fn quote_price(
        &self,
        params: Parameters<QuotePriceParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = load_context(&params.project_root_path)?;
        let resolver = ctx.resolver(params.locale.as_deref(), None);

        let tax_rate = match &params.tax_rate {
            Some(rate) => parse_decimal("taxRate", rate)?,
            None => ctx.config.tax_rate,
        };
        let service_fee_rate = match &params.service_fee_rate {
            Some(rate) => parse_decimal("serviceFeeRate", rate)?,
            None => ctx.config.service_fee_rate,
        };
        let charge = BookingCharge::new(
            parse_decimal("basePrice", &params.base_price)?,
            params.nights,
            params.guests,
        )
        .with_extras(resolve_extras(&params.extras, &ctx.config)?)
        .with_tax_rate(tax_rate)
        .with_service_fee_rate(service_fee_rate);

        let price = compute_price(&charge)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let currency = params
            .currency
            .unwrap_or_else(|| ctx.config.currency.clone());

        let installments = match params.installments {
            Some(count) => {
                let first_due = match &params.first_due_date {
                    Some(date) => parse_date("firstDueDate", date)?,
                    None => Local::now().date_naive(),
                };
                installment_plan(
                    price.total,
                    count,
                    first_due,
                    ctx.config.installment_interval_days,
                )
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?
            }
            None => Vec::new(),
        };

        let breakdown = PriceCategory::ALL
            .iter()
            .map(|&category| {
                let amount = price.amount(category);
                BreakdownItem {
                    category: category.label().to_string(),
                    label: resolver.t(category.message_key()),
                    amount: amount.to_string(),
                    formatted: resolver.format_currency(amount, &currency),
                }
            })
            .collect();
        let installments = installments
            .into_iter()
            .map(|installment| InstallmentItem {
                number: installment.number,
                amount: installment.amount.to_string(),
                formatted: resolver.format_currency(installment.amount, &currency),
                due_date: installment.due_date.format("%Y-%m-%d").to_string(),
                status: "pending".to_string(),
            })
            .collect();

        let result = QuotePriceResult {
            locale: resolver.get_locale().to_string(),
            formatted_total: resolver.format_currency(price.total, &currency),
            currency,
            subtotal: price.subtotal.to_string(),
            extras_total: price.extras_total.to_string(),
            before_tax: price.before_tax.to_string(),
            tax_amount: price.tax_amount.to_string(),
            service_fee_amount: price.service_fee_amount.to_string(),
            total: price.total.to_string(),
            breakdown,
            installments,
        };

        json_result(&result)
    }

    /// Resolve a translation key
    #[tool(
        description = "Translate a dotted key (e.g. \"booking.stay\") with fallback to the fallback locale and {name} placeholder substitution. Unknown keys come back unchanged with resolved=false."
    )]
    pub async fn translate(
        &self,
        params: Parameters<TranslateParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = load_context(&params.project_root_path)?;
        let resolver = ctx.resolver(params.locale.as_deref(), None);

        let found = resolver.lookup(&params.key);
        let missing_params = found
            .map(|t| {
                placeholder_names(t.template)
                    .into_iter()
                    .filter(|name| !params.params.contains_key(*name))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let result = TranslateResult {
            text: resolver.translate(&params.key, &params.params),
            resolved: found.is_some(),
            current_locale: resolver.get_locale().to_string(),
            resolved_locale: found.map(|t| t.locale.to_string()),
            missing_params,
            key: params.key,
        };

        json_result(&result)
    }

    /// List the locales of the catalog
    #[tool(
        description = "List available locales with their native names, flags and key counts, plus the current and fallback locale."
    )]
    pub async fn list_locales(
        &self,
        params: Parameters<ListLocalesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = load_context(&params.project_root_path)?;
        let resolver = ctx.resolver(params.locale.as_deref(), None);

        let locales = resolver
            .available_locales()
            .into_iter()
            .map(|info| LocaleItem {
                key_count: ctx
                    .catalog
                    .get(&info.code)
                    .map_or(0, |messages| messages.key_count()),
                code: info.code,
                name: info.name,
                flag: info.flag,
            })
            .collect();

        let result = LocalesResult {
            source: match &ctx.catalog_source {
                CatalogSource::Builtin => "builtin".to_string(),
                CatalogSource::Directory(dir) => dir.to_string_lossy().to_string(),
            },
            current_locale: resolver.get_locale().to_string(),
            fallback_locale: resolver.fallback_locale().to_string(),
            locales,
            warnings: ctx
                .catalog_warnings
                .iter()
                .map(|w| format!("{}: {}", w.file_path, w.error))
                .chain(ctx.catalog.skipped_values().map(|(source, key)| {
                    format!("{}: ignored non-string value at \"{}\"", source, key)
                }))
                .collect(),
        };

        json_result(&result)
    }

    /// Get the current voyager configuration
    #[tool(description = "Get the current voyager configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = std::path::Path::new(&params.0.project_root_path);

        let result = load_config(path).map_err(|e| {
            McpError::internal_error(format!("Failed to load config: {:#}", e), None)
        })?;

        let config_dto = ConfigDto {
            from_file: result.from_file(),
            config_path: result
                .path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            config: ConfigValues::from(result.config),
        };

        json_result(&config_dto)
    }
}

#[tool_handler]
impl ServerHandler for VoyagerMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Voyager MCP prices travel bookings and resolves UI translations.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration (locales, currency, rates, extras presets)\n\
                 2. list_locales - Get available locales and their key counts\n\
                 3. translate - Resolve a translation key with fallback and placeholders\n\
                 4. quote_price - Price a booking and optionally split it into installments\n\n\
                 Amounts are exact decimal strings. Use the formatted fields for display."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = VoyagerMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
