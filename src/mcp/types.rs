use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project containing .voyagerrc.json
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListLocalesParams {
    pub project_root_path: String,
    /// Locale to mark as current (defaults to the configured locale)
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateParams {
    pub project_root_path: String,
    /// Dotted key, e.g. "booking.stay"
    pub key: String,
    /// Placeholder values by name
    #[serde(default)]
    pub params: HashMap<String, String>,
    #[serde(default)]
    pub locale: Option<String>,
}

/// An extra by preset name (no price) or with an explicit price.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtraParam {
    pub name: String,
    /// Decimal string, e.g. "95.50". Omit to use the configured preset.
    #[serde(default)]
    pub price: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuotePriceParams {
    pub project_root_path: String,
    /// Price per guest per night as a decimal string
    pub base_price: String,
    pub nights: u32,
    pub guests: u32,
    #[serde(default)]
    pub extras: Vec<ExtraParam>,
    /// Fraction in [0, 1) as a decimal string (defaults to config)
    #[serde(default)]
    pub tax_rate: Option<String>,
    /// Fraction in [0, 1) as a decimal string (defaults to config)
    #[serde(default)]
    pub service_fee_rate: Option<String>,
    /// Number of payments to split the total into
    #[serde(default)]
    pub installments: Option<u32>,
    /// Due date of the first payment (YYYY-MM-DD, defaults to today)
    #[serde(default)]
    pub first_due_date: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config_path: Option<String>,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub default_locale: String,
    pub fallback_locale: String,
    pub messages_root: Option<String>,
    pub currency: String,
    pub tax_rate: String,
    pub service_fee_rate: String,
    pub installment_interval_days: u32,
    pub extras: Vec<ExtraItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtraItem {
    pub name: String,
    pub price: String,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            default_locale: c.default_locale,
            fallback_locale: c.fallback_locale,
            messages_root: c.messages_root,
            currency: c.currency,
            tax_rate: c.tax_rate.to_string(),
            service_fee_rate: c.service_fee_rate.to_string(),
            installment_interval_days: c.installment_interval_days,
            extras: c
                .extras
                .into_iter()
                .map(|e| ExtraItem {
                    name: e.name,
                    price: e.price.to_string(),
                })
                .collect(),
        }
    }
}

// ============================================================
// Locales Types (list_locales)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalesResult {
    /// "builtin" or the messages directory that was scanned
    pub source: String,
    pub current_locale: String,
    pub fallback_locale: String,
    pub locales: Vec<LocaleItem>,
    /// Message files and values that were skipped
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocaleItem {
    pub code: String,
    pub name: String,
    pub flag: String,
    pub key_count: usize,
}

// ============================================================
// Translate Types (translate)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResult {
    pub key: String,
    pub text: String,
    /// False when neither locale has the key; `text` is then the key itself
    pub resolved: bool,
    pub current_locale: String,
    /// Locale that supplied the template
    pub resolved_locale: Option<String>,
    /// Placeholders in the template with no value in `params`
    pub missing_params: Vec<String>,
}

// ============================================================
// Quote Types (quote_price)
// ============================================================

/// Amounts are exact decimal strings; `formatted` fields are localized
/// and rounded to cents.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuotePriceResult {
    pub locale: String,
    pub currency: String,
    pub subtotal: String,
    pub extras_total: String,
    pub before_tax: String,
    pub tax_amount: String,
    pub service_fee_amount: String,
    pub total: String,
    pub formatted_total: String,
    pub breakdown: Vec<BreakdownItem>,
    pub installments: Vec<InstallmentItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownItem {
    /// Stable category name ("Accommodation", "Extras", "Service Fee", "Taxes")
    pub category: String,
    /// Localized label
    pub label: String,
    pub amount: String,
    pub formatted: String,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentItem {
    pub number: u32,
    pub amount: String,
    pub formatted: String,
    pub due_date: String,
    pub status: String,
}
