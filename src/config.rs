use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::pricing::{
    DEFAULT_INSTALLMENT_INTERVAL_DAYS, DEFAULT_SERVICE_FEE_RATE, DEFAULT_TAX_RATE, Extra,
    check_rate,
};

pub const CONFIG_FILE_NAME: &str = ".voyagerrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default = "default_fallback_locale")]
    pub fallback_locale: String,
    /// Directory of `<locale>.json` files. The built-in catalog is used
    /// when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_root: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
    #[serde(default = "default_service_fee_rate")]
    pub service_fee_rate: Decimal,
    #[serde(default = "default_installment_interval_days")]
    pub installment_interval_days: u32,
    /// Named add-ons that `--extra NAME` can refer to.
    #[serde(default = "default_extras")]
    pub extras: Vec<Extra>,
}

fn default_locale() -> String {
    "es".to_string()
}

fn default_fallback_locale() -> String {
    "en".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_tax_rate() -> Decimal {
    DEFAULT_TAX_RATE
}

fn default_service_fee_rate() -> Decimal {
    DEFAULT_SERVICE_FEE_RATE
}

fn default_installment_interval_days() -> u32 {
    DEFAULT_INSTALLMENT_INTERVAL_DAYS
}

fn default_extras() -> Vec<Extra> {
    [
        ("insurance", dec!(120)),
        ("flights", dec!(850)),
        ("transfers", dec!(80)),
        ("tours", dec!(200)),
    ]
    .into_iter()
    .map(|(name, price)| Extra::new(name, price))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            fallback_locale: default_fallback_locale(),
            messages_root: None,
            currency: default_currency(),
            tax_rate: default_tax_rate(),
            service_fee_rate: default_service_fee_rate(),
            installment_interval_days: default_installment_interval_days(),
            extras: default_extras(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for out-of-range rates, empty locale or currency
    /// codes, a zero installment interval, and bad extras presets.
    pub fn validate(&self) -> Result<()> {
        if self.default_locale.trim().is_empty() {
            bail!("'defaultLocale' must not be empty");
        }
        if self.fallback_locale.trim().is_empty() {
            bail!("'fallbackLocale' must not be empty");
        }
        if self.currency.trim().is_empty() {
            bail!("'currency' must not be empty");
        }
        check_rate("taxRate", self.tax_rate).context("Invalid 'taxRate' in config")?;
        check_rate("serviceFeeRate", self.service_fee_rate)
            .context("Invalid 'serviceFeeRate' in config")?;
        if self.installment_interval_days == 0 {
            bail!("'installmentIntervalDays' must be at least 1");
        }

        let mut seen = HashSet::new();
        for extra in &self.extras {
            if extra.price < Decimal::ZERO {
                bail!(
                    "Invalid extra \"{}\" in 'extras': price must not be negative",
                    extra.name
                );
            }
            if !seen.insert(extra.name.as_str()) {
                bail!("Duplicate extra \"{}\" in 'extras'", extra.name);
            }
        }

        Ok(())
    }

    /// Look up an extras preset by name.
    pub fn extra_preset(&self, name: &str) -> Option<&Extra> {
        self.extras.iter().find(|extra| extra.name == name)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from; `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
