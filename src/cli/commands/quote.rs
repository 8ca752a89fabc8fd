use std::str::FromStr;

use anyhow::{Context, Ok, Result, anyhow};
use chrono::Local;
use serde::Serialize;

use super::super::{
    args::QuoteArgs,
    exit_status::ExitStatus,
    report::{AmountLine, QuoteReport, print_quote},
};
use super::helper::{load_context, resolver_for};
use crate::{
    config::Config,
    core::{
        i18n::{DateStyle, Params, TranslationResolver},
        pricing::{
            BookingCharge, Extra, Installment, PriceBreakdown, PriceCategory, compute_price,
            installment_plan, stay_nights,
        },
    },
};

/// JSON shape of `quote --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteOutput<'a> {
    locale: &'a str,
    currency: &'a str,
    charge: &'a BookingCharge,
    price: &'a PriceBreakdown,
    installments: &'a [Installment],
}

pub fn quote(cmd: QuoteArgs) -> Result<ExitStatus> {
    let ctx = load_context(&cmd.common)?;
    let resolver = resolver_for(&ctx, &cmd.common);

    let charge = build_charge(&cmd, &ctx.config)?;
    let price = compute_price(&charge)?;
    let currency = cmd.currency.as_deref().unwrap_or(&ctx.config.currency);

    let installments = match cmd.installments {
        Some(count) => {
            let first_due = cmd.check_in.unwrap_or_else(|| Local::now().date_naive());
            installment_plan(
                price.total,
                count,
                first_due,
                ctx.config.installment_interval_days,
            )?
        }
        None => Vec::new(),
    };

    if cmd.json {
        let output = QuoteOutput {
            locale: resolver.get_locale(),
            currency,
            charge: &charge,
            price: &price,
            installments: &installments,
        };
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize quote")?;
        println!("{}", json);
    } else {
        print_quote(&quote_report(
            &resolver,
            &charge,
            &price,
            &installments,
            currency,
        ));
    }

    Ok(ExitStatus::Success)
}

/// Assemble the charge from CLI flags, falling back to the config.
fn build_charge(cmd: &QuoteArgs, config: &Config) -> Result<BookingCharge> {
    let nights = match (cmd.nights, cmd.check_in, cmd.check_out) {
        (Some(nights), _, _) => nights,
        (None, Some(check_in), Some(check_out)) => stay_nights(check_in, check_out)?,
        _ => 1,
    };
    let extras = resolve_extras(&cmd.extras, config)?;

    Ok(BookingCharge::new(cmd.base_price, nights, cmd.guests)
        .with_extras(extras)
        .with_tax_rate(cmd.tax_rate.unwrap_or(config.tax_rate))
        .with_service_fee_rate(cmd.service_fee_rate.unwrap_or(config.service_fee_rate)))
}

/// `--extra` values are either a preset name or an inline `NAME=PRICE`.
pub fn resolve_extras(raw: &[String], config: &Config) -> Result<Vec<Extra>> {
    raw.iter()
        .map(|value| {
            if value.contains('=') {
                return Ok(Extra::from_str(value)?);
            }
            config.extra_preset(value.trim()).cloned().ok_or_else(|| {
                let presets: Vec<&str> = config.extras.iter().map(|e| e.name.as_str()).collect();
                anyhow!(
                    "Unknown extra \"{}\". Use NAME=PRICE or one of: {}",
                    value,
                    presets.join(", ")
                )
            })
        })
        .collect()
}

fn quote_report(
    resolver: &TranslationResolver,
    charge: &BookingCharge,
    price: &PriceBreakdown,
    installments: &[Installment],
    currency: &str,
) -> QuoteReport {
    let stay_params = Params::from([
        ("nights".to_string(), charge.nights.to_string()),
        ("guests".to_string(), charge.guests.to_string()),
    ]);
    let heading = format!(
        "{} ({})",
        resolver.t("booking.title"),
        resolver.translate("booking.stay", &stay_params)
    );

    let lines = PriceCategory::ALL
        .iter()
        .map(|&category| {
            AmountLine::new(
                resolver.t(category.message_key()),
                resolver.format_currency(price.amount(category), currency),
            )
        })
        .collect();
    let total = AmountLine::new(
        resolver.t("booking.total"),
        resolver.format_currency(price.total, currency),
    );

    let count = installments.len().to_string();
    let installments = installments
        .iter()
        .map(|installment| {
            let params = Params::from([
                ("number".to_string(), installment.number.to_string()),
                ("count".to_string(), count.clone()),
            ]);
            AmountLine::new(
                resolver.translate("payment.installment", &params),
                resolver.format_currency(installment.amount, currency),
            )
            .with_note(resolver.format_date(installment.due_date, DateStyle::Short))
        })
        .collect();

    QuoteReport {
        heading,
        lines,
        total,
        installments,
    }
}
