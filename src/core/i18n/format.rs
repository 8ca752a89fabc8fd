use chrono::{NaiveDate, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::pricing::round_for_display;

/// Length of a formatted date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `Mar 8, 2026`
    #[default]
    Short,
    /// `March 8, 2026`
    Long,
}

/// Locale-aware formatting of numbers, money and dates.
///
/// [`TranslationResolver`](super::TranslationResolver) calls through this
/// trait so hosts with a richer formatting stack can plug theirs in.
pub trait LocaleFormat: Send + Sync {
    fn format_number(&self, locale: &str, value: Decimal) -> String;
    fn format_currency(&self, locale: &str, amount: Decimal, currency: &str) -> String;
    fn format_date(&self, locale: &str, date: NaiveDate, style: DateStyle) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPosition {
    /// `$1,234.50`
    Prefix,
    /// `R$ 1.234,50`
    PrefixSpaced,
    /// `1.234,50 €`
    SuffixSpaced,
}

#[derive(Debug, Clone, Copy)]
struct NumberSymbols {
    group: &'static str,
    decimal: &'static str,
    /// Integers with fewer than `3 + min_grouping` digits are not grouped.
    min_grouping: usize,
    currency: SymbolPosition,
}

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";

fn symbols(locale: &str) -> NumberSymbols {
    let (group, decimal, min_grouping, currency) = match locale {
        "es" => (".", ",", 2, SymbolPosition::SuffixSpaced),
        "fr" => (NARROW_NBSP, ",", 1, SymbolPosition::SuffixSpaced),
        "de" | "it" => (".", ",", 1, SymbolPosition::SuffixSpaced),
        "pt" => (".", ",", 1, SymbolPosition::PrefixSpaced),
        _ => (",", ".", 1, SymbolPosition::Prefix),
    };
    NumberSymbols {
        group,
        decimal,
        min_grouping,
        currency,
    }
}

fn currency_symbol(currency: &str) -> &str {
    match currency {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        other => other,
    }
}

fn currency_fraction_digits(currency: &str) -> u32 {
    match currency {
        "JPY" => 0,
        _ => 2,
    }
}

fn chrono_locale(locale: &str) -> chrono::Locale {
    match locale {
        "es" => chrono::Locale::es_ES,
        "fr" => chrono::Locale::fr_FR,
        "de" => chrono::Locale::de_DE,
        "it" => chrono::Locale::it_IT,
        "pt" => chrono::Locale::pt_BR,
        "ja" => chrono::Locale::ja_JP,
        "zh" => chrono::Locale::zh_CN,
        _ => chrono::Locale::en_US,
    }
}

fn date_pattern(locale: &str, style: DateStyle) -> &'static str {
    match (locale, style) {
        ("ja" | "zh", _) => "%Y年%-m月%-d日",
        ("es" | "fr" | "it", DateStyle::Short) => "%-d %b %Y",
        ("es" | "pt", DateStyle::Long) => "%-d de %B de %Y",
        ("pt", DateStyle::Short) => "%-d de %b de %Y",
        ("fr" | "it", DateStyle::Long) => "%-d %B %Y",
        ("de", DateStyle::Short) => "%-d. %b %Y",
        ("de", DateStyle::Long) => "%-d. %B %Y",
        (_, DateStyle::Short) => "%b %-d, %Y",
        (_, DateStyle::Long) => "%B %-d, %Y",
    }
}

/// Insert group separators into a string of ASCII digits.
fn group_digits(digits: &str, symbols: &NumberSymbols) -> String {
    if digits.len() < 3 + symbols.min_grouping {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * symbols.group.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(symbols.group);
        }
        out.push(c);
    }
    out
}

/// Format an already rounded value with exactly `fraction_digits` decimals,
/// or with trailing zeros trimmed when `fraction_digits` is `None`.
fn format_plain(value: Decimal, fraction_digits: Option<u32>, symbols: &NumberSymbols) -> String {
    let text = match fraction_digits {
        Some(digits) => {
            let mut fixed = value.abs();
            fixed.rescale(digits);
            fixed.to_string()
        }
        None => value.abs().normalize().to_string(),
    };
    let (integer, fraction) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    if value.is_sign_negative() && !value.is_zero() {
        out.push('-');
    }
    out.push_str(&group_digits(integer, symbols));
    if let Some(fraction) = fraction.filter(|f| !f.is_empty()) {
        out.push_str(symbols.decimal);
        out.push_str(fraction);
    }
    out
}

/// Built-in formatting tables for the catalog's locales.
///
/// Unknown locales format like `en`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFormat;

impl LocaleFormat for StandardFormat {
    /// Up to three fraction digits, trailing zeros dropped.
    fn format_number(&self, locale: &str, value: Decimal) -> String {
        let rounded = value.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero);
        format_plain(rounded, None, &symbols(locale))
    }

    fn format_currency(&self, locale: &str, amount: Decimal, currency: &str) -> String {
        let symbols = symbols(locale);
        let digits = currency_fraction_digits(currency);
        let rounded = if digits == 2 {
            round_for_display(amount)
        } else {
            amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
        };

        let number = format_plain(rounded.abs(), Some(digits), &symbols);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let symbol = currency_symbol(currency);
        match symbols.currency {
            SymbolPosition::Prefix => format!("{}{}{}", sign, symbol, number),
            SymbolPosition::PrefixSpaced => format!("{}{}{}{}", sign, symbol, NBSP, number),
            SymbolPosition::SuffixSpaced => format!("{}{}{}{}", sign, number, NBSP, symbol),
        }
    }

    fn format_date(&self, locale: &str, date: NaiveDate, style: DateStyle) -> String {
        date.and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized(date_pattern(locale, style), chrono_locale(locale))
            .to_string()
    }
}
