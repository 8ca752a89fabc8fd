//! Report formatting and printing utilities.
//!
//! Turns command results into aligned terminal output. Kept apart from the
//! core so voyager can be used as a library without pulling in any of this.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{
    i18n::{Catalog, LocaleInfo},
    parsers::json::MessageScanWarning,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// A labelled amount, already localized and formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountLine {
    pub label: String,
    pub amount: String,
    /// Optional trailing note (e.g. a due date).
    pub note: Option<String>,
}

impl AmountLine {
    pub fn new(label: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            amount: amount.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Printable price quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteReport {
    pub heading: String,
    pub lines: Vec<AmountLine>,
    pub total: AmountLine,
    pub installments: Vec<AmountLine>,
}

fn pad(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(UnicodeWidthStr::width(text)))
}

fn write_table<W: Write>(lines: &[&AmountLine], writer: &mut W, bold_last: bool) {
    let label_width = lines
        .iter()
        .map(|l| UnicodeWidthStr::width(l.label.as_str()))
        .max()
        .unwrap_or(0);
    let amount_width = lines
        .iter()
        .map(|l| UnicodeWidthStr::width(l.amount.as_str()))
        .max()
        .unwrap_or(0);

    for (i, line) in lines.iter().enumerate() {
        let mut row = format!(
            "  {}{}  {}{}",
            line.label,
            pad(&line.label, label_width),
            pad(&line.amount, amount_width),
            line.amount
        );
        if let Some(note) = &line.note {
            row.push_str("  ");
            row.push_str(note);
        }
        if bold_last && i + 1 == lines.len() {
            let _ = writeln!(writer, "{}", row.bold());
        } else {
            let _ = writeln!(writer, "{}", row);
        }
    }
}

pub fn print_quote(report: &QuoteReport) {
    print_quote_to(report, &mut io::stdout().lock());
}

/// Print a quote: heading, breakdown rows, total, then any installments.
pub fn print_quote_to<W: Write>(report: &QuoteReport, writer: &mut W) {
    let _ = writeln!(writer, "{}", report.heading.bold());

    let mut rows: Vec<&AmountLine> = report.lines.iter().collect();
    rows.push(&report.total);
    write_table(&rows, writer, true);

    if !report.installments.is_empty() {
        let _ = writeln!(writer);
        let rows: Vec<&AmountLine> = report.installments.iter().collect();
        write_table(&rows, writer, false);
    }
}

pub fn print_locales(locales: &[(LocaleInfo, usize)], current: &str) {
    print_locales_to(locales, current, &mut io::stdout().lock());
}

/// Print one locale per line, marking the current one with `*`.
pub fn print_locales_to<W: Write>(locales: &[(LocaleInfo, usize)], current: &str, writer: &mut W) {
    let name_width = locales
        .iter()
        .map(|(info, _)| UnicodeWidthStr::width(info.name.as_str()))
        .max()
        .unwrap_or(0);
    let code_width = locales
        .iter()
        .map(|(info, _)| info.code.len())
        .max()
        .unwrap_or(0);

    for (info, key_count) in locales {
        let marker = if info.code == current { "*" } else { " " };
        let row = format!(
            "{} {}{}  {}{}  {} {}",
            marker,
            info.code,
            pad(&info.code, code_width),
            info.name,
            pad(&info.name, name_width),
            key_count,
            if *key_count == 1 { "key" } else { "keys" }
        );
        if info.code == current {
            let _ = writeln!(writer, "{}", row.green());
        } else {
            let _ = writeln!(writer, "{}", row);
        }
    }
}

pub fn print_warning(message: &str) {
    print_warning_to(message, &mut io::stderr().lock());
}

pub fn print_warning_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), message);
}

/// Print a diagnostic line to stderr, only in verbose mode.
pub fn print_verbose(message: &str, verbose: bool) {
    if verbose {
        let _ = writeln!(io::stderr().lock(), "{} {}", "note:".cyan(), message);
    }
}

/// Warn about message files that could not be loaded.
pub fn print_catalog_warnings(warnings: &[MessageScanWarning], verbose: bool) {
    print_catalog_warnings_to(warnings, verbose, &mut io::stderr().lock());
}

pub fn print_catalog_warnings_to<W: Write>(
    warnings: &[MessageScanWarning],
    verbose: bool,
    writer: &mut W,
) {
    if warnings.is_empty() {
        return;
    }
    if !verbose {
        print_warning_to(
            &format!(
                "{} message file(s) could not be loaded (use {} for details)",
                warnings.len(),
                "-v".cyan()
            ),
            writer,
        );
        return;
    }
    for warning in warnings {
        print_warning_to(
            &format!("skipped {}: {}", warning.file_path, warning.error),
            writer,
        );
    }
}

/// Report message values that are not strings and were left out of the catalog.
pub fn print_skipped_values(catalog: &Catalog, verbose: bool) {
    print_skipped_values_to(catalog, verbose, &mut io::stderr().lock());
}

pub fn print_skipped_values_to<W: Write>(catalog: &Catalog, verbose: bool, writer: &mut W) {
    let skipped: Vec<(&str, &str)> = catalog.skipped_values().collect();
    if skipped.is_empty() {
        return;
    }
    if !verbose {
        print_warning_to(
            &format!(
                "{} non-string message value(s) ignored (use {} for details)",
                skipped.len(),
                "-v".cyan()
            ),
            writer,
        );
        return;
    }
    for (source, key) in skipped {
        print_warning_to(
            &format!("ignored non-string value at \"{}\" in {}", key, source),
            writer,
        );
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", SUCCESS_MARK.green(), message.green());
}
