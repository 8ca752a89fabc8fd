use std::str::FromStr;

use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_quote_reference_booking() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.quote_command().args([
        "--base-price",
        "2450",
        "--extra",
        "insurance",
        "--extra",
        "flights",
        "--locale",
        "en",
    ]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Book Trip (Nights: 1, travelers: 1)
      Accommodation  $2,450.00
      Extras           $970.00
      Service Fee      $171.00
      Taxes            $342.00
      Total          $3,933.00

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_quote_defaults_to_spanish() -> Result<()> {
    let test = CliTest::new()?;

    // Spanish amounts put a no-break space before the symbol.
    insta::with_settings!({filters => vec![("\u{a0}", " ")]}, {
        assert_cmd_snapshot!(test.quote_command().args([
            "--base-price",
            "100",
            "--nights",
            "7",
            "--guests",
            "2",
            "--currency",
            "EUR",
        ]), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        Reservar Viaje (Noches: 7, viajeros: 2)
          Alojamiento         1400,00 €
          Extras                 0,00 €
          Tarifa de servicio    70,00 €
          Tasas e impuestos    140,00 €
          Total               1610,00 €

        ----- stderr -----
        ");
    });

    Ok(())
}

#[test]
fn test_quote_installments_from_stay_dates() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.quote_command().args([
        "--base-price",
        "1000",
        "--check-in",
        "2026-01-01",
        "--check-out",
        "2026-01-04",
        "--installments",
        "3",
        "--locale",
        "en",
    ]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Book Trip (Nights: 3, travelers: 1)
      Accommodation  $3,000.00
      Extras             $0.00
      Service Fee      $150.00
      Taxes            $300.00
      Total          $3,450.00

      Payment 1 of 3  $1,150.00  Jan 1, 2026
      Payment 2 of 3  $1,150.00  Jan 31, 2026
      Payment 3 of 3  $1,150.00  Mar 2, 2026

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_quote_json_output() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .quote_command()
        .args([
            "--base-price",
            "2450",
            "--extra",
            "insurance",
            "--extra",
            "flights=850",
            "--json",
        ])
        .output()?;

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["locale"], "es");
    assert_eq!(json["currency"], "USD");
    assert_eq!(json["charge"]["nights"], 1);
    assert_eq!(json["charge"]["extras"][1]["name"], "flights");

    let total = Decimal::from_str(json["price"]["total"].as_str().unwrap())?;
    assert_eq!(total, Decimal::from(3933));
    let extras = Decimal::from_str(json["price"]["breakdown"]["Extras"].as_str().unwrap())?;
    assert_eq!(extras, Decimal::from(970));
    assert_eq!(json["installments"].as_array().map(Vec::len), Some(0));

    Ok(())
}

#[test]
fn test_quote_uses_config_rates() -> Result<()> {
    let test = CliTest::with_file(
        ".voyagerrc.json",
        r#"{"taxRate": 0.2, "serviceFeeRate": 0, "currency": "EUR"}"#,
    )?;

    assert_cmd_snapshot!(test.quote_command().args(["--base-price", "100", "--locale", "en"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Book Trip (Nights: 1, travelers: 1)
      Accommodation  €100.00
      Extras           €0.00
      Service Fee      €0.00
      Taxes           €20.00
      Total          €120.00

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_quote_rejects_negative_price() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.quote_command().arg("--base-price=-5"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: invalid basePrice: must not be negative
    ");

    Ok(())
}

#[test]
fn test_quote_rejects_zero_guests() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.quote_command().args(["--base-price", "100", "--guests", "0"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: invalid guests: must be at least 1
    ");

    Ok(())
}

#[test]
fn test_quote_rejects_full_tax_rate() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.quote_command().args(["--base-price", "100", "--tax-rate", "1"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: invalid taxRate: 1 is outside [0, 1)
    ");

    Ok(())
}

#[test]
fn test_quote_rejects_amount_beyond_precision() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.quote_command().args([
        "--base-price",
        "0.3333333333333333333333333333",
        "--nights",
        "7",
        "--guests",
        "3",
        "--extra",
        "flights=123456789.123456789",
    ]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: invalid extras: amount cannot be priced exactly
    ");

    Ok(())
}

#[test]
fn test_quote_unknown_extra() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.quote_command().args(["--base-price", "100", "--extra", "yacht"]), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Unknown extra "yacht". Use NAME=PRICE or one of: insurance, flights, transfers, tours
    "#);

    Ok(())
}
