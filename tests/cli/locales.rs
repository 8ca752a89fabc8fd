use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_locales_listing() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.locales_command().args(["--locale", "en"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      de  Deutsch    20 keys
    * en  English    48 keys
      es  Español    48 keys
      fr  Français   20 keys
      it  Italiano   20 keys
      ja  日本語     20 keys
      pt  Português  20 keys
      zh  中文       20 keys

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_locales_json() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.locales_command().arg("--json").output()?;

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout)?;
    let locales = json.as_array().unwrap();
    assert_eq!(locales.len(), 8);

    let es = locales.iter().find(|l| l["code"] == "es").unwrap();
    assert_eq!(es["name"], "Español");
    assert_eq!(es["current"], true);
    assert_eq!(es["keyCount"], 48);

    let en = locales.iter().find(|l| l["code"] == "en").unwrap();
    assert_eq!(en["fallback"], true);
    assert_eq!(en["current"], false);

    Ok(())
}
