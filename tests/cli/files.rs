use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, DE_PO, stdout_json};

#[test]
fn test_files_lists_po_files_with_language() -> Result<()> {
    let test = CliTest::with_file("locales/de.po", DE_PO)?;
    test.write_file("locales/README.md", "# Locales")?;

    assert_cmd_snapshot!(test.command().args(["files", "locales"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    locales/de.po  de
    ✓ Found 1 PO file in locales

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_files_json_output() -> Result<()> {
    let test = CliTest::with_file("de.po", DE_PO)?;
    test.write_file("fr.po", &DE_PO.replace("Language: de", "Language: fr"))?;

    let output = test.command().args(["files", ".", "--json"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["count"], 2);
    assert_eq!(json["files"][0]["language"], "de");
    assert_eq!(json["files"][1]["language"], "fr");
    Ok(())
}

#[test]
fn test_files_honors_config_ignores() -> Result<()> {
    let test = CliTest::with_file("app/de.po", DE_PO)?;
    test.write_file("vendor/fr.po", DE_PO)?;
    test.write_file(".i18n-mcp.json", r#"{ "ignores": ["**/vendor/**"] }"#)?;

    let output = test.command().args(["files", ".", "--json"]).output()?;

    let json = stdout_json(&output);
    assert_eq!(json["count"], 1);
    assert_eq!(json["files"][0]["path"], "./app/de.po");
    Ok(())
}

#[test]
fn test_files_missing_directory_is_error() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["files", "missing"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: Directory not found: missing
    ");
    Ok(())
}
