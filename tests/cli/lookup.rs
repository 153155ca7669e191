use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, DE_PO, stdout_json};

#[test]
fn test_lookup_prints_aligned_pairs() -> Result<()> {
    let test = CliTest::with_file("de.po", DE_PO)?;

    assert_cmd_snapshot!(test.command().args(["lookup", "de.po", "FILE"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    Open file  => Datei öffnen
    Save file  => (untranslated)
    Page 1 (2 shown, 2 matches for "FILE")

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_lookup_pagination_json() -> Result<()> {
    let test = CliTest::with_file("de.po", DE_PO)?;

    let output = test
        .command()
        .args(["lookup", "de.po", "", "--page", "2", "--page-size", "2", "--json"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["total_matches"], 3);
    assert_eq!(json["translations"], serde_json::json!({"Quit": ""}));
    Ok(())
}

#[test]
fn test_lookup_rejects_zero_page() -> Result<()> {
    let test = CliTest::with_file("de.po", DE_PO)?;

    assert_cmd_snapshot!(test.command().args(["lookup", "de.po", "file", "--page", "0"]), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: Invalid page value "0": must be a positive integer
    "#);
    Ok(())
}
