use i18n_mcp::{mcp::types::LookUpTranslationParams, operations::NumericArg};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_error_json, extract_tool_result_json, server};

const MENU_PO: &str = r#"msgid ""
msgstr ""
"Language: de\n"

msgid "File"
msgstr "Datei"

msgid "Open file"
msgstr "Datei öffnen"

msgid "Save file"
msgstr ""

msgid "Profile"
msgstr "Profil"

msgid "Quit"
msgstr "Beenden"
"#;

fn params(
    fixture: &McpTestFixture,
    search_term: &str,
    page_size: Option<NumericArg>,
    page: Option<NumericArg>,
) -> Parameters<LookUpTranslationParams> {
    Parameters(LookUpTranslationParams {
        file_path: fixture.path("de.po"),
        search_term: search_term.to_string(),
        page_size,
        page,
    })
}

fn fixture() -> McpTestFixture {
    McpTestFixture::with_po_files(vec![("de.po", MENU_PO)]).unwrap()
}

#[tokio::test]
async fn test_look_up_translation_case_insensitive_in_file_order() {
    let fixture = fixture();

    let result = server()
        .look_up_translation(params(&fixture, "FILE", None, None))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["search_term"], "FILE");
    assert_eq!(json["page"], 1);
    assert_eq!(json["page_size"], 10);
    assert_eq!(json["total_matches"], 4);
    assert_eq!(
        json["translations"],
        json!({
            "File": "Datei",
            "Open file": "Datei öffnen",
            "Save file": "",
            "Profile": "Profil"
        })
    );
    let keys: Vec<&String> = json["translations"].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["File", "Open file", "Save file", "Profile"]);
}

#[tokio::test]
async fn test_look_up_translation_paginates() {
    let fixture = fixture();

    let result = server()
        .look_up_translation(params(
            &fixture,
            "file",
            Some(NumericArg::Text("3".to_string())),
            Some(NumericArg::Int(2)),
        ))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["page"], 2);
    assert_eq!(json["page_size"], 3);
    assert_eq!(json["total_matches"], 4);
    assert_eq!(json["translations"], json!({"Profile": "Profil"}));
}

#[tokio::test]
async fn test_look_up_translation_page_past_end_is_empty() {
    let fixture = fixture();

    let result = server()
        .look_up_translation(params(&fixture, "file", None, Some(NumericArg::Int(5))))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["total_matches"], 4);
    assert_eq!(json["translations"], json!({}));
}

#[tokio::test]
async fn test_look_up_translation_no_match() {
    let fixture = fixture();

    let result = server()
        .look_up_translation(params(&fixture, "zzz", None, None))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["total_matches"], 0);
    assert_eq!(json["translations"], json!({}));
}

#[tokio::test]
async fn test_look_up_translation_rejects_invalid_paging() {
    let fixture = fixture();

    let result = server()
        .look_up_translation(params(&fixture, "file", Some(NumericArg::Int(-1)), None))
        .await
        .unwrap();
    assert_eq!(extract_tool_error_json(&result)["kind"], "invalid_numeric_input");

    let result = server()
        .look_up_translation(params(
            &fixture,
            "file",
            None,
            Some(NumericArg::Text("first".to_string())),
        ))
        .await
        .unwrap();
    assert_eq!(extract_tool_error_json(&result)["kind"], "invalid_numeric_input");
}
