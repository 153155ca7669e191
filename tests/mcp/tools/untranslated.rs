use i18n_mcp::{mcp::types::GetUntranslatedTermsParams, operations::NumericArg};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_error_json, extract_tool_result_json, po_catalog, server};

fn params(file_path: String, limit: Option<NumericArg>) -> Parameters<GetUntranslatedTermsParams> {
    Parameters(GetUntranslatedTermsParams { file_path, limit })
}

#[tokio::test]
async fn test_get_untranslated_terms_lists_empty_msgstrs() {
    let catalog = po_catalog("zh-TW");
    let fixture = McpTestFixture::with_po_files(vec![("zh-TW.po", &catalog)]).unwrap();

    let result = server()
        .get_untranslated_terms(params(fixture.path("zh-TW.po"), None))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["file_path"], fixture.path("zh-TW.po"));
    assert_eq!(json["limit"], 10);
    assert_eq!(json["count"], 2);
    assert_eq!(json["language"], "zh-TW");
    assert_eq!(
        json["untranslated_terms"],
        json!({"Untranslated": "", "Goodbye": ""})
    );
    let keys: Vec<&String> = json["untranslated_terms"]
        .as_object()
        .unwrap()
        .keys()
        .collect();
    assert_eq!(keys, vec!["Untranslated", "Goodbye"]);
}

#[tokio::test]
async fn test_get_untranslated_terms_respects_limit_as_string() {
    let catalog = po_catalog("fr");
    let fixture = McpTestFixture::with_po_files(vec![("fr.po", &catalog)]).unwrap();

    let result = server()
        .get_untranslated_terms(params(
            fixture.path("fr.po"),
            Some(NumericArg::Text("1".to_string())),
        ))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["limit"], 1);
    assert_eq!(json["count"], 1);
    assert_eq!(json["untranslated_terms"], json!({"Untranslated": ""}));
}

#[tokio::test]
async fn test_get_untranslated_terms_non_positive_limit_uses_default() {
    let catalog = po_catalog("fr");
    let fixture = McpTestFixture::with_po_files(vec![("fr.po", &catalog)]).unwrap();

    let result = server()
        .get_untranslated_terms(params(fixture.path("fr.po"), Some(NumericArg::Int(0))))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["count"], 2);
}

#[tokio::test]
async fn test_get_untranslated_terms_invalid_limit() {
    let catalog = po_catalog("fr");
    let fixture = McpTestFixture::with_po_files(vec![("fr.po", &catalog)]).unwrap();

    let result = server()
        .get_untranslated_terms(params(
            fixture.path("fr.po"),
            Some(NumericArg::Text("many".to_string())),
        ))
        .await
        .unwrap();
    let json = extract_tool_error_json(&result);

    assert_eq!(json["kind"], "invalid_numeric_input");
    assert!(json["message"].as_str().unwrap().contains("many"));
}

#[tokio::test]
async fn test_get_untranslated_terms_missing_file() {
    let fixture = McpTestFixture::new().unwrap();

    let result = server()
        .get_untranslated_terms(params(fixture.path("missing.po"), None))
        .await
        .unwrap();
    let json = extract_tool_error_json(&result);

    assert_eq!(json["kind"], "file_not_found");
    assert!(json["message"].as_str().unwrap().contains("missing.po"));
}

#[tokio::test]
async fn test_get_untranslated_terms_requires_file_path() {
    let err = server()
        .get_untranslated_terms(params(String::new(), None))
        .await
        .unwrap_err();

    assert!(err.message.contains("file_path"));
}
