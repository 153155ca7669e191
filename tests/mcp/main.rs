use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use i18n_mcp::{config::Config, mcp::I18nMcpServer, operations::Operations};
use serde_json::Value;
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary directory of locale `.po` files.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test directory holding the given `(relative path, content)` files
    pub fn with_po_files(files: Vec<(&str, &str)>) -> Result<Self> {
        let fixture = Self::new()?;
        for (path, content) in files {
            fixture.write_po(path, content)?;
        }
        Ok(fixture)
    }

    pub fn write_po(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write PO file: {}", path.display()))
    }

    pub fn read_po(&self, relative_path: &str) -> Result<String> {
        let path = self.project_root.join(relative_path);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read PO file: {}", path.display()))
    }

    /// Absolute path of a file in the fixture, as a string (for MCP parameters)
    pub fn path(&self, relative_path: &str) -> String {
        self.project_root
            .join(relative_path)
            .to_string_lossy()
            .to_string()
    }

    /// Get the fixture root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

pub fn server() -> I18nMcpServer {
    I18nMcpServer::new(Operations::new(Config::default()).unwrap())
}

/// A catalog with a header, one translated and two untranslated entries.
pub fn po_catalog(language: &str) -> String {
    format!(
        r#"msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"
"Language: {language}\n"

#: src/app.js:1
msgid "Hello"
msgstr "Hello"

msgid "Welcome"
msgstr "歡迎"

msgid "Untranslated"
msgstr ""

msgid "Goodbye"
msgstr ""
"#
    )
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }
    parse_content(result)
}

/// Extract the structured error object from a CallToolResult flagged as an error
pub fn extract_tool_error_json(result: &rmcp::model::CallToolResult) -> Value {
    assert_eq!(
        result.is_error,
        Some(true),
        "Tool call should have returned an error: {:?}",
        result
    );
    let json = parse_content(result);
    assert_eq!(json["error"], true);
    json
}

fn parse_content(result: &rmcp::model::CallToolResult) -> Value {
    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let text_content = result.content[0]
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}

#[test]
fn test_server_info_advertises_name_and_version() {
    use rmcp::ServerHandler;

    let info = server().get_info();

    assert_eq!(info.server_info.name, i18n_mcp::mcp::SERVER_NAME);
    assert_eq!(info.server_info.name, "PO Translation MCP Server");
    assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    assert!(info.capabilities.tools.is_some());
}
