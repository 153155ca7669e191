use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::operations::Operations;

use super::helpers::{PathLocks, to_tool_result};
use super::types::{
    GetUntranslatedTermsParams, ListAllPoFilesParams, LookUpTranslationParams, TranslateParams,
};

/// Name advertised in the MCP initialize handshake.
pub const SERVER_NAME: &str = "PO Translation MCP Server";

#[derive(Clone)]
pub struct I18nMcpServer {
    tool_router: ToolRouter<Self>,
    operations: Arc<Operations>,
    locks: PathLocks,
}

#[tool_router]
impl I18nMcpServer {
    pub fn new(operations: Operations) -> Self {
        Self {
            tool_router: Self::tool_router(),
            operations: Arc::new(operations),
            locks: PathLocks::default(),
        }
    }

    /// List PO files under a directory
    #[tool(
        name = "listAllPoFiles",
        description = "List all .po files in the given directory with language information"
    )]
    pub async fn list_all_po_files(
        &self,
        params: Parameters<ListAllPoFilesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        to_tool_result(
            "listAllPoFiles",
            self.operations.list_po_files(&params.directory),
        )
    }

    /// Get terms that still need a translation
    #[tool(
        name = "getUntranslatedTerms",
        description = "Get untranslated terms from a PO file. After translating, you can use this tool to check if all terms are translated."
    )]
    pub async fn get_untranslated_terms(
        &self,
        params: Parameters<GetUntranslatedTermsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        to_tool_result(
            "getUntranslatedTerms",
            self.operations
                .get_untranslated_terms(&params.file_path, params.limit.as_ref()),
        )
    }

    /// Search msgids and return their current translations
    #[tool(
        name = "lookUpTranslation",
        description = "Search for a term key and return the translated value from a PO file. Use this tool to look up the previous translation of a term."
    )]
    pub async fn look_up_translation(
        &self,
        params: Parameters<LookUpTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        to_tool_result(
            "lookUpTranslation",
            self.operations.look_up_translation(
                &params.file_path,
                &params.search_term,
                params.page_size.as_ref(),
                params.page.as_ref(),
            ),
        )
    }

    /// Write translations into a PO file
    #[tool(
        name = "translate",
        description = "Translate terms in a PO file and save the changes. You can translate multiple terms at once or updating the existing translation."
    )]
    pub async fn translate(
        &self,
        params: Parameters<TranslateParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let lock = self.locks.lock_for(Path::new(&params.file_path));
        let _guard = lock.lock().await;

        to_tool_result(
            "translate",
            self.operations
                .translate(&params.file_path, &params.translations),
        )
    }
}

#[tool_handler]
impl ServerHandler for I18nMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PO Translation MCP Server helps AI agents translate gettext .po files.\n\n\
                 Available tools:\n\
                 1. listAllPoFiles - List .po files in a directory with their languages\n\
                 2. getUntranslatedTerms - Get terms whose msgstr is still empty\n\
                 3. lookUpTranslation - Search msgids and show their current translations (paginated)\n\
                 4. translate - Save translations (JSON object of msgid -> msgstr) into a .po file\n\n\
                 Recommended Workflow:\n\
                 1. Use listAllPoFiles to find the file for the target language\n\
                 2. Use getUntranslatedTerms to get a batch of terms to translate\n\
                 3. Use lookUpTranslation to keep wording consistent with earlier translations\n\
                 4. Use translate to save the batch\n\
                 5. Repeat from step 2 until getUntranslatedTerms returns no terms"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server(operations: Operations) -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = I18nMcpServer::new(operations);
            let server = service.serve(rmcp::transport::stdio()).await?;
            tracing::info!("PO Translation MCP Server listening on stdio");

            tokio::select! {
                quit = server.waiting() => {
                    quit?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("received interrupt");
                }
            }

            tracing::info!("shutting down");
            Ok(())
        })
}
