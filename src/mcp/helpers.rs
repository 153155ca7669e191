//! Helper functions for MCP server operations.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use crate::error::Error;

/// Turn an operation outcome into a tool result.
///
/// Missing parameters fail the call at the protocol level. Every other error
/// becomes a tool result flagged as an error, carrying the structured
/// `ErrorResult` JSON.
pub fn to_tool_result<T: Serialize>(
    tool: &str,
    outcome: Result<T, Error>,
) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(value) => {
            let json_str = serde_json::to_string_pretty(&value).map_err(|e| {
                McpError::internal_error(format!("JSON serialization failed: {}", e), None)
            })?;
            Ok(CallToolResult::success(vec![Content::text(json_str)]))
        }
        Err(err @ Error::MissingParameter { .. }) => {
            Err(McpError::invalid_params(err.to_string(), None))
        }
        Err(err) => {
            tracing::warn!(tool, kind = err.kind(), "{}", err);
            let json_str = serde_json::to_string_pretty(&err.to_result()).map_err(|e| {
                McpError::internal_error(format!("JSON serialization failed: {}", e), None)
            })?;
            Ok(CallToolResult::error(vec![Content::text(json_str)]))
        }
    }
}

/// One async mutex per file path, so that writes to the same PO file from
/// concurrent tool calls happen one at a time.
#[derive(Debug, Clone, Default)]
pub struct PathLocks {
    locks: Arc<Mutex<HashMap<PathBuf, Arc<tokio::sync::Mutex<()>>>>>,
}

impl PathLocks {
    /// The lock for `path`. Entries no caller holds any more are dropped here,
    /// so the map only keeps paths with a write in flight.
    pub fn lock_for(&self, path: &Path) -> Arc<tokio::sync::Mutex<()>> {
        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks.retain(|held, lock| *held == key || Arc::strong_count(lock) > 1);
        locks.entry(key).or_default().clone()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
