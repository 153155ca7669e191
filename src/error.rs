//! Error kinds surfaced by catalog operations.
//!
//! Every operation error can be turned into an [`ErrorResult`], the structured
//! object returned to tool callers instead of failing the host process.

use std::path::PathBuf;

use serde::Serialize;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{name} parameter is required")]
    MissingParameter { name: &'static str },

    #[error("Invalid {name} value {value:?}: {reason}")]
    InvalidNumericInput {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("PO file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error reading PO file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing PO file: {source}")]
    InvalidEncoding {
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Invalid translations JSON: {source}")]
    MalformedTranslationsPayload {
        #[source]
        source: serde_json::Error,
    },

    #[error("Error writing to PO file {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Error scanning for PO files in {}: {source}", path.display())]
    DirectoryScan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MissingParameter { .. } => "missing_parameter",
            Error::InvalidNumericInput { .. } => "invalid_numeric_input",
            Error::FileNotFound { .. } => "file_not_found",
            Error::FileRead { .. } => "file_read_error",
            Error::InvalidEncoding { .. } => "file_read_error",
            Error::MalformedTranslationsPayload { .. } => "malformed_translations_payload",
            Error::FileWrite { .. } => "file_write_error",
            Error::DirectoryNotFound { .. } => "file_not_found",
            Error::DirectoryScan { .. } => "file_read_error",
        }
    }

    /// Convert this error into the structured result reported to callers.
    pub fn to_result(&self) -> ErrorResult {
        ErrorResult {
            error: true,
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// Structured error object: an error flag plus a human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorResult {
    pub error: bool,
    pub kind: &'static str,
    pub message: String,
}
