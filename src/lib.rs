//! i18n-mcp - gettext PO catalog tools for AI translation agents
//!
//! Parses `.po` catalogs, reports untranslated terms, searches existing
//! translations and writes new ones back. The operations are served to AI
//! agents over the Model Context Protocol on stdio, and are also available
//! as CLI subcommands.
//!
//! ## Module Structure
//!
//! - `po`: PO format model, parser and serializer
//! - `service`: Query and mutation service over one catalog
//! - `locator`: Recursive `.po` file discovery
//! - `operations`: The four tool operations and their result objects
//! - `error`: Error kinds and the structured error result
//! - `config`: Configuration file loading and parsing
//! - `logging`: Diagnostic logging on stderr
//! - `mcp`: Model Context Protocol server implementation
//! - `cli`: Command-line interface layer

pub mod cli;
pub mod config;
pub mod error;
pub mod locator;
pub mod logging;
pub mod mcp;
pub mod operations;
pub mod po;
pub mod service;
