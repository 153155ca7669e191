//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the PO catalog operations as MCP tools over stdio, for AI agents
//! that translate gettext catalogs.
//!
//! ## Module Structure
//!
//! - `helpers`: result conversion and per-file write locks
//! - `server`: tool router and server entry point
//! - `types`: tool parameter definitions

mod helpers;
mod server;
pub mod types;

pub use server::{I18nMcpServer, SERVER_NAME, run_server};
