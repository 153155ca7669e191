//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `serve`: Start the MCP server on stdio
//! - `files`: List .po files under a directory with their languages
//! - `untranslated`: Show terms that still need a translation
//! - `lookup`: Search msgids and show their translations
//! - `translate`: Write translations into a .po file
//! - `init`: Create a configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the JSON result object instead of a report
    #[arg(long, global = true)]
    pub json: bool,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct FilesArgs {
    /// Directory to scan recursively
    pub directory: PathBuf,
}

#[derive(Debug, Args)]
pub struct UntranslatedArgs {
    /// Path to the .po file
    pub file: PathBuf,

    /// Maximum number of terms to show (overrides config file)
    #[arg(short, long, allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Path to the .po file
    pub file: PathBuf,

    /// Case-insensitive text to find in msgids
    pub search_term: String,

    /// Page number, starting at 1
    #[arg(long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Results per page (overrides config file)
    #[arg(long, allow_negative_numbers = true)]
    pub page_size: Option<i64>,
}

#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// Path to the .po file
    pub file: PathBuf,

    /// JSON object mapping msgid to translation, e.g. '{"Hello": "Hola"}'
    pub translations: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start MCP server for AI coding agents
    Serve,
    /// List .po files in a directory with their languages
    Files(FilesArgs),
    /// Show terms that have no translation yet
    Untranslated(UntranslatedArgs),
    /// Search terms and show their current translations
    Lookup(LookupArgs),
    /// Save translations into a .po file
    Translate(TranslateArgs),
    /// Initialize a new .i18n-mcp.json configuration file
    Init,
}
