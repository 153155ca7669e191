//! Report formatting and printing utilities.
//!
//! Kept apart from the operations so the crate can be used as a library.
//! With `--json` every command prints the same object an MCP tool returns.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;
use serde_json::{Map, Value};
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary};
use crate::error::ErrorResult;
use crate::operations::{LookUpResult, PoFilesResult, TranslateResult, UntranslatedTermsResult};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout (errors go to stderr unless `json`).
pub fn print(result: &CommandResult, json: bool) {
    let mut stdout = io::stdout().lock();

    if json {
        print_json(&result.summary, &mut stdout);
        return;
    }

    match &result.summary {
        CommandSummary::Files(files) => print_files(files, &mut stdout),
        CommandSummary::Untranslated(terms) => print_untranslated(terms, &mut stdout),
        CommandSummary::Lookup(lookup) => print_lookup(lookup, &mut stdout),
        CommandSummary::Translate(translate) => print_translate(translate, &mut stdout),
        CommandSummary::Init(init) => print_init(init, &mut stdout),
        CommandSummary::Failed(err) => print_error(err, &mut io::stderr().lock()),
    }
}

fn print_json<W: Write>(summary: &CommandSummary, writer: &mut W) {
    let rendered = match summary {
        CommandSummary::Files(r) => to_pretty(r),
        CommandSummary::Untranslated(r) => to_pretty(r),
        CommandSummary::Lookup(r) => to_pretty(r),
        CommandSummary::Translate(r) => to_pretty(r),
        CommandSummary::Init(r) => to_pretty(r),
        CommandSummary::Failed(r) => to_pretty(r),
    };
    let _ = writeln!(writer, "{}", rendered);
}

fn to_pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| {
        format!(
            "{{\"error\": true, \"message\": \"Failed to serialize result: {}\"}}",
            err
        )
    })
}

fn print_files<W: Write>(result: &PoFilesResult, writer: &mut W) {
    let width = result
        .files
        .iter()
        .map(|file| UnicodeWidthStr::width(file.path.as_str()))
        .max()
        .unwrap_or(0);

    for file in &result.files {
        let language = if file.language.is_empty() {
            "-".dimmed()
        } else {
            file.language.as_str().cyan()
        };
        let _ = writeln!(
            writer,
            "{}  {}",
            pad(&file.path, width),
            language
        );
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Found {} PO {} in {}",
            result.count,
            plural(result.count, "file", "files"),
            result.directory
        )
        .green()
    );
}

fn print_untranslated<W: Write>(result: &UntranslatedTermsResult, writer: &mut W) {
    if result.count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("All terms in {} are translated", result.file_path).green()
        );
        return;
    }

    for key in result.untranslated_terms.keys() {
        let _ = writeln!(writer, "  {} {}", "-".blue(), key);
    }

    let language = if result.language.is_empty() {
        String::new()
    } else {
        format!(" ({})", result.language)
    };
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!(
            "{} untranslated {} in {}{} (limit {})",
            result.count,
            plural(result.count, "term", "terms"),
            result.file_path,
            language,
            result.limit
        )
        .red()
    );
}

fn print_lookup<W: Write>(result: &LookUpResult, writer: &mut W) {
    print_pairs(&result.translations, writer);

    let _ = writeln!(
        writer,
        "{}",
        format!(
            "Page {} ({} shown, {} {} for \"{}\")",
            result.page,
            result.translations.len(),
            result.total_matches,
            plural(result.total_matches, "match", "matches"),
            result.search_term
        )
        .dimmed()
    );
}

fn print_translate<W: Write>(result: &TranslateResult, writer: &mut W) {
    print_pairs(&result.translations, writer);
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), result.message.green());
}

fn print_init<W: Write>(result: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", result.created).green()
    );
}

fn print_error<W: Write>(err: &ErrorResult, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "error:".bold().red(), err.message);
}

/// One `msgid => msgstr` line per pair, arrows aligned on display width.
fn print_pairs<W: Write>(pairs: &Map<String, Value>, writer: &mut W) {
    let width = pairs
        .keys()
        .map(|key| UnicodeWidthStr::width(key.as_str()))
        .max()
        .unwrap_or(0);

    for (key, value) in pairs {
        let value = value.as_str().unwrap_or_default();
        let value = if value.is_empty() {
            "(untranslated)".dimmed()
        } else {
            value.green()
        };
        let _ = writeln!(writer, "{}  {} {}", pad(key, width), "=>".blue(), value);
    }
}

/// Right-pad `text` to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(padding))
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
