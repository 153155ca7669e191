//! Canonical PO rendering.

use std::fmt::Write;

use super::catalog::{Catalog, MessageEntry};
use super::escape::escape;

/// Render a catalog as PO text: header block first, then every entry in
/// catalog order, blocks separated by one blank line.
pub fn serialize(catalog: &Catalog) -> String {
    let mut out = String::new();
    let header = catalog.header();

    push_comments(&mut out, &header.comments);
    out.push_str("msgid \"\"\nmsgstr \"\"\n");
    for (name, value) in header.fields() {
        let _ = writeln!(out, "\"{}\"", escape(&format!("{name}: {value}\n")));
    }

    for entry in catalog {
        out.push('\n');
        push_entry(&mut out, entry);
    }

    if !catalog.trailing_comments.is_empty() {
        out.push('\n');
        push_comments(&mut out, &catalog.trailing_comments);
    }

    out
}

fn push_comments(out: &mut String, comments: &[String]) {
    for comment in comments {
        out.push_str(comment);
        out.push('\n');
    }
}

fn push_entry(out: &mut String, entry: &MessageEntry) {
    push_comments(out, &entry.comments);
    if let Some(context) = &entry.context {
        push_keyword(out, "msgctxt", context);
    }
    push_keyword(out, "msgid", &entry.key);
    match &entry.plural {
        Some(plural) => {
            push_keyword(out, "msgid_plural", &plural.msgid_plural);
            push_keyword(out, "msgstr[0]", &entry.value);
            for (n, form) in plural.other_forms.iter().enumerate() {
                push_keyword(out, &format!("msgstr[{}]", n + 1), form);
            }
        }
        None => push_keyword(out, "msgstr", &entry.value),
    }
}

/// Write `keyword "text"`, switching to the multi-line form when the text has
/// a newline before its end.
fn push_keyword(out: &mut String, keyword: &str, text: &str) {
    let multiline = text.trim_end_matches('\n').contains('\n');
    if !multiline {
        let _ = writeln!(out, "{keyword} \"{}\"", escape(text));
        return;
    }

    let _ = writeln!(out, "{keyword} \"\"");
    for segment in text.split_inclusive('\n') {
        let _ = writeln!(out, "\"{}\"", escape(segment));
    }
}
