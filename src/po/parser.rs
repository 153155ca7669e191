//! Line-oriented PO parser.
//!
//! The parser is tolerant: lines it does not understand are skipped, so
//! arbitrary text yields an empty catalog rather than an error. The only hard
//! failure is input that is not UTF-8.

use super::catalog::{Catalog, Header, MessageEntry, Plural};
use super::escape::parse_quoted;
use crate::error::{Error, Result};

/// Highest plural form count accepted in a `msgstr[N]` keyword.
const MAX_PLURAL_FORMS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Context,
    Id,
    IdPlural,
    Str(usize),
}

#[derive(Debug, Default)]
struct PendingEntry {
    comments: Vec<String>,
    context: Option<String>,
    msgid: Option<String>,
    msgid_plural: Option<String>,
    msgstr: Vec<String>,
    field: Option<Field>,
}

impl PendingEntry {
    fn has_message(&self) -> bool {
        self.msgid.is_some() || self.context.is_some()
    }

    fn current_mut(&mut self) -> Option<&mut String> {
        match self.field? {
            Field::Context => self.context.as_mut(),
            Field::Id => self.msgid.as_mut(),
            Field::IdPlural => self.msgid_plural.as_mut(),
            Field::Str(n) => self.msgstr.get_mut(n),
        }
    }

    fn set_msgstr(&mut self, n: usize, value: String) {
        if self.msgstr.len() <= n {
            self.msgstr.resize(n + 1, String::new());
        }
        self.msgstr[n] = value;
        self.field = Some(Field::Str(n));
    }
}

struct Parser {
    catalog: Catalog,
    header_seen: bool,
    pending: PendingEntry,
}

impl Parser {
    fn new() -> Self {
        Self {
            catalog: Catalog::default(),
            header_seen: false,
            pending: PendingEntry::default(),
        }
    }

    fn line(&mut self, line: &str) {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            self.flush();
            return;
        }

        if trimmed.starts_with('#') {
            if self.pending.has_message() {
                self.flush();
            }
            self.pending.comments.push(trimmed.to_string());
            return;
        }

        if trimmed.starts_with('"') {
            if let (Some(text), Some(current)) = (parse_quoted(trimmed), self.pending.current_mut())
            {
                current.push_str(&text);
            }
            return;
        }

        let (keyword, rest) = trimmed.split_once(char::is_whitespace).unwrap_or((trimmed, ""));
        let Some(text) = parse_quoted(rest) else {
            self.pending.field = None;
            return;
        };

        match keyword {
            "msgctxt" => {
                if self.pending.has_message() {
                    self.flush();
                }
                self.pending.context = Some(text);
                self.pending.field = Some(Field::Context);
            }
            "msgid" => {
                if self.pending.msgid.is_some() {
                    self.flush();
                } else {
                    // A msgstr seen before any msgid belongs to nothing.
                    self.pending.msgstr.clear();
                    self.pending.msgid_plural = None;
                }
                self.pending.msgid = Some(text);
                self.pending.field = Some(Field::Id);
            }
            "msgid_plural" => {
                self.pending.msgid_plural = Some(text);
                self.pending.field = Some(Field::IdPlural);
            }
            "msgstr" => self.pending.set_msgstr(0, text),
            _ => match plural_index(keyword) {
                Some(n) => self.pending.set_msgstr(n, text),
                None => self.pending.field = None,
            },
        }
    }

    fn flush(&mut self) {
        if self.pending.msgid.is_none() {
            // Comments without a message stay attached to whatever comes next.
            self.pending = PendingEntry {
                comments: std::mem::take(&mut self.pending.comments),
                ..Default::default()
            };
            return;
        }

        let pending = std::mem::take(&mut self.pending);
        let msgid = pending.msgid.unwrap_or_default();
        let mut msgstr = pending.msgstr.into_iter();
        let value = msgstr.next().unwrap_or_default();

        if msgid.is_empty() && pending.context.is_none() {
            if self.header_seen {
                return;
            }
            let mut header = Header::from_msgstr(&value);
            header.comments = pending.comments;
            *self.catalog.header_mut() = header;
            self.header_seen = true;
            return;
        }

        self.catalog.insert(MessageEntry {
            key: msgid,
            value,
            context: pending.context,
            plural: pending.msgid_plural.map(|msgid_plural| Plural {
                msgid_plural,
                other_forms: msgstr.collect(),
            }),
            comments: pending.comments,
        });
    }

    fn finish(mut self) -> Catalog {
        self.flush();
        let leftover = std::mem::take(&mut self.pending.comments);
        if !self.header_seen && self.catalog.is_empty() {
            self.catalog.header_mut().comments = leftover;
        } else {
            self.catalog.trailing_comments = leftover;
        }
        self.catalog
    }
}

/// `msgstr[3]` -> `Some(3)`. Indexes past [`MAX_PLURAL_FORMS`] are rejected.
fn plural_index(keyword: &str) -> Option<usize> {
    keyword
        .strip_prefix("msgstr[")?
        .strip_suffix(']')?
        .trim()
        .parse()
        .ok()
        .filter(|&n| n < MAX_PLURAL_FORMS)
}

/// Parse PO source text into a catalog.
pub fn parse(source: &str) -> Catalog {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut parser = Parser::new();
    for line in source.lines() {
        parser.line(line);
    }
    parser.finish()
}

/// Parse raw PO file bytes. Fails only when the bytes are not UTF-8.
pub fn parse_bytes(bytes: Vec<u8>) -> Result<Catalog> {
    let source = String::from_utf8(bytes).map_err(|source| Error::InvalidEncoding { source })?;
    Ok(parse(&source))
}
