//! In-memory translation catalog.

use std::collections::HashMap;

/// Header entry metadata: ordered `Field: Value` pairs from the empty msgid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    fields: Vec<(String, String)>,
    /// Comment lines preceding the header block, verbatim.
    pub comments: Vec<String>,
}

impl Header {
    /// Build header metadata from the decoded msgstr of the header entry.
    ///
    /// Lines without a colon are ignored.
    pub fn from_msgstr(msgstr: &str) -> Self {
        let mut header = Header::default();
        for line in msgstr.lines() {
            if let Some((name, value)) = line.split_once(':') {
                let name = name.trim();
                if !name.is_empty() {
                    header.set(name, value.trim());
                }
            }
        }
        header
    }

    /// Look up a field by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set a field, keeping its position if it already exists.
    pub fn set(&mut self, name: &str, value: &str) {
        match self
            .fields
            .iter_mut()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.fields.push((name.to_string(), value.to_string())),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The `Language` field, or `""` when absent.
    pub fn language(&self) -> &str {
        self.get("Language").unwrap_or("")
    }
}

/// Plural forms of an entry. `msgstr[0]` lives in [`MessageEntry::value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plural {
    pub msgid_plural: String,
    /// `msgstr[1]`, `msgstr[2]`, ...
    pub other_forms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    /// Source string (msgid).
    pub key: String,
    /// Translated string (msgstr, or msgstr[0] for plural entries).
    pub value: String,
    pub context: Option<String>,
    pub plural: Option<Plural>,
    /// Comment lines preceding the entry, verbatim.
    pub comments: Vec<String>,
}

impl MessageEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            context: None,
            plural: None,
            comments: Vec::new(),
        }
    }

    /// An entry counts as translated when its value is non-empty and differs
    /// from its key. A value copied verbatim from the source is treated as a
    /// placeholder, following the convention of tools that pre-fill msgstr.
    pub fn is_translated(&self) -> bool {
        !self.value.is_empty() && self.value != self.key
    }

    /// True when no translation has been entered at all.
    pub fn needs_translation(&self) -> bool {
        self.value.is_empty()
    }
}

/// A parsed PO catalog: one header plus message entries in file order.
///
/// Entries are kept in a vector with a key index so that iteration order is
/// the parse order and lookups stay O(1).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    header: Header,
    entries: Vec<MessageEntry>,
    index: HashMap<String, usize>,
    /// Comment lines after the last entry.
    pub trailing_comments: Vec<String>,
}

impl Catalog {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            ..Default::default()
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    pub fn language(&self) -> &str {
        self.header.language()
    }

    pub fn entry(&self, key: &str) -> Option<&MessageEntry> {
        self.index.get(key).map(|&idx| &self.entries[idx])
    }

    /// Resolved translation for `key`.
    ///
    /// Falls back to the key itself when the entry is missing or its value is
    /// empty, the way untranslated messages render as source text.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        match self.entry(key) {
            Some(entry) if !entry.value.is_empty() => &entry.value,
            _ => key,
        }
    }

    /// Whether `key` has a real translation. Missing keys are not translated.
    pub fn is_translated(&self, key: &str) -> bool {
        self.entry(key).is_some_and(MessageEntry::is_translated)
    }

    /// Set the translation of `key`, appending a new entry if it is unknown.
    ///
    /// The empty msgid names the header, so an empty `key` is ignored.
    pub fn set(&mut self, key: &str, value: &str) {
        if key.is_empty() {
            return;
        }
        match self.index.get(key) {
            Some(&idx) => self.entries[idx].value = value.to_string(),
            None => self.push(MessageEntry::new(key, value)),
        }
    }

    /// Insert a full entry. A repeated key keeps its first position and takes
    /// the new entry's contents.
    pub fn insert(&mut self, entry: MessageEntry) {
        match self.index.get(&entry.key) {
            Some(&idx) => self.entries[idx] = entry,
            None => self.push(entry),
        }
    }

    fn push(&mut self, entry: MessageEntry) {
        self.index.insert(entry.key.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Entries in catalog order, header excluded.
    pub fn iter(&self) -> std::slice::Iter<'_, MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MessageEntry;
    type IntoIter = std::slice::Iter<'a, MessageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
