//! Query and mutation operations over a single catalog.

use crate::po::{self, Catalog};

/// Limit used when `list_untranslated` is given a non-positive limit.
pub const DEFAULT_UNTRANSLATED_LIMIT: usize = 10;

/// Untranslated message keys. Each key's reported value is always `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedTerms {
    pub language: String,
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub total_matches: usize,
    /// Matching `(msgid, msgstr)` pairs on the requested page.
    pub page_results: Vec<(String, String)>,
}

/// Owns one catalog for the duration of an operation sequence.
#[derive(Debug)]
pub struct PoService {
    catalog: Catalog,
}

impl PoService {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// First `limit` keys still awaiting a translation, in catalog order.
    ///
    /// Only entries with an empty msgstr are reported. Entries whose msgstr
    /// repeats the msgid (`"OTC"`, `"{theme}"`) are left out even though
    /// [`MessageEntry::is_translated`](crate::po::MessageEntry::is_translated)
    /// is false for them. A non-positive limit means
    /// [`DEFAULT_UNTRANSLATED_LIMIT`].
    pub fn list_untranslated(&self, limit: i64) -> UntranslatedTerms {
        let limit = match non_negative(limit) {
            0 => DEFAULT_UNTRANSLATED_LIMIT,
            n => n,
        };
        let terms = self
            .catalog
            .iter()
            .filter(|entry| entry.needs_translation())
            .take(limit)
            .map(|entry| entry.key.clone())
            .collect();

        UntranslatedTerms {
            language: self.catalog.language().to_string(),
            terms,
        }
    }

    /// Resolved `(msgid, msgstr)` pairs after skipping `skip` entries.
    ///
    /// Negative arguments count as zero.
    pub fn list(&self, skip: i64, take: i64) -> Vec<(String, String)> {
        self.catalog
            .iter()
            .skip(non_negative(skip))
            .take(non_negative(take))
            .map(|entry| (entry.key.clone(), self.catalog.get(&entry.key).to_string()))
            .collect()
    }

    pub fn translate(&mut self, key: &str, value: &str) {
        self.catalog.set(key, value);
    }

    /// Case-insensitive substring search over msgids, paginated from page 1.
    ///
    /// Values are returned raw, whether translated or not.
    pub fn search(&self, term: &str, page: i64, page_size: i64) -> SearchResults {
        let needle = term.to_lowercase();
        let matches: Vec<_> = self
            .catalog
            .iter()
            .filter(|entry| entry.key.to_lowercase().contains(&needle))
            .collect();

        let skip = page.saturating_sub(1).saturating_mul(page_size);
        let page_results = matches
            .iter()
            .skip(non_negative(skip))
            .take(non_negative(page_size))
            .map(|entry| (entry.key.clone(), entry.value.clone()))
            .collect();

        SearchResults {
            total_matches: matches.len(),
            page_results,
        }
    }

    pub fn serialize(&self) -> String {
        po::serialize(&self.catalog)
    }
}

fn non_negative(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}
