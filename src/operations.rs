//! The catalog operations exposed to tool callers.
//!
//! Each operation takes loosely typed caller input, validates it, parses a
//! fresh catalog from disk and returns a serializable result. Nothing is cached
//! between calls.

use std::path::Path;

use anyhow::Result as AnyResult;
use glob::Pattern;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{Config, load_config};
use crate::error::{Error, Result};
use crate::locator::{self, PoFileInfo};
use crate::po::{read_catalog, write_catalog};
use crate::service::PoService;

/// An integer argument given either as a JSON number or a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum NumericArg {
    Int(i64),
    Text(String),
}

impl NumericArg {
    fn parse(&self, name: &'static str) -> Result<i64> {
        match self {
            NumericArg::Int(n) => Ok(*n),
            NumericArg::Text(text) => {
                text.trim()
                    .parse()
                    .map_err(|_| Error::InvalidNumericInput {
                        name,
                        value: text.clone(),
                        reason: "expected an integer",
                    })
            }
        }
    }
}

impl From<i64> for NumericArg {
    fn from(n: i64) -> Self {
        NumericArg::Int(n)
    }
}

/// A msgid to msgstr mapping, either JSON-encoded in a string or inline.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum TranslationsArg {
    Encoded(String),
    Object(Map<String, Value>),
}

impl TranslationsArg {
    /// Decode into `(msgid, msgstr)` pairs, in the order given.
    ///
    /// Fails as a whole if any value is not a string or any msgid is empty.
    pub fn decode(&self) -> Result<Vec<(String, String)>> {
        let object = match self {
            TranslationsArg::Encoded(text) => serde_json::from_str::<Map<String, Value>>(text)
                .map_err(|source| Error::MalformedTranslationsPayload { source })?,
            TranslationsArg::Object(object) => object.clone(),
        };

        object
            .into_iter()
            .map(|(key, value)| {
                if key.is_empty() {
                    return Err(Error::MalformedTranslationsPayload {
                        source: serde::de::Error::custom("msgid must not be empty"),
                    });
                }
                serde_json::from_value::<String>(value)
                    .map(|value| (key, value))
                    .map_err(|source| Error::MalformedTranslationsPayload { source })
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct PoFilesResult {
    pub directory: String,
    pub count: usize,
    pub files: Vec<PoFileInfo>,
}

#[derive(Debug, Serialize)]
pub struct UntranslatedTermsResult {
    pub file_path: String,
    pub limit: i64,
    pub count: usize,
    pub language: String,
    pub untranslated_terms: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct LookUpResult {
    pub file_path: String,
    pub search_term: String,
    pub page: i64,
    pub page_size: i64,
    pub total_matches: usize,
    pub translations: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct TranslateResult {
    pub file_path: String,
    pub translated_count: usize,
    pub translations: Map<String, Value>,
    pub message: String,
}

/// Operation entry points bound to one configuration.
#[derive(Debug, Clone)]
pub struct Operations {
    config: Config,
    ignores: Vec<Pattern>,
}

impl Operations {
    pub fn new(config: Config) -> AnyResult<Self> {
        let ignores = config.ignore_patterns()?;
        Ok(Self { config, ignores })
    }

    /// Build from the config file found by walking up from the working directory.
    pub fn from_current_dir() -> AnyResult<Self> {
        let cwd = std::env::current_dir()?;
        let loaded = load_config(&cwd)?;
        if !loaded.from_file {
            tracing::debug!("no config file found, using defaults");
        }
        Self::new(loaded.config)
    }

    /// listAllPoFiles: every `.po` file under `directory` with its language.
    pub fn list_po_files(&self, directory: &str) -> Result<PoFilesResult> {
        let directory = required("directory", directory)?;
        let files = locator::scan(Path::new(directory), &self.ignores)?;

        Ok(PoFilesResult {
            directory: directory.to_string(),
            count: files.len(),
            files,
        })
    }

    /// getUntranslatedTerms: msgids with an empty msgstr, up to `limit`.
    pub fn get_untranslated_terms(
        &self,
        file_path: &str,
        limit: Option<&NumericArg>,
    ) -> Result<UntranslatedTermsResult> {
        let file_path = required("file_path", file_path)?;
        let limit = numeric("limit", limit, self.config.default_limit)?;

        let service = PoService::new(read_catalog(Path::new(file_path))?);
        let untranslated = service.list_untranslated(limit);

        let untranslated_terms: Map<String, Value> = untranslated
            .terms
            .into_iter()
            .map(|key| (key, Value::String(String::new())))
            .collect();

        Ok(UntranslatedTermsResult {
            file_path: file_path.to_string(),
            limit,
            count: untranslated_terms.len(),
            language: untranslated.language,
            untranslated_terms,
        })
    }

    /// lookUpTranslation: msgids containing `search_term`, paginated.
    ///
    /// An empty search term matches every entry.
    pub fn look_up_translation(
        &self,
        file_path: &str,
        search_term: &str,
        page_size: Option<&NumericArg>,
        page: Option<&NumericArg>,
    ) -> Result<LookUpResult> {
        let file_path = required("file_path", file_path)?;
        let page_size = numeric("page_size", page_size, self.config.default_page_size)?;
        let page_size = positive("page_size", page_size)?;
        let page = positive("page", numeric("page", page, 1)?)?;

        let service = PoService::new(read_catalog(Path::new(file_path))?);
        let results = service.search(search_term, page, page_size);

        Ok(LookUpResult {
            file_path: file_path.to_string(),
            search_term: search_term.to_string(),
            page,
            page_size,
            total_matches: results.total_matches,
            translations: to_map(results.page_results),
        })
    }

    /// translate: apply every pair and overwrite the file.
    ///
    /// The payload is fully decoded before the file is touched. If the write
    /// fails, the in-memory changes are dropped.
    pub fn translate(
        &self,
        file_path: &str,
        translations: &TranslationsArg,
    ) -> Result<TranslateResult> {
        let file_path = required("file_path", file_path)?;
        let pairs = translations.decode()?;

        let path = Path::new(file_path);
        let mut service = PoService::new(read_catalog(path)?);
        for (key, value) in &pairs {
            service.translate(key, value);
        }
        write_catalog(path, service.catalog())?;

        let translated_count = pairs.len();
        tracing::info!(path = file_path, count = translated_count, "saved translations");

        Ok(TranslateResult {
            file_path: file_path.to_string(),
            translated_count,
            translations: to_map(pairs),
            message: format!(
                "Successfully translated {} terms and saved to {}",
                translated_count, file_path
            ),
        })
    }
}

fn required<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::MissingParameter { name });
    }
    Ok(value)
}

fn numeric(name: &'static str, arg: Option<&NumericArg>, default: i64) -> Result<i64> {
    arg.map_or(Ok(default), |arg| arg.parse(name))
}

fn positive(name: &'static str, value: i64) -> Result<i64> {
    if value < 1 {
        return Err(Error::InvalidNumericInput {
            name,
            value: value.to_string(),
            reason: "must be a positive integer",
        });
    }
    Ok(value)
}

fn to_map(pairs: Vec<(String, String)>) -> Map<String, Value> {
    pairs
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect()
}
