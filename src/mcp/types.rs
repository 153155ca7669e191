use schemars::JsonSchema;
use serde::Deserialize;

use crate::operations::{NumericArg, TranslationsArg};

// ============================================================
// File Discovery (listAllPoFiles)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListAllPoFilesParams {
    /// The directory path to scan for .po files
    pub directory: String,
}

// ============================================================
// Untranslated Terms (getUntranslatedTerms)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetUntranslatedTermsParams {
    /// The path to the .po file
    pub file_path: String,
    /// Number of untranslated terms to return (default: 10)
    #[serde(default)]
    pub limit: Option<NumericArg>,
}

// ============================================================
// Lookup (lookUpTranslation)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LookUpTranslationParams {
    /// The path to the .po file
    pub file_path: String,
    /// The term key to search for (case-insensitive substring of the msgid)
    pub search_term: String,
    /// Number of results to return per page (default: 10)
    #[serde(default)]
    pub page_size: Option<NumericArg>,
    /// Page number for pagination (default: 1)
    #[serde(default)]
    pub page: Option<NumericArg>,
}

// ============================================================
// Translate (translate)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TranslateParams {
    /// The path to the .po file
    pub file_path: String,
    /// JSON object with translations where keys are term keys and values are
    /// translations, either inline or JSON-encoded as a string
    pub translations: TranslationsArg,
}
