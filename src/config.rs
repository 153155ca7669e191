use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18n-mcp.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns for paths the PO file scan skips.
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// Limit used by getUntranslatedTerms when none is given.
    #[serde(default = "default_limit")]
    pub default_limit: i64,
    /// Page size used by lookUpTranslation when none is given.
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/.git/**"]
        .map(String::from)
        .to_vec()
}

fn default_limit() -> i64 {
    10
}

fn default_page_size() -> i64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: default_ignores(),
            default_limit: default_limit(),
            default_page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any pattern in `ignores` is not a valid glob or a
    /// default is not positive.
    pub fn validate(&self) -> Result<()> {
        self.ignore_patterns()?;

        if self.default_limit <= 0 {
            bail!("'defaultLimit' must be positive, got {}", self.default_limit);
        }
        if self.default_page_size <= 0 {
            bail!(
                "'defaultPageSize' must be positive, got {}",
                self.default_page_size
            );
        }

        Ok(())
    }

    /// Compiled `ignores` patterns.
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
            })
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Walk up from `start_dir` looking for the config file, stopping at the
/// repository root (a directory containing `.git`).
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
