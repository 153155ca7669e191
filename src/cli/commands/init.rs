use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use crate::config::{CONFIG_FILE_NAME, default_config_json};

use super::{CommandResult, CommandSummary, InitSummary};

/// Write the default config file into the working directory.
pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary {
            created: CONFIG_FILE_NAME.to_string(),
        }),
    })
}
