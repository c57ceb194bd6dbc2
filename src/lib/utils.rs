use crate::Config;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::debug;

pub async fn get_config(file: impl AsRef<Path>) -> Result<Config> {
    let file = file.as_ref();
    let toml_str = fs::read_to_string(file)
        .await
        .with_context(|| format!("Missing '{}' file!", file.display()))?;
    let map: Config = toml::from_str(&toml_str).context("Invalid configuration")?;
    debug!("Loaded the configuration of bot '{}'", map.bot.name);
    Ok(map)
}
