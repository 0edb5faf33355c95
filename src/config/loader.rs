use std::{fs, fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use config::{Config, Environment};
use log::info;

use super::GatewayConfig;

pub const ENV_PREFIX: &str = "POLYGON";

pub fn get_default_config() -> &'static str {
    include_str!("../../config/config.toml")
}

/// Builds the layered configuration: the TOML file at `path`, then `POLYGON_*`
/// environment variables. A missing file is first created from the embedded defaults.
pub fn load_configuration(path: &Path) -> Result<Config> {
    if !path.exists() {
        write_config_to(path, get_default_config()).context("Could not create default config")?;
        info!(path:% = path.display(); "Created new configuration file");
    }

    let filename = path.to_str().context("Invalid config file path")?;

    Config::builder()
        .add_source(config::File::with_name(filename))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Could not build configuration")
}

/// Loads the `[gateway]` section, falling back to defaults for anything unset.
pub fn load_gateway_config(path: &Path) -> Result<GatewayConfig> {
    let cfg = load_configuration(path)?;
    GatewayConfig::from_config(&cfg)
}

pub fn write_config_to(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create parent directories")?;
    };

    let mut file = File::create(path).context("Failed to create config file")?;
    file.write_all(source.as_bytes())
        .context("Failed to write config content")?;
    file.write_all(b"\n").context("Failed to write newline")?;
    Ok(())
}
