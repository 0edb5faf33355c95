pub mod structured_console_encoder;

use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, anyhow};
use log::{debug, info};
use log4rs::{
    Config,
    config::{Deserializers, RawConfig},
};
use url::Url;

use crate::log::structured_console_encoder::StructuredConsoleEncoderDeserializer;

const EXTERNAL_CONFIG_PATH: &str = "log4rs.yml";

/// Initializes logging
pub fn init_logging() -> anyhow::Result<()> {
    let mut deserializers = Deserializers::default();
    deserializers.insert("structured_console", StructuredConsoleEncoderDeserializer);

    let path = Path::new(EXTERNAL_CONFIG_PATH);
    if path.exists() {
        log4rs::init_file(path, deserializers).context("Failed to load external log4rs.yml")?;
        info!(path = EXTERNAL_CONFIG_PATH; "Logging initialized from external configuration");
        return Ok(());
    }

    let yaml_content = include_str!("../../resources/default_log4rs.yml");
    let raw_config: RawConfig =
        serde_yaml::from_str(yaml_content).context("Embedded logging configuration is invalid YAML")?;

    let (appenders, errors) = raw_config.appenders_lossy(&deserializers);
    if !errors.is_empty() {
        return Err(anyhow!("Errors parsing embedded appenders: {:?}", errors));
    }

    let config = Config::builder()
        .appenders(appenders)
        .loggers(raw_config.loggers())
        .build(raw_config.root())
        .context("Failed to build logging config")?;

    log4rs::init_config(config).context("Failed to initialize logging from embedded config")?;

    debug!("Logging initialized from embedded defaults (no external log4rs.yml found)");
    Ok(())
}

fn reveal_secrets() -> bool {
    static REVEAL_SECRETS_CACHE: OnceLock<bool> = OnceLock::new();

    *REVEAL_SECRETS_CACHE.get_or_init(|| {
        std::env::var("REVEAL_SECRETS")
            .map(|v| {
                let val = v.to_lowercase();
                val == "true" || val == "1"
            })
            .unwrap_or(false)
    })
}

/// Masks an endpoint URL down to its origin.
///
/// Hosted node providers put API keys in the path or query string, so only
/// scheme, host and port are kept. If REVEAL_SECRETS is true, returns the full URL.
pub fn mask_url(url: &Url) -> String {
    if reveal_secrets() {
        return url.to_string();
    }

    let origin = url.origin().ascii_serialization();
    let has_secret_parts = url.path() != "/" || url.query().is_some() || !url.username().is_empty();
    if has_secret_parts {
        format!("{}/***", origin)
    } else {
        origin
    }
}
