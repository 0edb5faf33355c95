use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::cli::{ApplyArgs, RpcArgs, ServerArgs};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub rpc_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub rpc_timeout_secs: Option<u64>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://polygon-rpc.com".to_string(),
            api_host: "0.0.0.0".to_string(),
            api_port: 8000,
            rpc_timeout_secs: None,
        }
    }
}

impl GatewayConfig {
    pub fn main_key_prefix() -> &'static str {
        "gateway"
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        match cfg.get::<GatewayConfig>(Self::main_key_prefix()) {
            Ok(config) => Ok(config),
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(e).context("Invalid gateway configuration"),
        }
    }

    pub fn rpc_endpoint(&self) -> Result<Url> {
        Url::parse(&self.rpc_url).with_context(|| format!("Invalid RPC URL '{}'", self.rpc_url))
    }

    pub fn rpc_timeout(&self) -> Option<Duration> {
        self.rpc_timeout_secs.map(Duration::from_secs)
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

impl ApplyArgs for GatewayConfig {
    fn apply_rpc(&mut self, args: &RpcArgs) {
        if let Some(rpc_url) = &args.rpc_url {
            self.rpc_url = rpc_url.clone();
        }
        if let Some(rpc_timeout_secs) = args.rpc_timeout_secs {
            self.rpc_timeout_secs = Some(rpc_timeout_secs);
        }
    }

    fn apply_server(&mut self, args: &ServerArgs) {
        if let Some(host) = &args.host {
            self.api_host = host.clone();
        }
        if let Some(port) = args.port {
            self.api_port = port;
        }
    }
}
