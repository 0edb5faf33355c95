//! Gateway configuration.
//!
//! Values are layered: the TOML file (created from the embedded defaults on first
//! run), then `POLYGON_*` environment variables, then command line flags applied
//! through [`ApplyArgs`](crate::cli::ApplyArgs).

mod defaults;
pub mod loader;

pub use defaults::GatewayConfig;
pub use loader::{load_configuration, load_gateway_config};
