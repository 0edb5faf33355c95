pub mod api;
pub mod cli;
pub mod config;
pub mod log;
pub mod rpc;
pub mod server;

pub use crate::api::{ApiDoc, create_router};
pub use crate::config::GatewayConfig;
pub use crate::rpc::{RpcClient, RpcError};
