//! JSON-RPC client for the upstream Polygon node.
//!
//! This module turns a method name and positional parameters into a JSON-RPC 2.0
//! call, posts it to the configured node endpoint and decodes the reply.
//!
//! - [`RpcClient`] - Client holding the endpoint and the underlying HTTP client
//! - [`RpcError`] - Transport and protocol failures
//! - [`JsonRpcRequest`] / [`JsonRpcResponse`] - Wire envelopes
//!
//! # Example
//!
//! ```rust,no_run
//! use url::Url;
//! use polygon_gateway::rpc::RpcClient;
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! let client = RpcClient::new(Url::parse("https://polygon-rpc.com")?)?;
//!
//! let height = client.get_block_number().await?;
//! if let Some(block) = client.get_block_by_number(&height, false).await? {
//!     println!("Block {} has hash {}", height, block["hash"]);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Calls are never retried. A non-200 status becomes [`RpcError::ServerError`] and an
//! `error` member in the reply becomes [`RpcError::Rpc`]; both carry the upstream
//! details in their message.

mod client;
mod error;
mod types;

pub use client::{ETH_BLOCK_NUMBER, ETH_GET_BLOCK_BY_NUMBER, RpcClient};
pub use error::RpcError;
pub use types::{JSON_RPC_REQUEST_ID, JSON_RPC_VERSION, JsonRpcErrorObject, JsonRpcErrorPayload, JsonRpcRequest, JsonRpcResponse};
