// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::time::{Duration, Instant};

use log::{debug, warn};
use reqwest::{StatusCode, header};
use serde_json::Value;
use url::Url;

use super::error::RpcError;
use super::types::{JsonRpcRequest, JsonRpcResponse};
use crate::log::mask_url;

pub const ETH_BLOCK_NUMBER: &str = "eth_blockNumber";
pub const ETH_GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";

const USER_AGENT: &str = concat!("polygon-gateway/", env!("CARGO_PKG_VERSION"));

/// JSON-RPC client for a single upstream node.
///
/// Holds only immutable configuration, so one instance can be shared across
/// request handlers behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct RpcClient {
    endpoint: Url,
    client: reqwest::Client,
}

impl RpcClient {
    /// Creates a client that relies on the HTTP stack's default timeout behaviour.
    pub fn new(endpoint: Url) -> Result<Self, RpcError> {
        Self::with_timeout(endpoint, None)
    }

    /// Creates a client with an optional overall request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::RequestFailed`] if the HTTP client cannot be initialized
    /// (e.g. TLS backend initialization failure).
    pub fn with_timeout(endpoint: Url, timeout: Option<Duration>) -> Result<Self, RpcError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Calls `method` on the upstream node and returns its `result`.
    ///
    /// `params` is left out of the payload entirely when `None`. A missing or
    /// `null` result is returned as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// - [`RpcError::RequestFailed`] if the node is unreachable
    /// - [`RpcError::ServerError`] if the node answers with a status other than 200
    /// - [`RpcError::Rpc`] if the reply carries an `error` member
    /// - [`RpcError::InvalidResponse`] if the reply is not a JSON-RPC response
    pub async fn call(&self, method: &str, params: Option<Vec<Value>>) -> Result<Option<Value>, RpcError> {
        let request = JsonRpcRequest::new(method, params);
        let payload = serde_json::to_string(&request)?;

        let start = Instant::now();
        let resp = self
            .client
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .inspect_err(|e| {
                warn!(method = method, error:% = e; "RPC: Request to node failed");
            })?;

        let status = resp.status();
        let body = resp.text().await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if status != StatusCode::OK {
            warn!(
                method = method,
                status = status.as_u16(),
                latency_ms = latency_ms,
                endpoint = &*mask_url(&self.endpoint);
                "RPC: Node returned an error status"
            );
            return Err(RpcError::ServerError { status, body });
        }

        let response: JsonRpcResponse = serde_json::from_str(&body)?;
        if let Some(error) = response.error {
            warn!(
                method = method,
                error:% = error;
                "RPC: Node returned an error"
            );
            return Err(RpcError::Rpc(error));
        }

        debug!(method = method, latency_ms = latency_ms; "RPC: Call successful");
        Ok(response.result)
    }

    /// Returns the latest block number as a hex quantity, e.g. `"0x134e82a"`.
    pub async fn get_block_number(&self) -> Result<String, RpcError> {
        match self.call(ETH_BLOCK_NUMBER, None).await? {
            Some(Value::String(block_number)) => Ok(block_number),
            Some(other) => Err(RpcError::UnexpectedResult {
                method: ETH_BLOCK_NUMBER.to_string(),
                reason: format!("expected a hex string, got {}", other),
            }),
            None => Err(RpcError::UnexpectedResult {
                method: ETH_BLOCK_NUMBER.to_string(),
                reason: "no result returned".to_string(),
            }),
        }
    }

    /// Fetches a block by its hex-encoded number.
    ///
    /// Returns `Ok(None)` when the node has no block at that height. The block
    /// object itself is passed through untouched.
    pub async fn get_block_by_number(
        &self,
        block_number: &str,
        include_transactions: bool,
    ) -> Result<Option<Value>, RpcError> {
        let params = vec![
            Value::String(block_number.to_string()),
            Value::Bool(include_transactions),
        ];
        self.call(ETH_GET_BLOCK_BY_NUMBER, Some(params)).await
    }
}
