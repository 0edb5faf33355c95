//! Error types for upstream JSON-RPC calls.

use thiserror::Error;

use super::types::JsonRpcErrorPayload;

/// Errors that can occur while calling the upstream node.
///
/// The display text of every variant is what the HTTP API reports as `detail`,
/// so it always carries the upstream status, body or error message.
///
/// # Example
///
/// ```rust,no_run
/// use polygon_gateway::rpc::RpcError;
///
/// fn describe(err: &RpcError) {
///     match err {
///         RpcError::ServerError { status, body } => {
///             eprintln!("Node returned {}: {}", status, body);
///         }
///         RpcError::Rpc(error) => {
///             eprintln!("Node rejected the call with code {:?}", error.code());
///         }
///         _ => eprintln!("Other error: {}", err),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum RpcError {
    /// The request never produced a response.
    ///
    /// Connection refused, DNS failure, TLS errors and client-side timeouts end up here.
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The node answered with a status other than `200 OK`.
    #[error("Request failed with status code {}: {body}", .status.as_u16())]
    ServerError {
        /// The HTTP status code returned by the node.
        status: reqwest::StatusCode,
        /// The raw response body.
        body: String,
    },

    /// The node answered with a JSON-RPC `error` member, whatever its shape.
    #[error("RPC error: {0}")]
    Rpc(JsonRpcErrorPayload),

    /// The body was not a JSON-RPC response.
    #[error("Invalid JSON-RPC response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// The call succeeded but the result does not have the expected shape.
    #[error("Unexpected result for {method}: {reason}")]
    UnexpectedResult { method: String, reason: String },
}
