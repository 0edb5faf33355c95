//! Block query endpoint handlers.
//!
//! Each handler maps to exactly one call on the shared [`RpcClient`](crate::rpc::RpcClient).
//! Failures are reported through [`ApiError`] as `{"detail": "..."}` bodies.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/block/number` | Latest block number |
//! | POST | `/block/by-number` | Block by hex-encoded number |
//!
//! ```bash
//! curl -X POST http://localhost:8000/block/by-number \
//!   -H "Content-Type: application/json" \
//!   -d '{"block_number": "0x134e82a", "include_transactions": false}'
//! ```

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::debug;
use serde_json::Value as JsonValue;

use super::{
    AppState,
    error::ApiError,
    types::{BlockNumberResponse, ErrorResponse, GetBlockByNumberRequest},
};

/// Returns the latest block number known to the upstream node.
#[utoipa::path(
    get,
    path = "/block/number",
    responses(
        (status = 200, description = "Latest block number", body = BlockNumberResponse),
        (status = 500, description = "Upstream node call failed", body = ErrorResponse),
    )
)]
pub async fn api_get_block_number(State(app_state): State<AppState>) -> Result<Json<BlockNumberResponse>, ApiError> {
    let block_number = app_state.rpc_client.get_block_number().await?;

    Ok(Json(BlockNumberResponse { block_number }))
}

/// Returns a block by number, passing the node's block object through unchanged.
///
/// A null or empty result from the node is reported as 404 rather than as an
/// empty 200 body.
#[utoipa::path(
    post,
    path = "/block/by-number",
    request_body = GetBlockByNumberRequest,
    responses(
        (status = 200, description = "Block found", body = JsonValue),
        (status = 404, description = "Block not found", body = ErrorResponse),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse),
        (status = 415, description = "Request body is not `application/json`", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Upstream node call failed", body = ErrorResponse),
    )
)]
pub async fn api_get_block_by_number(
    State(app_state): State<AppState>,
    payload: Result<Json<GetBlockByNumberRequest>, JsonRejection>,
) -> Result<Json<JsonValue>, ApiError> {
    let Json(request) = payload?;

    let block = app_state
        .rpc_client
        .get_block_by_number(&request.block_number, request.include_transactions)
        .await?;

    match found_block(block) {
        Some(block) => Ok(Json(block)),
        None => {
            debug!(block_number = &*request.block_number; "Block not found");
            Err(ApiError::BlockNotFound)
        },
    }
}

/// Drops results that count as "no block", so the API and the CLI agree on not-found.
pub fn found_block(block: Option<JsonValue>) -> Option<JsonValue> {
    block.filter(|block| !is_empty_result(block))
}

/// `null`, `false`, `0`, `""`, `[]` and `{}` all count as "no block".
fn is_empty_result(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !b,
        JsonValue::Number(n) => n.as_f64() == Some(0.0),
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(a) => a.is_empty(),
        JsonValue::Object(o) => o.is_empty(),
    }
}
