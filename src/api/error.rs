use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use thiserror::Error;

use super::types::ErrorResponse;
use crate::rpc::RpcError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Any failure reported by the RPC client.
    #[error("{0}")]
    Upstream(#[from] RpcError),
    #[error("Block not found")]
    BlockNotFound,
    /// Request body rejected by the extractor; keeps the extractor's status code.
    #[error("{message}")]
    InvalidRequest { status: StatusCode, message: String },
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Upstream(e) => {
                warn!(error:% = e; "Upstream call failed");
                StatusCode::INTERNAL_SERVER_ERROR
            },
            ApiError::BlockNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest { status, .. } => *status,
        };

        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_maps_to_500_with_message() {
        let err = ApiError::from(RpcError::UnexpectedResult {
            method: "eth_blockNumber".to_string(),
            reason: "no result returned".to_string(),
        });

        let detail = err.to_string();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail, "Unexpected result for eth_blockNumber: no result returned");
    }

    #[test]
    fn test_block_not_found_maps_to_404() {
        let err = ApiError::BlockNotFound;

        assert_eq!(err.to_string(), "Block not found");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
