use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_include_transactions() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BlockNumberResponse {
    /// Latest block number as a hex quantity.
    #[schema(example = "0x134e82a")]
    pub block_number: String,
}

/// Request body for `POST /block/by-number`.
///
/// Only `block_number` is required:
///
/// ```json
/// {
///   "block_number": "0x134e82a"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct GetBlockByNumberRequest {
    /// Block number in hex format (e.g., '0x134e82a').
    #[schema(example = "0x134e82a")]
    pub block_number: String,

    /// Whether to include full transaction details.
    #[serde(default = "default_include_transactions")]
    #[schema(default = true)]
    pub include_transactions: bool,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
