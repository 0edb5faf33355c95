// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const JSON_RPC_VERSION: &str = "2.0";

/// Calls are unary and awaited in place, so the id is never used for correlation.
pub const JSON_RPC_REQUEST_ID: u64 = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    /// Left off the wire entirely when `None`; `Some(vec![])` is sent as `[]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Value>>,
    pub id: u64,
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(method: &'a str, params: Option<Vec<Value>>) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION,
            method,
            params,
            id: JSON_RPC_REQUEST_ID,
        }
    }
}

/// Missing members and an explicit `null` result both decode as `None`.
///
/// `error` is presence-aware: any `error` member, including `null`, decodes as `Some`.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T = Value> {
    pub jsonrpc: Option<String>,
    pub id: Option<Value>,
    pub result: Option<T>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub error: Option<JsonRpcErrorPayload>,
}

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Standard JSON-RPC 2.0 error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// The `error` member exactly as the node sent it.
///
/// Nodes do not all follow the `{code, message}` shape, so the raw value is kept and
/// only interpreted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonRpcErrorPayload(pub Value);

impl JsonRpcErrorPayload {
    pub fn as_error_object(&self) -> Option<JsonRpcErrorObject> {
        serde_json::from_value(self.0.clone()).ok()
    }

    pub fn code(&self) -> Option<i64> {
        self.as_error_object().map(|e| e.code)
    }
}

impl Display for JsonRpcErrorPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Value::String(message) => write!(f, "{}", message),
            Value::Object(object) => match object.get("message").and_then(Value::as_str) {
                Some(message) => {
                    write!(f, "{}", message)?;
                    if let Some(code) = object.get("code") {
                        write!(f, " (code {})", code)?;
                    }
                    if let Some(data) = object.get("data").filter(|d| !d.is_null()) {
                        write!(f, ": {}", data)?;
                    }
                    Ok(())
                },
                None => write!(f, "{}", self.0),
            },
            other => write!(f, "{}", other),
        }
    }
}
