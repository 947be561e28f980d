//! Permission errors with JSON-RPC 2.0 error codes.
//!
//! Denials never say why an origin was refused. A malformed origin and an
//! untrusted one produce the same error.

use super::methods::KeyringRpcMethod;
use serde::Serialize;
use thiserror::Error;

/// JSON-RPC error codes used by the permission gate
pub mod codes {
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const UNAUTHORIZED: i32 = -32010;
}

/// Result type for permission checks
pub type PermissionResult<T> = Result<T, PermissionError>;

/// Errors raised when gating a keyring call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// Not a keyring method name.
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// Method exists but the origin may not call it.
    #[error("Unauthorized to call method: {method}")]
    Unauthorized { method: KeyringRpcMethod },

    /// Body is not a JSON-RPC request or batch.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl PermissionError {
    /// JSON-RPC error code
    pub fn code(&self) -> i32 {
        match self {
            PermissionError::MethodNotFound(_) => codes::METHOD_NOT_FOUND,
            PermissionError::Unauthorized { .. } => codes::UNAUTHORIZED,
            PermissionError::InvalidRequest(_) => codes::INVALID_REQUEST,
        }
    }

    /// Error object for a JSON-RPC response body.
    pub fn to_rpc_error(&self) -> RpcErrorObject {
        let data = match self {
            PermissionError::Unauthorized { method } => {
                Some(serde_json::json!({ "method": method }))
            }
            _ => None,
        };
        RpcErrorObject {
            code: self.code(),
            message: self.to_string(),
            data,
        }
    }
}

/// JSON-RPC error object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcErrorObject {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
