//! Permission gate used by the RPC dispatch layer.
//!
//! Wraps the pure resolver with method-name parsing, the membership test and
//! audit logging. Logs record the origin's tier and shape, never the origin
//! string itself.

use crate::domain::config::GateConfig;
use crate::domain::error::{PermissionError, PermissionResult};
use crate::domain::methods::{get_method, KeyringRpcMethod};
use crate::domain::origin::Origin;
use crate::domain::resolver::resolve;
use crate::domain::tiers::{MethodList, TrustTier};
use serde_json::Value;
use tracing::{debug, warn};

/// Checks keyring calls against the origin's method list.
#[derive(Debug, Clone, Default)]
pub struct KeyringPermissionGate {
    config: GateConfig,
}

impl KeyringPermissionGate {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// Methods `origin` may call.
    pub fn allowed_methods(&self, origin: &Origin) -> MethodList {
        resolve(origin)
    }

    /// Authorize a single call by method name.
    pub fn authorize(&self, origin: &Origin, method: &str) -> PermissionResult<KeyringRpcMethod> {
        let tier = TrustTier::classify(origin);
        self.check(tier, origin, method)
    }

    /// Authorize every call in a JSON-RPC request or batch body.
    ///
    /// The first denied entry rejects the whole body.
    pub fn authorize_request(
        &self,
        origin: &Origin,
        body: &[u8],
    ) -> PermissionResult<Vec<KeyringRpcMethod>> {
        let methods = extract_methods(body)?;
        let tier = TrustTier::classify(origin);
        methods
            .iter()
            .map(|method| self.check(tier, origin, method))
            .collect()
    }

    fn check(
        &self,
        tier: TrustTier,
        origin: &Origin,
        method: &str,
    ) -> PermissionResult<KeyringRpcMethod> {
        let Some(parsed) = get_method(method) else {
            if self.config.log_denials {
                warn!(
                    origin_tier = tier.as_str(),
                    origin_kind = origin.kind(),
                    method,
                    "Rejected unknown keyring method"
                );
            }
            return Err(PermissionError::MethodNotFound(method.to_string()));
        };

        if tier.allowed_methods().contains(&parsed) {
            if self.config.log_grants {
                debug!(origin_tier = tier.as_str(), method, "Keyring call permitted");
            }
            Ok(parsed)
        } else {
            if self.config.log_denials {
                warn!(
                    origin_tier = tier.as_str(),
                    origin_kind = origin.kind(),
                    method,
                    "Keyring call denied"
                );
            }
            Err(PermissionError::Unauthorized { method: parsed })
        }
    }
}

/// Extract method names from a JSON-RPC request body.
///
/// Accepts a single request object or a non-empty batch array. Every entry must
/// carry a string `method`.
fn extract_methods(body: &[u8]) -> PermissionResult<Vec<String>> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| PermissionError::InvalidRequest(format!("malformed JSON: {e}")))?;

    match value {
        Value::Object(_) => Ok(vec![method_of(&value)?]),
        Value::Array(items) => {
            if items.is_empty() {
                return Err(PermissionError::InvalidRequest("empty batch".into()));
            }
            items.iter().map(method_of).collect()
        }
        _ => Err(PermissionError::InvalidRequest(
            "expected object or array".into(),
        )),
    }
}

fn method_of(request: &Value) -> PermissionResult<String> {
    request
        .get("method")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| PermissionError::InvalidRequest("missing method".into()))
}
