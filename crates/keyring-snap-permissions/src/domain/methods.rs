//! Keyring RPC method set and metadata.
//!
//! The keyring exposes a closed set of thirteen methods. Every list produced by
//! the resolver is a subsequence of [`KeyringRpcMethod::ALL`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Keyring RPC method identifier.
///
/// Serializes as the keyring API wire name (e.g. `"keyring_listAccounts"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KeyringRpcMethod {
    #[serde(rename = "keyring_listAccounts")]
    ListAccounts,
    #[serde(rename = "keyring_getAccount")]
    GetAccount,
    #[serde(rename = "keyring_getAccountBalances")]
    GetAccountBalances,
    #[serde(rename = "keyring_createAccount")]
    CreateAccount,
    #[serde(rename = "keyring_filterAccountChains")]
    FilterAccountChains,
    #[serde(rename = "keyring_updateAccount")]
    UpdateAccount,
    #[serde(rename = "keyring_deleteAccount")]
    DeleteAccount,
    #[serde(rename = "keyring_exportAccount")]
    ExportAccount,
    #[serde(rename = "keyring_listRequests")]
    ListRequests,
    #[serde(rename = "keyring_getRequest")]
    GetRequest,
    #[serde(rename = "keyring_submitRequest")]
    SubmitRequest,
    #[serde(rename = "keyring_approveRequest")]
    ApproveRequest,
    #[serde(rename = "keyring_rejectRequest")]
    RejectRequest,
}

/// Method category for grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MethodCategory {
    /// Account listing and lookup
    AccountRead,
    /// Account creation, update and deletion
    AccountWrite,
    /// Private key material export
    AccountExport,
    /// Pending request listing and lookup
    RequestRead,
    /// Request submission and lifecycle (approve / reject)
    RequestWrite,
}

impl KeyringRpcMethod {
    /// All keyring methods, in declaration order.
    pub const ALL: [KeyringRpcMethod; 13] = [
        KeyringRpcMethod::ListAccounts,
        KeyringRpcMethod::GetAccount,
        KeyringRpcMethod::GetAccountBalances,
        KeyringRpcMethod::CreateAccount,
        KeyringRpcMethod::FilterAccountChains,
        KeyringRpcMethod::UpdateAccount,
        KeyringRpcMethod::DeleteAccount,
        KeyringRpcMethod::ExportAccount,
        KeyringRpcMethod::ListRequests,
        KeyringRpcMethod::GetRequest,
        KeyringRpcMethod::SubmitRequest,
        KeyringRpcMethod::ApproveRequest,
        KeyringRpcMethod::RejectRequest,
    ];

    /// Wire name used on the JSON-RPC transport.
    pub const fn as_str(&self) -> &'static str {
        match self {
            KeyringRpcMethod::ListAccounts => "keyring_listAccounts",
            KeyringRpcMethod::GetAccount => "keyring_getAccount",
            KeyringRpcMethod::GetAccountBalances => "keyring_getAccountBalances",
            KeyringRpcMethod::CreateAccount => "keyring_createAccount",
            KeyringRpcMethod::FilterAccountChains => "keyring_filterAccountChains",
            KeyringRpcMethod::UpdateAccount => "keyring_updateAccount",
            KeyringRpcMethod::DeleteAccount => "keyring_deleteAccount",
            KeyringRpcMethod::ExportAccount => "keyring_exportAccount",
            KeyringRpcMethod::ListRequests => "keyring_listRequests",
            KeyringRpcMethod::GetRequest => "keyring_getRequest",
            KeyringRpcMethod::SubmitRequest => "keyring_submitRequest",
            KeyringRpcMethod::ApproveRequest => "keyring_approveRequest",
            KeyringRpcMethod::RejectRequest => "keyring_rejectRequest",
        }
    }

    pub const fn category(&self) -> MethodCategory {
        match self {
            KeyringRpcMethod::ListAccounts
            | KeyringRpcMethod::GetAccount
            | KeyringRpcMethod::GetAccountBalances
            | KeyringRpcMethod::FilterAccountChains => MethodCategory::AccountRead,
            KeyringRpcMethod::CreateAccount
            | KeyringRpcMethod::UpdateAccount
            | KeyringRpcMethod::DeleteAccount => MethodCategory::AccountWrite,
            KeyringRpcMethod::ExportAccount => MethodCategory::AccountExport,
            KeyringRpcMethod::ListRequests | KeyringRpcMethod::GetRequest => {
                MethodCategory::RequestRead
            }
            KeyringRpcMethod::SubmitRequest
            | KeyringRpcMethod::ApproveRequest
            | KeyringRpcMethod::RejectRequest => MethodCategory::RequestWrite,
        }
    }

    /// Check if this method changes keyring state.
    pub const fn is_write(&self) -> bool {
        matches!(
            self.category(),
            MethodCategory::AccountWrite | MethodCategory::RequestWrite
        )
    }
}

impl fmt::Display for KeyringRpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a keyring method name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown keyring method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for KeyringRpcMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        get_method(s).ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

/// Method registry - wire name to method
static METHOD_REGISTRY: LazyLock<HashMap<&'static str, KeyringRpcMethod>> =
    LazyLock::new(|| {
        KeyringRpcMethod::ALL
            .into_iter()
            .map(|m| (m.as_str(), m))
            .collect()
    });

/// Look up a method by wire name.
pub fn get_method(name: &str) -> Option<KeyringRpcMethod> {
    METHOD_REGISTRY.get(name).copied()
}

/// Check if `name` is a keyring method.
pub fn is_keyring_method(name: &str) -> bool {
    METHOD_REGISTRY.contains_key(name)
}

/// Get all methods for a category
pub fn get_methods_by_category(category: MethodCategory) -> Vec<KeyringRpcMethod> {
    KeyringRpcMethod::ALL
        .into_iter()
        .filter(|m| m.category() == category)
        .collect()
}
