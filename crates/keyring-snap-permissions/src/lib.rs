//! Keyring Snap RPC permissions.
//!
//! Decides which keyring RPC methods a caller origin may invoke.
//!
//! # Trust Tiers
//!
//! | Tier     | Origin                                | Methods                         |
//! |----------|---------------------------------------|---------------------------------|
//! | Internal | `"metamask"`                          | account read/delete, requests   |
//! | Partner  | portfolio origins (exact match)       | list/get accounts, balances, submit |
//! | Website  | any other valid `https` URL           | full dapp-facing set            |
//! | Invalid  | everything else (incl. non-strings)   | none                            |
//!
//! Classification is first-match-wins in the order above. Unknown or malformed
//! input always lands in `Invalid`; there is no error path.
//!
//! # Usage
//!
//! ```
//! use keyring_snap_permissions::{resolve, KeyringRpcMethod, Origin};
//!
//! let methods = resolve(&Origin::from("https://portfolio.metamask.io"));
//! assert!(methods.contains(&KeyringRpcMethod::SubmitRequest));
//! assert!(resolve(&Origin::Null).is_empty());
//! ```
//!
//! The resolver does not authorize individual dapps. A website origin only
//! bounds what could be reached; the permission controller upstream decides
//! whether a given dapp may talk to the snap at all.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod service;
pub mod telemetry;

// Re-exports for public API
pub use domain::config::{GateConfig, KeyringConfig, LoggingConfig};
pub use domain::error::{PermissionError, PermissionResult, RpcErrorObject};
pub use domain::methods::{get_method, is_keyring_method, KeyringRpcMethod, MethodCategory};
pub use domain::origin::Origin;
pub use domain::protocol::is_protocol_allowed;
pub use domain::resolver::{keyring_snap_permissions_builder, resolve};
pub use domain::tiers::{MethodList, TrustTier};
pub use service::KeyringPermissionGate;
pub use telemetry::{init_logging, TelemetryError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
