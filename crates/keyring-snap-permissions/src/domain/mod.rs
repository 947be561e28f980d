//! Domain types for keyring permissions.
//!
//! `protocol`, `tiers` and `resolver` are pure and hold no state. The gate that
//! consumes them lives in [`crate::service`].

pub mod config;
pub mod error;
pub mod methods;
pub mod origin;
pub mod protocol;
pub mod resolver;
pub mod tiers;

// Re-exports for convenience
pub use config::{ConfigError, GateConfig, KeyringConfig, LoggingConfig};
pub use error::{PermissionError, PermissionResult, RpcErrorObject};
pub use methods::{get_method, is_keyring_method, KeyringRpcMethod, MethodCategory};
pub use origin::Origin;
pub use protocol::is_protocol_allowed;
pub use resolver::{keyring_snap_permissions_builder, resolve};
pub use tiers::{
    MethodList, TrustTier, METAMASK_ALLOWED_METHODS, METAMASK_ORIGIN, PORTFOLIO_ALLOWED_METHODS,
    PORTFOLIO_ORIGINS, WEBSITE_ALLOWED_METHODS,
};
