//! Origin → method list resolution.

use super::origin::Origin;
use super::tiers::{MethodList, TrustTier};

/// Resolve the methods `origin` may call on the keyring.
///
/// Never fails: anything that is not a recognized caller resolves to an empty
/// list.
pub fn resolve(origin: &Origin) -> MethodList {
    TrustTier::classify(origin).allowed_methods()
}

/// Build a deferred accessor for the methods `origin` may call.
///
/// The accessor re-classifies on every call; nothing is cached.
pub fn keyring_snap_permissions_builder(
    origin: impl Into<Origin>,
) -> impl Fn() -> MethodList + Send + Sync + 'static {
    let origin = origin.into();
    move || resolve(&origin)
}
