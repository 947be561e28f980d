//! Origin trust tiers and their fixed method lists.
//!
//! - Internal: the wallet's own privileged code path (`"metamask"`)
//! - Partner: portfolio service origins, read/submit only
//! - Website: any other `https` origin, broad dapp-facing set
//! - Invalid: everything else, no methods
//!
//! These lists are compiled in. They are never sourced from configuration.

use super::methods::{KeyringRpcMethod, MethodCategory};
use super::origin::Origin;
use super::protocol::is_protocol_allowed;
use std::collections::BTreeSet;

/// Ordered list of methods an origin may call.
pub type MethodList = &'static [KeyringRpcMethod];

/// Origin used by the wallet itself.
pub const METAMASK_ORIGIN: &str = "metamask";

/// Partner portfolio origins, matched exactly.
pub const PORTFOLIO_ORIGINS: [&str; 3] = [
    "https://portfolio.metamask.io",
    "https://dev.portfolio.metamask.io",
    "https://ramps-dev.portfolio.metamask.io",
];

/// Methods callable by the wallet. Creation, update, export and approval do not
/// go through this path.
pub const METAMASK_ALLOWED_METHODS: [KeyringRpcMethod; 8] = [
    KeyringRpcMethod::ListAccounts,
    KeyringRpcMethod::GetAccount,
    KeyringRpcMethod::FilterAccountChains,
    KeyringRpcMethod::DeleteAccount,
    KeyringRpcMethod::ListRequests,
    KeyringRpcMethod::GetRequest,
    KeyringRpcMethod::SubmitRequest,
    KeyringRpcMethod::RejectRequest,
];

/// Methods callable by partner portfolio origins.
pub const PORTFOLIO_ALLOWED_METHODS: [KeyringRpcMethod; 4] = [
    KeyringRpcMethod::ListAccounts,
    KeyringRpcMethod::GetAccount,
    KeyringRpcMethod::GetAccountBalances,
    KeyringRpcMethod::SubmitRequest,
];

/// Methods callable by any other `https` origin.
///
/// Per-dapp authorization is enforced by the permission controller upstream;
/// this list only bounds what a website could ever reach.
pub const WEBSITE_ALLOWED_METHODS: [KeyringRpcMethod; 11] = [
    KeyringRpcMethod::ListAccounts,
    KeyringRpcMethod::GetAccount,
    KeyringRpcMethod::CreateAccount,
    KeyringRpcMethod::FilterAccountChains,
    KeyringRpcMethod::UpdateAccount,
    KeyringRpcMethod::DeleteAccount,
    KeyringRpcMethod::ExportAccount,
    KeyringRpcMethod::ListRequests,
    KeyringRpcMethod::GetRequest,
    KeyringRpcMethod::ApproveRequest,
    KeyringRpcMethod::RejectRequest,
];

/// Trust classification of an origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrustTier {
    /// Wallet-internal caller
    Internal,
    /// Known partner service
    PartnerOriginSet,
    /// Any other `https` origin
    GenericKnownOrigin,
    /// Untrusted protocol, malformed or non-string origin
    Invalid,
}

impl TrustTier {
    /// Classify an origin. First match wins: internal, partner, website.
    pub fn classify(origin: &Origin) -> Self {
        let text = match origin {
            Origin::Text(text) => text.as_str(),
            Origin::Absent
            | Origin::Null
            | Origin::Bool(_)
            | Origin::Number(_)
            | Origin::Structured => return TrustTier::Invalid,
        };

        if text == METAMASK_ORIGIN {
            TrustTier::Internal
        } else if PORTFOLIO_ORIGINS.contains(&text) {
            TrustTier::PartnerOriginSet
        } else if is_protocol_allowed(origin) {
            TrustTier::GenericKnownOrigin
        } else {
            TrustTier::Invalid
        }
    }

    /// Fixed method list for this tier.
    pub const fn allowed_methods(&self) -> MethodList {
        match self {
            TrustTier::Internal => &METAMASK_ALLOWED_METHODS,
            TrustTier::PartnerOriginSet => &PORTFOLIO_ALLOWED_METHODS,
            TrustTier::GenericKnownOrigin => &WEBSITE_ALLOWED_METHODS,
            TrustTier::Invalid => &[],
        }
    }

    /// Method categories reachable from this tier.
    pub fn categories(&self) -> BTreeSet<MethodCategory> {
        self.allowed_methods().iter().map(|m| m.category()).collect()
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            TrustTier::Internal => "internal",
            TrustTier::PartnerOriginSet => "partner",
            TrustTier::GenericKnownOrigin => "website",
            TrustTier::Invalid => "invalid",
        }
    }
}
