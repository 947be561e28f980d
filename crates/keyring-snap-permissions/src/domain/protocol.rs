//! Origin protocol check.

use super::origin::Origin;
use url::Url;

/// The only scheme trusted to reach keyring methods.
pub const ALLOWED_SCHEME: &str = "https";

/// Check whether `origin` is a URL served over `https`.
///
/// Non-string origins and strings that fail to parse as a URL are rejected.
pub fn is_protocol_allowed(origin: &Origin) -> bool {
    match origin {
        Origin::Text(text) => Url::parse(text)
            .map(|url| url.scheme() == ALLOWED_SCHEME)
            .unwrap_or(false),
        Origin::Absent
        | Origin::Null
        | Origin::Bool(_)
        | Origin::Number(_)
        | Origin::Structured => false,
    }
}
