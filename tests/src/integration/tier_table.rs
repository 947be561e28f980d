//! # Tier Table
//!
//! Exact method lists per origin, including order, and the protocol truth
//! table. These lists are a security boundary; a reorder or an extra entry
//! must fail here.

#[cfg(test)]
mod tests {
    use keyring_snap_permissions::{
        is_protocol_allowed, keyring_snap_permissions_builder, KeyringRpcMethod, Origin,
    };
    use serde_json::json;

    const PORTFOLIO_ORIGINS: [&str; 3] = [
        "https://portfolio.metamask.io",
        "https://dev.portfolio.metamask.io",
        "https://ramps-dev.portfolio.metamask.io",
    ];

    const WEBSITE_METHODS: [KeyringRpcMethod; 11] = [
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

    /// Origins that must never receive a permission.
    fn denied_origins() -> Vec<Origin> {
        vec![
            Origin::from(""),
            Origin::from("null"),
            Origin::from("sftp://some-dapp.com"),
            Origin::from("http://some-dapp.com"),
            Origin::from("0"),
            Origin::Absent,
            Origin::Null,
            Origin::from(true),
            Origin::from(false),
            Origin::from(1i64),
            Origin::from(0i64),
            Origin::from(-1i64),
        ]
    }

    #[test]
    fn test_portfolio_origins() {
        for origin in PORTFOLIO_ORIGINS {
            let permissions = keyring_snap_permissions_builder(origin);
            assert_eq!(
                permissions(),
                [
                    KeyringRpcMethod::ListAccounts,
                    KeyringRpcMethod::GetAccount,
                    KeyringRpcMethod::GetAccountBalances,
                    KeyringRpcMethod::SubmitRequest,
                ],
                "{origin}"
            );
            assert!(!permissions().contains(&KeyringRpcMethod::CreateAccount));
            assert!(permissions().contains(&KeyringRpcMethod::SubmitRequest));
        }
    }

    #[test]
    fn test_metamask_origin() {
        let permissions = keyring_snap_permissions_builder("metamask");
        assert_eq!(
            permissions(),
            [
                KeyringRpcMethod::ListAccounts,
                KeyringRpcMethod::GetAccount,
                KeyringRpcMethod::FilterAccountChains,
                KeyringRpcMethod::DeleteAccount,
                KeyringRpcMethod::ListRequests,
                KeyringRpcMethod::GetRequest,
                KeyringRpcMethod::SubmitRequest,
                KeyringRpcMethod::RejectRequest,
            ]
        );
        assert!(!permissions().contains(&KeyringRpcMethod::CreateAccount));
    }

    #[test]
    fn test_known_and_unknown_websites() {
        for origin in ["https://some-dapp.com", "https://some-other-dapp.com"] {
            let permissions = keyring_snap_permissions_builder(origin);
            assert_eq!(permissions(), WEBSITE_METHODS, "{origin}");
        }
    }

    #[test]
    fn test_denied_origins_get_nothing() {
        for origin in denied_origins() {
            let permissions = keyring_snap_permissions_builder(origin.clone());
            assert!(permissions().is_empty(), "{origin:?}");
        }
    }

    #[test]
    fn test_denied_json_origins_get_nothing() {
        let values = [
            json!(""),
            json!("null"),
            json!("sftp://some-dapp.com"),
            json!("http://some-dapp.com"),
            json!("0"),
            json!(null),
            json!(true),
            json!(false),
            json!(1),
            json!(0),
            json!(-1),
            json!(1.5),
            json!([]),
            json!({"origin": "metamask"}),
        ];
        for value in &values {
            let permissions = keyring_snap_permissions_builder(Origin::from(value));
            assert!(permissions().is_empty(), "{value}");
        }
    }

    #[test]
    fn test_protocol_truth_table() {
        let cases = [
            (Origin::from("http://some-dapp.com"), false),
            (Origin::from("https://some-dapp.com"), true),
            (Origin::from("sftp://some-dapp.com"), false),
            (Origin::from(""), false),
            (Origin::from("null"), false),
            (Origin::from("0"), false),
            (Origin::Absent, false),
            (Origin::Null, false),
            (Origin::from(true), false),
            (Origin::from(false), false),
            (Origin::from(1i64), false),
            (Origin::from(0i64), false),
            (Origin::from(-1i64), false),
        ];
        for (origin, expected) in cases {
            assert_eq!(is_protocol_allowed(&origin), expected, "{origin:?}");
        }
    }

    #[test]
    fn test_accessor_idempotent_per_origin() {
        let mut origins = denied_origins();
        origins.push(Origin::from("metamask"));
        origins.push(Origin::from("https://some-dapp.com"));
        origins.extend(PORTFOLIO_ORIGINS.map(Origin::from));

        for origin in origins {
            let permissions = keyring_snap_permissions_builder(origin);
            let first = permissions().to_vec();
            let second = permissions().to_vec();
            assert_eq!(first, second);
        }
    }
}
