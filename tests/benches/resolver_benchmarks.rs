//! # Resolver Benchmarks
//!
//! Resolution cost per tier. Every call is a constant-size lookup plus at most
//! one URL parse, so all tiers should sit well under a microsecond.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keyring_snap_permissions::{is_protocol_allowed, resolve, KeyringPermissionGate, Origin};

fn bench_resolve_by_tier(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let cases = [
        ("internal", Origin::from("metamask")),
        ("partner", Origin::from("https://portfolio.metamask.io")),
        ("website", Origin::from("https://some-dapp.com")),
        ("invalid_scheme", Origin::from("http://some-dapp.com")),
        ("invalid_type", Origin::Null),
    ];

    for (name, origin) in &cases {
        group.bench_function(*name, |b| b.iter(|| black_box(resolve(black_box(origin)))));
    }

    group.finish();
}

fn bench_protocol_check(c: &mut Criterion) {
    let origin = Origin::from("https://some-dapp.com/path?query=1#fragment");
    c.bench_function("is_protocol_allowed", |b| {
        b.iter(|| black_box(is_protocol_allowed(black_box(&origin))))
    });
}

fn bench_gate_batch(c: &mut Criterion) {
    let gate = KeyringPermissionGate::default();
    let origin = Origin::from("https://some-dapp.com");
    let body = br#"[{"method":"keyring_listAccounts"},{"method":"keyring_getAccount"},{"method":"keyring_getRequest"}]"#;

    c.bench_function("gate_authorize_batch", |b| {
        b.iter(|| black_box(gate.authorize_request(&origin, black_box(body))))
    });
}

criterion_group!(
    benches,
    bench_resolve_by_tier,
    bench_protocol_check,
    bench_gate_batch
);
criterion_main!(benches);
