//! # Keyring Permissions Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/     # Tier table, gate flows, concurrent callers
//! └── exploits/        # Privilege escalation attempts against the resolver
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p keyring-tests
//!
//! # By category
//! cargo test -p keyring-tests integration::
//! cargo test -p keyring-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p keyring-tests
//! ```

pub mod integration;
