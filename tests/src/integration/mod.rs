//! Integration tests across the resolver, protocol check and gate.

pub mod tier_table;
