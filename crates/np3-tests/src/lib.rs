//! # np3-tests
//!
//! Behavioral tests for the NP3 codec.
//!
//! This crate provides:
//! - Seeded random generation of in-range profiles
//! - JSON fixtures pairing partial option documents with decoded results
//! - A shared tracing subscriber for debugging failures (`RUST_LOG=np3_core=debug`)

pub mod fixtures;
pub mod generators;

pub use fixtures::{Fixture, load_fixture};
pub use generators::{ProfileGenerator, random_name};

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per process
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
