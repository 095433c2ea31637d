//! Demonstrates failure events emitted with the `tracing` feature
//!
//! Run with: cargo run --example guard_tracing --features tracing

use requisite::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting guard tracing demo");

    // Passing guards stay silent
    let _ = 8080u16.require(true, "unused");

    // Failing guards emit one debug event each
    let _ = 80u16.require_that(|p| *p >= 1024, "port must be unprivileged");
    let _ = "".check(|s| !s.is_empty(), || "name was cleared".to_string());
    let _ = 0.check_or_else(|v| *v > 0, || "custom failure");

    tracing::info!("Done");
}
