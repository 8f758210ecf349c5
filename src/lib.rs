#![doc(test(attr(deny(warnings))))]

//! BillBuddy keeps a group's shared expenses, the settlements against them,
//! and an individual's categorized personal spending, mirrored to local JSON
//! storage and queried through pure derivation functions.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("billbuddy=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("BillBuddy tracing initialized.");
    });
}
