#![doc(test(attr(deny(warnings))))]

//! Monthly ledger and forecast engine for a personal/shared finance
//! tracker: month classification, per-month summaries, forward balance
//! projection, recurring-entry expansion, partial value adjustments, and
//! overdue detection, over an injected asynchronous ledger repository.

pub mod core;
pub mod domain;
pub mod errors;
pub mod repository;
pub mod session;
pub mod time;

pub use crate::core::{LedgerEngine, MonthClass, MonthView};
pub use errors::{EngineError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("ledger_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Ledger core tracing initialized.");
    });
}
