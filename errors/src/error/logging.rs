//! Logging setup and helpers for diagnostic output
//!
//! `env_logger`-based logging configured through the standard `log` crate,
//! with helpers that emit a failure's full rendered chain.

use std::sync::Once;

use log::{error, warn};

use super::types::ChainError;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure using `env_logger`.
pub struct DiagnosticLog;

impl DiagnosticLog {
    /// Initializes the logging system; call once at application startup.
    ///
    /// Levels are configured through the `RUST_LOG` environment variable:
    /// - `RUST_LOG=info` - info and above (recommended for production)
    /// - `RUST_LOG=seahorse_errors=trace` - include render computations
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();
        });
    }

    /// Initializes logging for test environments.
    ///
    /// Use this in test modules to avoid initialization conflicts.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Logs a failure with its full rendered chain.
    pub fn log_failure(context: &str, err: &ChainError) {
        error!("{context}:{}", err.render());
    }

    /// Logs a non-fatal failure with its full rendered chain.
    pub fn log_warning(context: &str, err: &ChainError) {
        warn!("{context}:{}", err.render());
    }
}
