//! Logging setup for embedders of the governance engine.
//!
//! The engine itself only emits `tracing` events; hosts that want them
//! rendered call [`init_logging`] once at startup. Filtering follows the
//! `DATAWARDEN_LOG` environment variable when set, falling back to the
//! directive the host supplies.

use tracing_subscriber::EnvFilter;

use crate::error::DataWardenError;
use crate::Result;

/// Environment variable consulted for log filter directives.
pub const LOG_ENV_VAR: &str = "DATAWARDEN_LOG";

/// Initializes a compact `tracing` subscriber for the process.
///
/// `default_directive` is any `EnvFilter` directive (for example `"info"`
/// or `"datawarden_core=debug"`); the `DATAWARDEN_LOG` environment
/// variable overrides it when set.
///
/// # Errors
/// [`DataWardenError::Configuration`] when the directive does not parse or
/// a global subscriber is already installed.
pub fn init_logging(default_directive: &str) -> Result<()> {
    init_with_directive(&env_or_default(default_directive))
}

/// Resolves the effective filter directive: environment wins.
fn env_or_default(default_directive: &str) -> String {
    std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| default_directive.to_string())
}

fn init_with_directive(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive).map_err(|e| {
        DataWardenError::configuration(format!("invalid log filter '{}': {}", directive, e))
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .try_init()
        .map_err(|e| {
            DataWardenError::configuration(format!("failed to initialize logging: {}", e))
        })
}
