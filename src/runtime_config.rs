//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for the gateway's runtime
//! behavior. Settings that belong on the command line (contract path,
//! upstream URL, bind address) live in [`crate::cli`] instead.
//!
//! ## Environment Variables
//!
//! ### `VALIGATE_UPSTREAM_TIMEOUT_SECS`
//!
//! Per-request timeout for the outbound upstream call, in whole seconds.
//! Default: `30`.
//!
//! ### `VALIGATE_LOG` / `RUST_LOG`
//!
//! Log filtering, standard `tracing_subscriber::EnvFilter` syntax.
//! `VALIGATE_LOG` wins when both are set; read at startup in `main`.
//!
//! ## Usage
//!
//! ```rust
//! use valigate::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("upstream timeout: {:?}", config.upstream_timeout);
//! ```

use std::env;
use std::time::Duration;
use tracing::warn;

const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration loaded from environment variables.
///
/// Load this at startup using [`RuntimeConfig::from_env()`].
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Timeout for each outbound upstream request (default: 30s).
    pub upstream_timeout: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables. Unparseable values
    /// fall back to the default with a warning.
    pub fn from_env() -> Self {
        let upstream_timeout = match env::var("VALIGATE_UPSTREAM_TIMEOUT_SECS") {
            Ok(val) => match val.parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(_) => {
                    warn!(
                        value = %val,
                        default = DEFAULT_UPSTREAM_TIMEOUT_SECS,
                        "VALIGATE_UPSTREAM_TIMEOUT_SECS is not a number, using default"
                    );
                    Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS)
                }
            },
            Err(_) => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        RuntimeConfig { upstream_timeout }
    }
}
