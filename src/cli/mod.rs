//! # CLI Module
//!
//! Command-line interface for the valigate gateway binary.
//!
//! ## Commands
//!
//! ### `serve`
//!
//! Run the gateway against a contract file:
//!
//! ```bash
//! valigate serve --contract petstore.json --upstream http://localhost:9000/api/v3
//! ```
//!
//! Options:
//! - `--contract <FILE>` - Path to the contract file, YAML or JSON (required)
//! - `--upstream <URL>` - Base URL of the upstream service (required, or `VALIGATE_UPSTREAM`)
//! - `--addr <ADDR>` - Listen address (default: `0.0.0.0:8080`)
//!
//! ### `check`
//!
//! Load a contract and print its operations without starting a server:
//!
//! ```bash
//! valigate check --contract petstore.json
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands};
