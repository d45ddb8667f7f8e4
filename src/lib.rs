//! # valigate
//!
//! **valigate** is a contract-driven request validation gateway. It sits in
//! front of an HTTP service, checks every incoming request against an
//! OpenAPI-style contract, and forwards only conforming requests upstream.
//! Requests that violate the contract are rejected at the edge with a
//! stable JSON error envelope, so the upstream service never sees them.
//!
//! ## Overview
//!
//! The gateway loads a contract file (YAML or JSON) at startup and derives
//! everything from it: which path templates exist, which methods each
//! template accepts, which path and query parameters an operation declares,
//! and whether a request body is required. At runtime each request is
//! matched, validated, and either proxied or answered with an error
//! envelope. Validation is fail-fast: the first violation found is the one
//! reported.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`contract`]** - Contract file parsing and the in-memory contract model
//! - **[`matcher`]** - Path template matching and path parameter extraction
//! - **[`validator`]** - Request validation against the matched operation
//! - **[`proxy`]** - Upstream client that forwards validated requests
//! - **[`server`]** - HTTP listener, request decoding, and response encoding
//! - **[`errors`]** - Gateway error types and the JSON error envelope
//! - **[`runtime_config`]** - Environment-variable runtime configuration
//! - **[`cli`]** - The `serve` and `check` subcommands
//!
//! ## Error Envelope
//!
//! Every rejected request is answered with the same JSON shape, regardless
//! of which check failed:
//!
//! ```json
//! {
//!   "error": true,
//!   "status": 400,
//!   "message": "Required path parameter missing: petId",
//!   "type": "ValidationError"
//! }
//! ```
//!
//! Contract violations produce `400` with `"type": "ValidationError"`.
//! Upstream and internal failures produce `500` with `"type": "ServerError"`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use valigate::proxy::UpstreamClient;
//! use valigate::server::{GatewayService, HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let contract = valigate::load_contract("petstore.json")?;
//!     let upstream = UpstreamClient::new(
//!         "http://localhost:9000/api/v3".parse()?,
//!         Duration::from_secs(30),
//!     )?;
//!     let service = GatewayService::new(Arc::new(contract), upstream);
//!     let server = HttpServer::bind(service, "0.0.0.0:8080".parse()?).await?;
//!     server.run().await
//! }
//! ```
//!
//! Or run the binary directly:
//!
//! ```bash
//! valigate serve --contract petstore.json --upstream http://localhost:9000/api/v3
//! ```
//!
//! ## Environment Variables
//!
//! - `VALIGATE_UPSTREAM` - Default for the `--upstream` flag
//! - `VALIGATE_UPSTREAM_TIMEOUT_SECS` - Upstream request timeout (default: 30)
//! - `VALIGATE_LOG` - Log filter, falls back to `RUST_LOG`, then `info`

pub mod cli;
pub mod contract;
pub mod errors;
pub mod matcher;
pub mod proxy;
pub mod runtime_config;
pub mod server;
pub mod validator;

pub use contract::{
    load_contract, Contract, Operation, Parameter, ParameterLocation, ParameterType, PathItem,
};
pub use errors::{ErrorEnvelope, GatewayError};
pub use validator::{IncomingRequest, RequestValidator, ValidatedRequest, ValidationFailure};
