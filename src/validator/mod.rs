//! # Validator Module
//!
//! Request validation against the loaded contract.
//!
//! ## Overview
//!
//! The validator is responsible for:
//! - Resolving the path template and operation a request targets
//! - Checking declared path and query parameters (presence, integer
//!   coercion, enum membership) in one declaration-order pass
//! - Checking request body presence and JSON syntax for POST/PUT
//!
//! Validation is fail-fast: the first violation is returned as a typed
//! [`ValidationFailure`] whose `Display` text is the client-facing message.
//! Full JSON-Schema body validation is deliberately out of scope; only
//! syntactic well-formedness is checked.

mod body;
mod core;
mod failure;
mod params;

pub use body::validate_body;
pub use core::{IncomingRequest, RequestValidator, ValidatedRequest};
pub use failure::ValidationFailure;
pub use params::validate_parameters;
