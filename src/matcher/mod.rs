//! # Matcher Module
//!
//! The matcher resolves concrete request paths against the path templates
//! declared in the contract.
//!
//! ## Overview
//!
//! The matcher is responsible for:
//! - Comparing request paths to declared templates segment by segment
//! - Treating `{name}` segments as single-segment wildcards
//! - Extracting path parameter values by wildcard position
//!
//! ## Matching semantics
//!
//! Matching is exact and case-sensitive, segment counts must agree, and no
//! trailing-slash normalization is applied. Templates are scanned in contract
//! declaration order and the first match wins; a literal template declared
//! after an overlapping wildcard template is unreachable for paths both
//! cover.
//!
//! ## Example
//!
//! ```rust,ignore
//! use valigate::matcher;
//!
//! if let Some((template, item)) = matcher::match_template(&contract, "/pet/42") {
//!     println!("matched template: {template}");
//! }
//! ```

mod core;
#[cfg(test)]
mod tests;

pub use core::{extract_path_value, match_template, template_matches, wildcard_name};
