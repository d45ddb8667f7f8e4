//! Path template matching against the loaded contract.
//!
//! Templates are compared segment by segment: a `{name}` segment matches any
//! single request segment, every other segment must match exactly
//! (case-sensitive, no trailing-slash normalization). Templates are
//! tried in contract declaration order and the first match wins, even when a
//! later template is more specific; contracts that need `/pet/mine` to beat
//! `/pet/{petId}` must declare it first.

use crate::contract::{Contract, PathItem};
use tracing::debug;

/// Find the first declared template matching `path`.
///
/// # Arguments
///
/// * `contract` - The loaded contract, iterated in declaration order
/// * `path` - Concrete request path with no query string (e.g. `/pet/42`)
///
/// # Returns
///
/// The matched template and its path item, or `None` when nothing matches
#[must_use]
pub fn match_template<'a>(contract: &'a Contract, path: &str) -> Option<(&'a str, &'a PathItem)> {
    for (template, item) in &contract.paths {
        if template_matches(template, path) {
            debug!(path = %path, template = %template, "path template matched");
            return Some((template.as_str(), item));
        }
    }
    debug!(path = %path, "no path template matched");
    None
}

/// Whether a single template matches a concrete path.
///
/// Both sides must split into the same number of `/`-delimited segments, and
/// every non-wildcard template segment must equal the request segment.
#[must_use]
pub fn template_matches(template: &str, path: &str) -> bool {
    let template_segments: Vec<&str> = template.split('/').collect();
    let path_segments: Vec<&str> = path.split('/').collect();

    if template_segments.len() != path_segments.len() {
        return false;
    }

    template_segments
        .iter()
        .zip(&path_segments)
        .all(|(t, p)| wildcard_name(t).is_some() || t == p)
}

/// Positionally extract the request segment bound to `{name}` in `template`.
///
/// Returns `None` when the segment counts differ or the template declares no
/// such wildcard. Used as the fallback when the surrounding framework did not
/// pre-extract path parameters.
#[must_use]
pub fn extract_path_value<'a>(path: &'a str, template: &str, name: &str) -> Option<&'a str> {
    let template_segments: Vec<&str> = template.split('/').collect();
    let path_segments: Vec<&str> = path.split('/').collect();

    if template_segments.len() != path_segments.len() {
        return None;
    }

    template_segments
        .iter()
        .position(|segment| wildcard_name(segment) == Some(name))
        .and_then(|idx| path_segments.get(idx).copied())
}

/// Parameter name of a wildcard segment (`{petId}` yields `petId`), or
/// `None` for a literal segment.
#[must_use]
pub fn wildcard_name(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}
