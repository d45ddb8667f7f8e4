use crate::validator::IncomingRequest;
use bytes::Bytes;
use http::Method;
use std::collections::HashMap;
use tracing::debug;

/// Parse query string parameters from a URL path.
///
/// Extracts everything after the `?` character and URL-decodes parameter
/// names and values. Duplicate keys keep the last value seen.
///
/// # Arguments
///
/// * `path` - The full URL path (e.g., `/pet/findByStatus?status=sold`)
///
/// # Returns
///
/// A map of query parameter names to values
pub fn parse_query_params(path: &str) -> HashMap<String, String> {
    if let Some(pos) = path.find('?') {
        let query_str = &path[pos + 1..];
        url::form_urlencoded::parse(query_str.as_bytes())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    } else {
        HashMap::new()
    }
}

/// Build the validator's request view from raw HTTP request pieces.
///
/// The pre-extracted path parameter map stays empty here: this listener
/// hands raw paths to the validator, which resolves path parameters
/// positionally against the matched template.
///
/// # Arguments
///
/// * `method` - HTTP method
/// * `target` - Request target, path with optional query string
/// * `body` - Collected request body bytes
///
/// # Returns
///
/// The [`IncomingRequest`] handed to the validator
pub fn build_incoming(method: Method, target: &str, body: Bytes) -> IncomingRequest {
    let path = target.split('?').next().unwrap_or("/").to_string();
    let query_params = parse_query_params(target);

    debug!(
        method = %method,
        path = %path,
        query_count = query_params.len(),
        body_bytes = body.len(),
        "request parsed"
    );

    let body = if body.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(&body).to_string())
    };

    IncomingRequest {
        method,
        path,
        path_params: HashMap::new(),
        query_params,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_params() {
        let q = parse_query_params("/p?x=1&y=2");
        assert_eq!(q.get("x"), Some(&"1".to_string()));
        assert_eq!(q.get("y"), Some(&"2".to_string()));
        assert!(parse_query_params("/p").is_empty());
    }

    #[test]
    fn test_parse_query_params_decodes() {
        let q = parse_query_params("/p?name=a%20b");
        assert_eq!(q.get("name"), Some(&"a b".to_string()));
    }

    #[test]
    fn test_build_incoming_splits_query() {
        let req = build_incoming(
            Method::GET,
            "/pet/findByStatus?status=sold",
            Bytes::new(),
        );
        assert_eq!(req.path, "/pet/findByStatus");
        assert_eq!(req.query_params.get("status"), Some(&"sold".to_string()));
        assert!(req.path_params.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn test_build_incoming_keeps_body_text() {
        let req = build_incoming(Method::POST, "/pet", Bytes::from_static(b"{\"a\":1}"));
        assert_eq!(req.body.as_deref(), Some("{\"a\":1}"));
    }
}
