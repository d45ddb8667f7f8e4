//! Forwarding of validated requests to the upstream service.
//!
//! The gateway deliberately strips inbound transport metadata: no inbound
//! headers and no query string reach the upstream. The outbound URL is the
//! matched template with each wildcard segment substituted by the resolved
//! parameter value, rooted at a fixed base URL.

use crate::errors::GatewayError;
use crate::matcher;
use crate::validator::{IncomingRequest, ValidatedRequest};
use http::Method;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{error, info};
use url::Url;

/// Upstream reply passed through to the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP client for the fixed upstream service.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    base_url: Url,
    client: reqwest::Client,
}

impl UpstreamClient {
    /// Build a client for `base_url` with a per-request timeout.
    ///
    /// Redirects are not followed; any non-2xx upstream status is surfaced
    /// as a gateway failure. The base URL is normalized to end with `/` so
    /// joining request paths extends it instead of replacing its last
    /// segment.
    pub fn new(mut base_url: Url, timeout: Duration) -> anyhow::Result<Self> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(UpstreamClient { base_url, client })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Forward a validated request upstream.
    ///
    /// The outbound request carries the inbound method and, for POST/PUT,
    /// the inbound body as `application/json`. `Accept-Encoding: identity`
    /// is set explicitly; nothing else from the inbound request is
    /// forwarded.
    ///
    /// # Arguments
    ///
    /// * `request` - The original inbound request
    /// * `validated` - The matcher/validator outcome for it
    ///
    /// # Returns
    ///
    /// The upstream status and body on 2xx, [`GatewayError::Upstream`] for
    /// transport failures and non-success statuses
    pub async fn forward(
        &self,
        request: &IncomingRequest,
        validated: &ValidatedRequest,
    ) -> Result<UpstreamResponse, GatewayError> {
        let path = resolve_outbound_path(&validated.template, &request.path, &validated.path_params);
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| GatewayError::Internal(format!("invalid upstream url for {path}: {e}")))?;

        let mut outbound = self
            .client
            .request(request.method.clone(), url.clone())
            .header(http::header::ACCEPT_ENCODING, "identity");

        if request.method == Method::POST || request.method == Method::PUT {
            if let Some(body) = &request.body {
                outbound = outbound
                    .header(http::header::CONTENT_TYPE, "application/json")
                    .body(body.clone());
            }
        }

        info!(method = %request.method, url = %url, "forwarding request upstream");
        let response = outbound.send().await?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, url = %url, "upstream returned non-success status");
            return Err(GatewayError::Upstream(format!(
                "upstream request failed with status {status} for url ({url})"
            )));
        }

        let body = response.text().await?;
        info!(status = %status, bytes = body.len(), "upstream response received");

        Ok(UpstreamResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Substitute each wildcard segment of `template` with the resolved
/// parameter value, falling back to the positional request segment when the
/// parameter was not resolved by name.
fn resolve_outbound_path(
    template: &str,
    request_path: &str,
    path_params: &HashMap<String, String>,
) -> String {
    template
        .split('/')
        .zip(request_path.split('/'))
        .map(|(template_segment, path_segment)| match matcher::wildcard_name(template_segment) {
            Some(name) => path_params
                .get(name)
                .map(String::as_str)
                .unwrap_or(path_segment),
            None => path_segment,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_outbound_path_positional() {
        let path = resolve_outbound_path("/pet/{petId}", "/pet/42", &HashMap::new());
        assert_eq!(path, "/pet/42");
    }

    #[test]
    fn test_resolve_outbound_path_prefers_resolved_params() {
        let params = HashMap::from([("petId".to_string(), "7".to_string())]);
        let path = resolve_outbound_path("/pet/{petId}", "/pet/42", &params);
        assert_eq!(path, "/pet/7");
    }

    #[test]
    fn test_resolve_outbound_path_literal_segments_untouched() {
        let path = resolve_outbound_path("/pet/findByStatus", "/pet/findByStatus", &HashMap::new());
        assert_eq!(path, "/pet/findByStatus");
    }

    #[test]
    fn test_base_url_normalized_with_trailing_slash() {
        let client = UpstreamClient::new(
            Url::parse("http://upstream.test/api/v3").unwrap(),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(client.base_url().path(), "/api/v3/");

        let joined = client.base_url().join("pet/42").unwrap();
        assert_eq!(joined.as_str(), "http://upstream.test/api/v3/pet/42");
    }
}
