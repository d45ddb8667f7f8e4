use super::response::{write_error_response, write_upstream_response, HttpResponse};
use crate::contract::Contract;
use crate::errors::{ErrorEnvelope, GatewayError};
use crate::proxy::{UpstreamClient, UpstreamResponse};
use crate::validator::{IncomingRequest, RequestValidator};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Per-request orchestration: validate against the contract, forward the
/// conforming request upstream, and translate every failure into the error
/// envelope exactly once.
#[derive(Clone)]
pub struct GatewayService {
    validator: RequestValidator,
    upstream: UpstreamClient,
}

impl GatewayService {
    #[must_use]
    pub fn new(contract: Arc<Contract>, upstream: UpstreamClient) -> Self {
        GatewayService {
            validator: RequestValidator::new(contract),
            upstream,
        }
    }

    #[must_use]
    pub fn validator(&self) -> &RequestValidator {
        &self.validator
    }

    /// Handle one request end to end. Never fails: every error path ends in
    /// an envelope response.
    pub async fn handle(&self, request: IncomingRequest) -> HttpResponse {
        match self.process(&request).await {
            Ok(upstream) => {
                info!(
                    method = %request.method,
                    path = %request.path,
                    status = upstream.status,
                    "request proxied"
                );
                write_upstream_response(&upstream)
            }
            Err(err) => {
                match &err {
                    GatewayError::Validation(failure) => warn!(
                        method = %request.method,
                        path = %request.path,
                        kind = failure.kind(),
                        error = %failure,
                        "request failed contract validation"
                    ),
                    other => error!(
                        method = %request.method,
                        path = %request.path,
                        error = %other,
                        "request failed"
                    ),
                }
                let (status, envelope) = ErrorEnvelope::from_gateway_error(&err);
                write_error_response(status, &envelope)
            }
        }
    }

    async fn process(&self, request: &IncomingRequest) -> Result<UpstreamResponse, GatewayError> {
        let validated = self.validator.validate(request)?;
        self.upstream.forward(request, &validated).await
    }
}
