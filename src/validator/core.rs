use super::{validate_body, validate_parameters, ValidationFailure};
use crate::contract::Contract;
use crate::matcher;
use http::Method;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Read-only view of an inbound request, as consumed by the validator.
///
/// `path_params` carries values a surrounding framework already lifted out
/// of the path; the bundled HTTP listener leaves it empty and the validator
/// falls back to positional extraction against the matched template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncomingRequest {
    pub method: Method,
    /// Concrete request path without the query string.
    pub path: String,
    pub path_params: HashMap<String, String>,
    pub query_params: HashMap<String, String>,
    /// Raw body text, `None` when the request carried none.
    pub body: Option<String>,
}

/// Outcome of a successful validation pass, handed to the proxy layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// The contract template the request matched.
    pub template: String,
    /// Resolved path parameter values, keyed by parameter name.
    pub path_params: HashMap<String, String>,
}

/// Validates incoming requests against a loaded contract.
///
/// The contract is shared read-only behind an `Arc`; a validator clone is
/// cheap and safe to use from any number of concurrent tasks.
#[derive(Debug, Clone)]
pub struct RequestValidator {
    contract: Arc<Contract>,
}

impl RequestValidator {
    #[must_use]
    pub fn new(contract: Arc<Contract>) -> Self {
        Self { contract }
    }

    #[must_use]
    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    /// Validate a request, terminal on the first violation.
    ///
    /// Checking order: path template match, method resolution, declared
    /// parameters in declaration order (path presence and type, query
    /// presence and enum membership), and finally body presence and JSON
    /// syntax for POST/PUT.
    ///
    /// # Arguments
    ///
    /// * `request` - The inbound request view
    ///
    /// # Returns
    ///
    /// The matched template and resolved path parameters, or the first
    /// [`ValidationFailure`] encountered
    pub fn validate(
        &self,
        request: &IncomingRequest,
    ) -> Result<ValidatedRequest, ValidationFailure> {
        info!(method = %request.method, path = %request.path, "validating request");

        let (template, item) = matcher::match_template(&self.contract, &request.path)
            .ok_or_else(|| ValidationFailure::PathNotFound {
                path: request.path.clone(),
            })?;

        let operation =
            item.operation(&request.method)
                .ok_or_else(|| ValidationFailure::MethodNotAllowed {
                    method: request.method.to_string(),
                    template: template.to_string(),
                })?;

        let path_params = validate_parameters(
            operation,
            template,
            &request.path,
            &request.path_params,
            &request.query_params,
        )?;

        if request.method == Method::POST || request.method == Method::PUT {
            validate_body(operation, request.body.as_deref())?;
        }

        info!(
            method = %request.method,
            path = %request.path,
            template = %template,
            "validation passed"
        );

        Ok(ValidatedRequest {
            template: template.to_string(),
            path_params,
        })
    }
}
