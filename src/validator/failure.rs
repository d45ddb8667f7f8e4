use thiserror::Error;

/// A single contract violation found while validating a request.
///
/// Validation is fail-fast: the first violation in checking order is
/// returned and nothing else is inspected. The `Display` text is the exact
/// message surfaced to clients inside the error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("No matching path found in contract for: {path}")]
    PathNotFound { path: String },

    #[error("Method {method} not allowed for path: {template}")]
    MethodNotAllowed { method: String, template: String },

    #[error("Required path parameter missing: {name}")]
    MissingPathParam { name: String },

    #[error("Path parameter '{name}' must be an integer, got: {value}")]
    BadPathParamType { name: String, value: String },

    #[error("Required query parameter missing: {name}")]
    MissingQueryParam { name: String },

    #[error("Invalid enum value for '{name}'. Allowed values: [{}], got: {value}", .allowed.join(", "))]
    InvalidEnumValue {
        name: String,
        allowed: Vec<String>,
        value: String,
    },

    #[error("Request body is required but missing")]
    MissingBody,

    #[error("Invalid JSON in request body: {detail}")]
    InvalidBodyJson { detail: String },
}

impl ValidationFailure {
    /// Stable kind tag, used for structured logs and assertions.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationFailure::PathNotFound { .. } => "PathNotFound",
            ValidationFailure::MethodNotAllowed { .. } => "MethodNotAllowed",
            ValidationFailure::MissingPathParam { .. } => "MissingPathParam",
            ValidationFailure::BadPathParamType { .. } => "BadPathParamType",
            ValidationFailure::MissingQueryParam { .. } => "MissingQueryParam",
            ValidationFailure::InvalidEnumValue { .. } => "InvalidEnumValue",
            ValidationFailure::MissingBody => "MissingBody",
            ValidationFailure::InvalidBodyJson { .. } => "InvalidBodyJson",
        }
    }

    /// Name of the offending parameter, where one is involved.
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        match self {
            ValidationFailure::MissingPathParam { name }
            | ValidationFailure::BadPathParamType { name, .. }
            | ValidationFailure::MissingQueryParam { name }
            | ValidationFailure::InvalidEnumValue { name, .. } => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_facing_messages() {
        let failure = ValidationFailure::MissingPathParam {
            name: "petId".to_string(),
        };
        assert_eq!(failure.to_string(), "Required path parameter missing: petId");

        let failure = ValidationFailure::BadPathParamType {
            name: "petId".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "Path parameter 'petId' must be an integer, got: abc"
        );

        let failure = ValidationFailure::InvalidEnumValue {
            name: "status".to_string(),
            allowed: vec!["available".into(), "pending".into(), "sold".into()],
            value: "lost".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "Invalid enum value for 'status'. Allowed values: [available, pending, sold], got: lost"
        );
    }

    #[test]
    fn test_parameter_accessor() {
        let failure = ValidationFailure::MissingQueryParam {
            name: "status".to_string(),
        };
        assert_eq!(failure.parameter(), Some("status"));
        assert!(ValidationFailure::MissingBody.parameter().is_none());
    }
}
