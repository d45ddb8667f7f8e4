use super::ValidationFailure;
use crate::contract::Operation;

/// Validate request body presence and JSON well-formedness.
///
/// Only called for methods that carry a body (POST and PUT). An operation
/// that declares no body requirement passes regardless of what was sent;
/// schema shape is never checked, only that the payload parses as JSON.
pub fn validate_body(operation: &Operation, body: Option<&str>) -> Result<(), ValidationFailure> {
    if !operation.request_body_required {
        return Ok(());
    }

    let body = match body {
        Some(b) if !b.trim().is_empty() => b,
        _ => return Err(ValidationFailure::MissingBody),
    };

    if let Err(err) = serde_json::from_str::<serde_json::Value>(body) {
        return Err(ValidationFailure::InvalidBodyJson {
            detail: err.to_string(),
        });
    }

    Ok(())
}
