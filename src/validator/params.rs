use super::ValidationFailure;
use crate::contract::{Operation, ParameterLocation, ParameterType};
use crate::matcher;
use std::collections::HashMap;

/// Validate the declared parameters of a matched operation.
///
/// Parameters are checked in declaration order, both locations in the same
/// single pass, stopping at the first violation. Path parameter values are
/// resolved from the caller-supplied map first (values a surrounding
/// framework pre-extracted), falling back to positional extraction against
/// the matched template; an empty string counts as missing in both sources.
///
/// # Arguments
///
/// * `operation` - The matched operation and its declared parameters
/// * `template` - The matched path template
/// * `request_path` - Concrete request path, used for positional extraction
/// * `provided_path_params` - Pre-extracted path parameter values, may be empty
/// * `query_params` - Parsed query string parameters
///
/// # Returns
///
/// The resolved path parameter values on success, keyed by parameter name
pub fn validate_parameters(
    operation: &Operation,
    template: &str,
    request_path: &str,
    provided_path_params: &HashMap<String, String>,
    query_params: &HashMap<String, String>,
) -> Result<HashMap<String, String>, ValidationFailure> {
    let mut resolved = HashMap::new();

    for param in &operation.parameters {
        match param.location {
            ParameterLocation::Path => {
                let value = provided_path_params
                    .get(&param.name)
                    .map(String::as_str)
                    .filter(|v| !v.is_empty())
                    .or_else(|| matcher::extract_path_value(request_path, template, &param.name))
                    .filter(|v| !v.is_empty());

                let value = match value {
                    Some(v) => v,
                    None if param.required => {
                        return Err(ValidationFailure::MissingPathParam {
                            name: param.name.clone(),
                        })
                    }
                    None => continue,
                };

                if param.ty == Some(ParameterType::Integer) && value.parse::<i64>().is_err() {
                    return Err(ValidationFailure::BadPathParamType {
                        name: param.name.clone(),
                        value: value.to_string(),
                    });
                }

                resolved.insert(param.name.clone(), value.to_string());
            }
            ParameterLocation::Query => {
                let value = query_params
                    .get(&param.name)
                    .map(String::as_str)
                    .filter(|v| !v.is_empty());

                match value {
                    None if param.required => {
                        return Err(ValidationFailure::MissingQueryParam {
                            name: param.name.clone(),
                        })
                    }
                    Some(value) => {
                        if let Some(allowed) = &param.allowed_values {
                            if !allowed.iter().any(|a| a == value) {
                                return Err(ValidationFailure::InvalidEnumValue {
                                    name: param.name.clone(),
                                    allowed: allowed.clone(),
                                    value: value.to_string(),
                                });
                            }
                        }
                    }
                    None => {}
                }
            }
        }
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Parameter;

    fn path_param(name: &str, ty: Option<ParameterType>) -> Parameter {
        Parameter {
            name: name.to_string(),
            location: ParameterLocation::Path,
            required: true,
            ty,
            allowed_values: None,
        }
    }

    #[test]
    fn test_provided_value_takes_precedence_over_positional() {
        let operation = Operation {
            parameters: vec![path_param("petId", Some(ParameterType::Integer))],
            request_body_required: false,
        };
        let provided = HashMap::from([("petId".to_string(), "7".to_string())]);

        let resolved =
            validate_parameters(&operation, "/pet/{petId}", "/pet/42", &provided, &HashMap::new())
                .unwrap();
        assert_eq!(resolved["petId"], "7");
    }

    #[test]
    fn test_empty_provided_value_falls_back_to_positional() {
        let operation = Operation {
            parameters: vec![path_param("petId", Some(ParameterType::Integer))],
            request_body_required: false,
        };
        let provided = HashMap::from([("petId".to_string(), String::new())]);

        let resolved =
            validate_parameters(&operation, "/pet/{petId}", "/pet/42", &provided, &HashMap::new())
                .unwrap();
        assert_eq!(resolved["petId"], "42");
    }

    #[test]
    fn test_optional_query_enum_checked_only_when_present() {
        let operation = Operation {
            parameters: vec![Parameter {
                name: "status".to_string(),
                location: ParameterLocation::Query,
                required: false,
                ty: Some(ParameterType::String),
                allowed_values: Some(vec!["available".into(), "sold".into()]),
            }],
            request_body_required: false,
        };

        // Absent and optional: fine.
        let result =
            validate_parameters(&operation, "/pet", "/pet", &HashMap::new(), &HashMap::new());
        assert!(result.is_ok());

        // Present but outside the enum: rejected.
        let query = HashMap::from([("status".to_string(), "lost".to_string())]);
        let err = validate_parameters(&operation, "/pet", "/pet", &HashMap::new(), &query)
            .unwrap_err();
        assert_eq!(err.kind(), "InvalidEnumValue");
    }
}
