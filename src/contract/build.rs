use super::types::{Contract, Operation, Parameter, ParameterLocation, ParameterType, PathItem};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Document-shaped view of a contract file, following the OpenAPI v3 Paths
/// Object layout. Everything the gateway does not validate against (info,
/// servers, components, response definitions) deserializes away as unknown
/// fields.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ContractDoc {
    #[serde(default)]
    pub(crate) paths: IndexMap<String, PathItemDoc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct PathItemDoc {
    /// Path-level parameters shared by every operation under this template.
    parameters: Vec<ParameterDoc>,
    get: Option<OperationDoc>,
    post: Option<OperationDoc>,
    put: Option<OperationDoc>,
    delete: Option<OperationDoc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OperationDoc {
    parameters: Vec<ParameterDoc>,
    #[serde(rename = "requestBody")]
    request_body: Option<RequestBodyDoc>,
}

#[derive(Debug, Deserialize)]
struct ParameterDoc {
    name: String,
    #[serde(rename = "in")]
    location: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    schema: Option<SchemaDoc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SchemaDoc {
    #[serde(rename = "type")]
    ty: Option<String>,
    #[serde(rename = "enum")]
    allowed: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RequestBodyDoc {
    required: bool,
}

fn convert_parameter(doc: &ParameterDoc) -> Option<Parameter> {
    let location = match doc.location.as_str() {
        "path" => ParameterLocation::Path,
        "query" => ParameterLocation::Query,
        other => {
            // Header and cookie parameters are not validated by the gateway.
            debug!(name = %doc.name, location = %other, "skipping parameter with unsupported location");
            return None;
        }
    };

    let ty = doc
        .schema
        .as_ref()
        .and_then(|s| s.ty.as_deref())
        .and_then(|ty| match ty {
            "string" => Some(ParameterType::String),
            "integer" => Some(ParameterType::Integer),
            _ => None,
        });

    let allowed_values = doc.schema.as_ref().and_then(|s| {
        s.allowed.as_ref().map(|values| {
            values
                .iter()
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
    });

    Some(Parameter {
        name: doc.name.clone(),
        location,
        required: doc.required,
        ty,
        allowed_values,
    })
}

fn convert_operation(shared: &[ParameterDoc], doc: &OperationDoc) -> Operation {
    let mut parameters = Vec::with_capacity(shared.len() + doc.parameters.len());
    parameters.extend(shared.iter().filter_map(convert_parameter));
    parameters.extend(doc.parameters.iter().filter_map(convert_parameter));

    Operation {
        parameters,
        request_body_required: doc
            .request_body
            .as_ref()
            .map(|body| body.required)
            .unwrap_or(false),
    }
}

/// Build the in-memory contract from a parsed contract document.
///
/// Path-level shared parameters are prepended to every operation's own
/// parameter list, and path declaration order is preserved end to end.
///
/// # Arguments
///
/// * `doc` - The deserialized contract document
///
/// # Returns
///
/// The contract model the validator and matcher operate on
pub(crate) fn build_contract(doc: &ContractDoc) -> Contract {
    let mut paths = IndexMap::with_capacity(doc.paths.len());

    for (template, item) in &doc.paths {
        paths.insert(
            template.clone(),
            PathItem {
                get: item
                    .get
                    .as_ref()
                    .map(|op| convert_operation(&item.parameters, op)),
                post: item
                    .post
                    .as_ref()
                    .map(|op| convert_operation(&item.parameters, op)),
                put: item
                    .put
                    .as_ref()
                    .map(|op| convert_operation(&item.parameters, op)),
                delete: item
                    .delete
                    .as_ref()
                    .map(|op| convert_operation(&item.parameters, op)),
            },
        );
    }

    Contract { paths }
}
