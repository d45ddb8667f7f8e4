use http::Method;
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
}

impl std::fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterLocation::Path => write!(f, "Path"),
            ParameterLocation::Query => write!(f, "Query"),
        }
    }
}

/// Primitive type declared for a parameter. Anything the contract declares
/// beyond these is treated as undeclared and skips the type check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterType {
    String,
    Integer,
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterType::String => write!(f, "string"),
            ParameterType::Integer => write!(f, "integer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    pub ty: Option<ParameterType>,
    /// Declared enum members, stringified for comparison against raw values.
    pub allowed_values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Operation {
    /// Declared parameters in document order, path-level parameters first.
    pub parameters: Vec<Parameter>,
    pub request_body_required: bool,
}

/// Per-method operation slots for a single path template. Only the four
/// methods the gateway proxies are representable; other verbs in the
/// document are dropped at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathItem {
    pub get: Option<Operation>,
    pub post: Option<Operation>,
    pub put: Option<Operation>,
    pub delete: Option<Operation>,
}

impl PathItem {
    /// Resolve the operation declared for `method`, if any.
    #[must_use]
    pub fn operation(&self, method: &Method) -> Option<&Operation> {
        match method.as_str() {
            "GET" => self.get.as_ref(),
            "POST" => self.post.as_ref(),
            "PUT" => self.put.as_ref(),
            "DELETE" => self.delete.as_ref(),
            _ => None,
        }
    }

    /// Iterate the declared operations in GET/POST/PUT/DELETE order.
    pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> + '_ {
        [
            (Method::GET, self.get.as_ref()),
            (Method::POST, self.post.as_ref()),
            (Method::PUT, self.put.as_ref()),
            (Method::DELETE, self.delete.as_ref()),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.map(|op| (method, op)))
    }
}

/// In-memory API contract. Built once at startup, then shared read-only
/// across all concurrent validations.
///
/// `paths` preserves the declaration order of the source document; the
/// matcher depends on that order for its first-match tie-break.
#[derive(Debug, Clone, Default)]
pub struct Contract {
    pub paths: IndexMap<String, PathItem>,
}

impl Contract {
    #[must_use]
    pub fn path_item(&self, template: &str) -> Option<&PathItem> {
        self.paths.get(template)
    }
}
