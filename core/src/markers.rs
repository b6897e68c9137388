//! # Marker Types
//!
//! Plain value objects for the declarative markers the assembler consumes.
//! Markers are typed at construction (`HttpMethod`, `u16` status codes,
//! `DataType`), so malformed field values are unrepresentable by the time a
//! declaration reaches assembly.
//!
//! All marker types offer chaining setters so registration sites read like
//! declarations.

use crate::model::{ApiContext, DataType, HttpMethod, SecurityRequirement};

/// The operation marker attached to a method declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationMarker {
    /// Declared path, possibly without its leading `/`.
    pub path: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Short summary (empty if unspecified).
    pub summary: String,
    /// Longer description (empty if unspecified).
    pub description: String,
    /// Explicit tags. When non-empty these suppress all inherited tags.
    pub tags: Vec<String>,
    /// Explicit produced media types; same override rule as tags.
    pub produces: Vec<String>,
    /// Explicit consumed media types; same override rule as tags.
    pub consumes: Vec<String>,
    /// When set, the operation consumes nothing, regardless of explicit
    /// values or context defaults.
    pub consumes_nothing: bool,
}

impl OperationMarker {
    /// Creates a marker for `method` on `path`.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            summary: String::new(),
            description: String::new(),
            tags: Vec::new(),
            produces: Vec::new(),
            consumes: Vec::new(),
            consumes_nothing: false,
        }
    }

    /// Sets the summary.
    pub fn summary(mut self, text: impl Into<String>) -> Self {
        self.summary = text.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Appends an explicit tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Appends an explicit produced media type.
    pub fn produces(mut self, media_type: impl Into<String>) -> Self {
        self.produces.push(media_type.into());
        self
    }

    /// Appends an explicit consumed media type.
    pub fn consumes(mut self, media_type: impl Into<String>) -> Self {
        self.consumes.push(media_type.into());
        self
    }

    /// Marks the operation as consuming nothing.
    pub fn consumes_nothing(mut self) -> Self {
        self.consumes_nothing = true;
        self
    }
}

/// Marker for a path parameter declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathParamMarker {
    /// Declared name; falls back to the parameter's own name when absent.
    pub name: Option<String>,
    /// Description (empty if unspecified).
    pub description: String,
    /// Primitive data type.
    pub data_type: DataType,
}

impl PathParamMarker {
    /// Creates an empty marker (string-typed, unnamed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the parameter name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Sets the data type.
    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }
}

/// Marker for a query parameter declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParamMarker {
    /// Declared name; falls back to the parameter's own name when absent.
    pub name: Option<String>,
    /// Description (empty if unspecified).
    pub description: String,
    /// Primitive data type.
    pub data_type: DataType,
    /// Whether the parameter must be supplied.
    pub required: bool,
}

impl QueryParamMarker {
    /// Creates an empty marker (string-typed, unnamed, optional).
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the parameter name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Sets the data type.
    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    /// Marks the parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Method-level marker describing one field of the request body.
///
/// A method may carry any number of these; they are aggregated into a single
/// body parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyFieldMarker {
    /// Property name inside the body schema.
    pub name: String,
    /// Primitive data type.
    pub data_type: DataType,
    /// Description (empty if unspecified).
    pub description: String,
    /// Whether the property is required.
    pub required: bool,
}

impl BodyFieldMarker {
    /// Creates a string-typed, optional field named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: DataType::default(),
            description: String::new(),
            required: false,
        }
    }

    /// Sets the data type.
    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    /// Sets the description.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Marks the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Marker declaring one response of a method.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMarker {
    /// HTTP status code.
    pub code: u16,
    /// Description of the response.
    pub description: String,
    /// Optional named model the response body conforms to.
    pub schema: Option<String>,
}

impl ResponseMarker {
    /// Creates a response marker for `code`.
    pub fn new(code: u16, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            schema: None,
        }
    }

    /// Attaches a named model schema reference.
    pub fn schema(mut self, model: impl Into<String>) -> Self {
        self.schema = Some(model.into());
        self
    }
}

/// Marker declaring one security requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityMarker {
    /// Name of the referenced security scheme.
    pub name: String,
    /// Required scopes (may be empty).
    pub scopes: Vec<String>,
}

impl SecurityMarker {
    /// Creates a requirement on the scheme `name` with no scopes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scopes: Vec::new(),
        }
    }

    /// Appends a required scope.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }
}

impl From<&SecurityMarker> for SecurityRequirement {
    fn from(marker: &SecurityMarker) -> Self {
        SecurityRequirement {
            name: marker.name.clone(),
            scopes: marker.scopes.clone(),
        }
    }
}

/// The API-level marker: defaults inherited by every operation of the API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiMarker {
    /// Base path prepended to every operation path of this API.
    pub base_path: Option<String>,
    /// Default tags.
    pub tags: Vec<String>,
    /// Default produced media types.
    pub produces: Vec<String>,
    /// Default consumed media types.
    pub consumes: Vec<String>,
    /// Default security requirements.
    pub security: Vec<SecurityMarker>,
}

impl ApiMarker {
    /// Creates an empty API marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base path.
    pub fn base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Appends a default tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Appends a default produced media type.
    pub fn produces(mut self, media_type: impl Into<String>) -> Self {
        self.produces.push(media_type.into());
        self
    }

    /// Appends a default consumed media type.
    pub fn consumes(mut self, media_type: impl Into<String>) -> Self {
        self.consumes.push(media_type.into());
        self
    }

    /// Appends a default security requirement.
    pub fn security(mut self, marker: SecurityMarker) -> Self {
        self.security.push(marker);
        self
    }

    /// Derives the read-only context operations of this API inherit from.
    pub fn context(&self) -> ApiContext {
        ApiContext {
            tags: self.tags.clone(),
            produces: self.produces.clone(),
            consumes: self.consumes.clone(),
            security: self.security.iter().map(SecurityRequirement::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_marker_chaining() {
        let marker = OperationMarker::new(HttpMethod::Post, "users")
            .summary("Create a user")
            .tag("users")
            .produces("application/json")
            .consumes("application/json");

        assert_eq!(marker.path, "users");
        assert_eq!(marker.method, HttpMethod::Post);
        assert_eq!(marker.summary, "Create a user");
        assert_eq!(marker.tags, vec!["users"]);
        assert_eq!(marker.produces, vec!["application/json"]);
        assert!(!marker.consumes_nothing);
    }

    #[test]
    fn test_consumes_nothing_flag() {
        let marker = OperationMarker::new(HttpMethod::Get, "/ping").consumes_nothing();
        assert!(marker.consumes_nothing);
    }

    #[test]
    fn test_security_marker_to_requirement() {
        let marker = SecurityMarker::new("oauth").scope("read").scope("write");
        let requirement = SecurityRequirement::from(&marker);
        assert_eq!(requirement.name, "oauth");
        assert_eq!(requirement.scopes, vec!["read", "write"]);
    }

    #[test]
    fn test_api_marker_context() {
        let api = ApiMarker::new()
            .base_path("/api")
            .tag("users")
            .produces("application/json")
            .consumes("application/json")
            .security(SecurityMarker::new("api_key"));

        let context = api.context();
        assert_eq!(context.tags, vec!["users"]);
        assert_eq!(context.produces, vec!["application/json"]);
        assert_eq!(context.consumes, vec!["application/json"]);
        assert_eq!(context.security.len(), 1);
        assert_eq!(context.security[0].name, "api_key");
        assert!(context.security[0].scopes.is_empty());
    }
}
