#![deny(missing_docs)]

//! # Descriptor Models
//!
//! Definition of the value objects that make up one assembled operation.
//!
//! Descriptors are constructed once, eagerly, during a single pass over a
//! method declaration and are not mutated afterwards. Document-level
//! rewriting (base-path prefixing) produces a new descriptor via
//! [`OperationDescriptor::with_path`] rather than mutating in place.

use indexmap::IndexMap;
use std::fmt;

use crate::error::{AppError, AppResult};

/// The fixed set of HTTP methods an operation may declare.
///
/// The wire token is always the lower-case form, regardless of how the
/// marker spelled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET.
    Get,
    /// PUT.
    Put,
    /// POST.
    Post,
    /// DELETE.
    Delete,
    /// OPTIONS.
    Options,
    /// HEAD.
    Head,
    /// PATCH.
    Patch,
}

impl HttpMethod {
    /// Parses a method token, case-insensitively.
    ///
    /// Unknown tokens are rejected here, at the marker-definition level,
    /// so malformed verbs never reach the assembler.
    pub fn parse(token: &str) -> AppResult<Self> {
        match token.to_ascii_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "put" => Ok(HttpMethod::Put),
            "post" => Ok(HttpMethod::Post),
            "delete" => Ok(HttpMethod::Delete),
            "options" => Ok(HttpMethod::Options),
            "head" => Ok(HttpMethod::Head),
            "patch" => Ok(HttpMethod::Patch),
            _ => Err(AppError::General(format!(
                "Unknown HTTP method token '{}'",
                token
            ))),
        }
    }

    /// The lower-case wire token.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primitive data types supported for parameters and body fields.
///
/// Flat bodies only; nothing here resolves nested type schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataType {
    /// A plain string.
    #[default]
    String,
    /// A 32-bit integer.
    Integer,
    /// A 64-bit integer.
    Long,
    /// A floating point number.
    Number,
    /// A boolean.
    Boolean,
    /// A full-date string.
    Date,
    /// A date-time string.
    DateTime,
}

impl DataType {
    /// The wire `type` token.
    pub fn type_token(self) -> &'static str {
        match self {
            DataType::String | DataType::Date | DataType::DateTime => "string",
            DataType::Integer | DataType::Long => "integer",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
        }
    }

    /// The wire `format` modifier, when the type carries one.
    pub fn format_token(self) -> Option<&'static str> {
        match self {
            DataType::Integer => Some("int32"),
            DataType::Long => Some("int64"),
            DataType::Date => Some("date"),
            DataType::DateTime => Some("date-time"),
            DataType::String | DataType::Number | DataType::Boolean => None,
        }
    }
}

/// Ensures a path carries its leading `/`.
///
/// Idempotent: an already-normalized path is returned unchanged.
pub fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// The API-level defaults an operation inherits unless it overrides them.
///
/// Owned by the document builder; read-only during assembly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiContext {
    /// Default tag list.
    pub tags: Vec<String>,
    /// Default produced media types.
    pub produces: Vec<String>,
    /// Default consumed media types.
    pub consumes: Vec<String>,
    /// Default security requirements.
    pub security: Vec<SecurityRequirement>,
}

/// One fully-populated operation: a single HTTP method + path pair.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDescriptor {
    /// The URL path. Always starts with `/`.
    pub path: String,
    /// The HTTP method.
    pub method: HttpMethod,
    /// Short summary, copied verbatim from the marker (may be empty).
    pub summary: String,
    /// Longer description, copied verbatim from the marker (may be empty).
    pub description: String,
    /// Tags, order-preserving. Either the explicit marker tags or the full
    /// inherited context list, never a mixture.
    pub tags: Vec<String>,
    /// Produced media types, same all-or-nothing inheritance as tags.
    pub produces: Vec<String>,
    /// Consumed media types. Empty means the operation takes no body.
    pub consumes: Vec<String>,
    /// Parameters in declaration order; the synthesized body parameter, if
    /// any, is last.
    pub parameters: Vec<ParameterDescriptor>,
    /// Responses keyed by status-code string, insertion order preserved.
    pub responses: IndexMap<String, ResponseDescriptor>,
    /// Merged security requirements.
    pub security: Vec<SecurityRequirement>,
}

impl OperationDescriptor {
    /// Returns a copy of this operation under a different path.
    ///
    /// Used by the document builder when prefixing an API base path; the
    /// original descriptor is left untouched. The replacement path is
    /// normalized the same way the declared path was.
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        let mut descriptor = self.clone();
        descriptor.path = normalize_path(&path.into());
        descriptor
    }
}

/// The location classification of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// Part of the path template.
    Path,
    /// A query string parameter.
    Query,
    /// The synthesized body parameter.
    Body,
}

impl ParameterKind {
    /// The wire `in` token.
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterKind::Path => "path",
            ParameterKind::Query => "query",
            ParameterKind::Body => "body",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of an operation's parameter list.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterDescriptor {
    /// A path parameter.
    Path(PathParameter),
    /// A query parameter.
    Query(QueryParameter),
    /// The single aggregated body parameter.
    Body(BodyParameter),
}

impl ParameterDescriptor {
    /// The location classification of this parameter.
    pub fn kind(&self) -> ParameterKind {
        match self {
            ParameterDescriptor::Path(_) => ParameterKind::Path,
            ParameterDescriptor::Query(_) => ParameterKind::Query,
            ParameterDescriptor::Body(_) => ParameterKind::Body,
        }
    }

    /// The wire name of this parameter. The body parameter is always
    /// named `body`.
    pub fn name(&self) -> &str {
        match self {
            ParameterDescriptor::Path(p) => &p.name,
            ParameterDescriptor::Query(p) => &p.name,
            ParameterDescriptor::Body(_) => "body",
        }
    }
}

/// A path parameter. Always required.
#[derive(Debug, Clone, PartialEq)]
pub struct PathParameter {
    /// Parameter name; must match a `{name}` segment of the path template.
    pub name: String,
    /// Description (may be empty).
    pub description: String,
    /// Primitive data type.
    pub data_type: DataType,
}

/// A query parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParameter {
    /// Parameter name.
    pub name: String,
    /// Description (may be empty).
    pub description: String,
    /// Primitive data type.
    pub data_type: DataType,
    /// Whether the parameter must be supplied.
    pub required: bool,
}

/// The single aggregated body parameter of an operation.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyParameter {
    /// The flat object schema accumulated from the body-field markers.
    pub schema: BodySchema,
}

/// A flat object schema: one property per body-field marker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodySchema {
    /// Named properties in marker-declaration order.
    pub properties: IndexMap<String, PropertyDescriptor>,
}

/// One property of a body schema.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    /// Primitive data type.
    pub data_type: DataType,
    /// Description (may be empty).
    pub description: String,
    /// Whether the property is required.
    pub required: bool,
}

/// One declared response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseDescriptor {
    /// HTTP status code. The string form of this code is the mapping key.
    pub code: u16,
    /// Description of the response.
    pub description: String,
    /// Optional reference to a named model schema.
    pub schema: Option<String>,
}

/// A single security requirement: a scheme reference plus optional scopes.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityRequirement {
    /// Name of the security scheme this requirement references.
    pub name: String,
    /// Required scopes (may be empty).
    pub scopes: Vec<String>,
}
