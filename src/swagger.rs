#![deny(missing_docs)]

//! # Wire Model
//!
//! Serde structs mirroring the Swagger 2.0 wire format, plus the projection
//! from the in-memory document model. The projection is pure; rendering and
//! file output live here too.

use indexmap::IndexMap;
use markswag_core::error::{AppError, AppResult};
use markswag_core::model::{
    OperationDescriptor, ParameterDescriptor, PropertyDescriptor, SecurityRequirement,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::document::{ContactMarker, Document, InfoMarker, LicenseMarker, SecurityScheme};

/// A complete Swagger 2.0 document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwaggerDocument {
    /// Format version; always `"2.0"`.
    pub swagger: String,
    /// Document metadata.
    pub info: SwaggerInfo,
    /// Path items keyed by path, then by lower-case method token.
    pub paths: IndexMap<String, IndexMap<String, SwaggerOperation>>,
    /// Security scheme definitions.
    #[serde(
        rename = "securityDefinitions",
        skip_serializing_if = "IndexMap::is_empty",
        default
    )]
    pub security_definitions: IndexMap<String, SwaggerSecurityScheme>,
}

/// The `info` object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwaggerInfo {
    /// Document title.
    pub title: String,
    /// Document version.
    pub version: String,
    /// Longer description.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    /// License metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<SwaggerLicense>,
    /// Contact metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<SwaggerContact>,
}

/// The `info.license` object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwaggerLicense {
    /// License name.
    pub name: String,
    /// URL of the license text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The `info.contact` object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwaggerContact {
    /// Contact name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Contact email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// One operation object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SwaggerOperation {
    /// Tags.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    /// Short summary.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub summary: String,
    /// Longer description.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    /// Produced media types.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub produces: Vec<String>,
    /// Consumed media types.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub consumes: Vec<String>,
    /// Parameters.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub parameters: Vec<SwaggerParameter>,
    /// Responses keyed by status-code string. Always emitted, so an
    /// operation without response markers is visibly `{}`.
    pub responses: IndexMap<String, SwaggerResponse>,
    /// Security requirements, one single-entry map per requirement.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub security: Vec<IndexMap<String, Vec<String>>>,
}

/// One parameter object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwaggerParameter {
    /// Parameter name.
    pub name: String,
    /// Location: `path`, `query`, or `body`.
    #[serde(rename = "in")]
    pub location: String,
    /// Description.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    /// Whether the parameter must be supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Primitive type token, for path and query parameters.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    /// Format modifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Inline object schema, for the body parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SwaggerSchema>,
}

/// The inline flat object schema of a body parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwaggerSchema {
    /// Always `"object"`.
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Properties in declaration order.
    pub properties: IndexMap<String, SwaggerProperty>,
    /// Names of required properties, in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub required: Vec<String>,
}

/// One property of a body schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwaggerProperty {
    /// Primitive type token.
    #[serde(rename = "type")]
    pub data_type: String,
    /// Format modifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
}

/// One response object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwaggerResponse {
    /// Description of the response.
    pub description: String,
    /// Reference to a named model schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SwaggerRef>,
}

/// A `$ref` object pointing into `definitions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwaggerRef {
    /// The reference string, e.g. `#/definitions/User`.
    #[serde(rename = "$ref")]
    pub reference: String,
}

/// A security scheme definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum SwaggerSecurityScheme {
    /// An API key carried in a header or query parameter.
    #[serde(rename = "apiKey")]
    ApiKey {
        /// Name of the header or query parameter.
        name: String,
        /// Where the key is carried.
        #[serde(rename = "in")]
        location: String,
    },
    /// HTTP basic authentication.
    #[serde(rename = "basic")]
    Basic,
}

impl SwaggerDocument {
    /// Projects an assembled document onto the wire model.
    pub fn from_document(document: &Document) -> Self {
        let paths = document
            .paths
            .iter()
            .map(|(path, item)| {
                let operations = item
                    .iter()
                    .map(|(method, op)| (method.as_str().to_string(), project_operation(op)))
                    .collect();
                (path.clone(), operations)
            })
            .collect();

        let security_definitions = document
            .security_definitions
            .iter()
            .map(|(name, scheme)| (name.clone(), project_security_scheme(scheme)))
            .collect();

        Self {
            swagger: "2.0".to_string(),
            info: project_info(&document.info),
            paths,
            security_definitions,
        }
    }

    /// Renders the document as pretty-printed JSON.
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::General(format!("Failed to serialize document to JSON: {}", e)))
    }

    /// Renders the document as YAML.
    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::General(format!("Failed to serialize document to YAML: {}", e)))
    }

    /// Renders and writes the document as JSON.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> AppResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Renders and writes the document as YAML.
    pub fn write_yaml<P: AsRef<Path>>(&self, path: P) -> AppResult<()> {
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}

fn project_info(info: &InfoMarker) -> SwaggerInfo {
    SwaggerInfo {
        title: info.title.clone(),
        version: info.version.clone(),
        description: info.description.clone(),
        license: info.license.as_ref().map(project_license),
        contact: info.contact.as_ref().map(project_contact),
    }
}

fn project_license(license: &LicenseMarker) -> SwaggerLicense {
    SwaggerLicense {
        name: license.name.clone(),
        url: license.url.clone(),
    }
}

fn project_contact(contact: &ContactMarker) -> SwaggerContact {
    SwaggerContact {
        name: contact.name.clone(),
        url: contact.url.clone(),
        email: contact.email.clone(),
    }
}

fn project_operation(descriptor: &OperationDescriptor) -> SwaggerOperation {
    SwaggerOperation {
        tags: descriptor.tags.clone(),
        summary: descriptor.summary.clone(),
        description: descriptor.description.clone(),
        produces: descriptor.produces.clone(),
        consumes: descriptor.consumes.clone(),
        parameters: descriptor.parameters.iter().map(project_parameter).collect(),
        responses: descriptor
            .responses
            .iter()
            .map(|(code, response)| {
                (
                    code.clone(),
                    SwaggerResponse {
                        description: response.description.clone(),
                        schema: response.schema.as_ref().map(|model| SwaggerRef {
                            reference: format!("#/definitions/{}", model),
                        }),
                    },
                )
            })
            .collect(),
        security: project_security(&descriptor.security),
    }
}

fn project_parameter(parameter: &ParameterDescriptor) -> SwaggerParameter {
    match parameter {
        ParameterDescriptor::Path(path) => SwaggerParameter {
            name: path.name.clone(),
            location: "path".to_string(),
            description: path.description.clone(),
            required: Some(true),
            data_type: Some(path.data_type.type_token().to_string()),
            format: path.data_type.format_token().map(str::to_string),
            schema: None,
        },
        ParameterDescriptor::Query(query) => SwaggerParameter {
            name: query.name.clone(),
            location: "query".to_string(),
            description: query.description.clone(),
            required: Some(query.required),
            data_type: Some(query.data_type.type_token().to_string()),
            format: query.data_type.format_token().map(str::to_string),
            schema: None,
        },
        ParameterDescriptor::Body(body) => {
            let properties = body
                .schema
                .properties
                .iter()
                .map(|(name, property)| (name.clone(), project_property(property)))
                .collect();
            let required = body
                .schema
                .properties
                .iter()
                .filter(|(_, property)| property.required)
                .map(|(name, _)| name.clone())
                .collect();

            SwaggerParameter {
                name: "body".to_string(),
                location: "body".to_string(),
                description: String::new(),
                required: None,
                data_type: None,
                format: None,
                schema: Some(SwaggerSchema {
                    schema_type: "object".to_string(),
                    properties,
                    required,
                }),
            }
        }
    }
}

fn project_property(property: &PropertyDescriptor) -> SwaggerProperty {
    SwaggerProperty {
        data_type: property.data_type.type_token().to_string(),
        format: property.data_type.format_token().map(str::to_string),
        description: property.description.clone(),
    }
}

fn project_security(requirements: &[SecurityRequirement]) -> Vec<IndexMap<String, Vec<String>>> {
    requirements
        .iter()
        .map(|requirement| {
            let mut entry = IndexMap::new();
            entry.insert(requirement.name.clone(), requirement.scopes.clone());
            entry
        })
        .collect()
}

fn project_security_scheme(scheme: &SecurityScheme) -> SwaggerSecurityScheme {
    match scheme {
        SecurityScheme::ApiKey { name, location } => SwaggerSecurityScheme::ApiKey {
            name: name.clone(),
            location: location.as_str().to_string(),
        },
        SecurityScheme::Basic => SwaggerSecurityScheme::Basic,
    }
}
