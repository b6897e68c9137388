#![deny(missing_docs)]

//! # Markswag
//!
//! Builds normalized Swagger 2.0 documents from declarative API markers.
//!
//! Call sites register their APIs, methods, and parameters as typed marker
//! values through [`registry::ApiRegistry`]; the [`document::DocumentBuilder`]
//! assembles every marked method into an operation descriptor (inheriting
//! API-level defaults), organizes the result by path and method, and the
//! [`swagger`] module projects the finished document onto the wire format.

/// Document assembly and document-level metadata.
pub mod document;

/// Explicit marker registration.
pub mod registry;

/// Swagger 2.0 wire model and serialization.
pub mod swagger;

pub use document::{
    ApiKeyLocation, ContactMarker, Document, DocumentBuild, DocumentBuilder, InfoMarker,
    LicenseMarker, PathItem, SecurityScheme,
};
pub use registry::{ApiRegistration, ApiRegistry, MethodRegistration};
pub use swagger::SwaggerDocument;

// The core vocabulary, re-exported so call sites need a single crate.
pub use markswag_core::{
    ApiContext, ApiMarker, AppError, AppResult, BodyFieldMarker, DataType, Diagnostic, Diagnostics,
    HttpMethod, MetadataProvider, MethodHandle, OperationDescriptor, OperationMarker,
    ParamDeclaration, ParamMarker, ParameterDescriptor, ParameterKind, PathParamMarker,
    QueryParamMarker, ResponseDescriptor, ResponseMarker, SecurityMarker, SecurityRequirement,
};
