#![deny(missing_docs)]

//! # Markswag Core
//!
//! Core library for the marker-to-document assembler: descriptor models,
//! marker value types, the declaration-introspection capability, and the
//! operation assembly logic.

/// Shared error types.
pub mod error;

/// Build-time warning collection.
pub mod diagnostics;

/// Descriptor value objects.
pub mod model;

/// Declarative marker value types.
pub mod markers;

/// Declaration introspection capability.
pub mod provider;

/// Operation assembly logic.
pub mod assemble;

pub use assemble::{
    assemble_operation,
    params::{build_parameters, classify_parameter, collect_body_parameter},
    responses::collect_responses,
    security::merge_security,
};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::{AppError, AppResult};
pub use markers::{
    ApiMarker, BodyFieldMarker, OperationMarker, PathParamMarker, QueryParamMarker, ResponseMarker,
    SecurityMarker,
};
pub use model::{
    normalize_path, ApiContext, BodyParameter, BodySchema, DataType, HttpMethod,
    OperationDescriptor, ParameterDescriptor, ParameterKind, PathParameter, PropertyDescriptor,
    QueryParameter, ResponseDescriptor, SecurityRequirement,
};
pub use provider::{MetadataProvider, MethodHandle, ParamDeclaration, ParamMarker};
