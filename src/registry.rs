#![deny(missing_docs)]

//! # Marker Registration
//!
//! The explicit-registration front end: call sites declare their APIs,
//! methods, and parameters as marker values, and the resulting registration
//! records implement the introspection capability the assembler consumes.

use markswag_core::markers::{
    ApiMarker, BodyFieldMarker, OperationMarker, ResponseMarker, SecurityMarker,
};
use markswag_core::provider::{MetadataProvider, MethodHandle, ParamDeclaration};

/// One registered method declaration: its identity, operation marker, and
/// every secondary marker scan the assembler performs.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodRegistration {
    identity: String,
    operation: OperationMarker,
    parameters: Vec<ParamDeclaration>,
    body_fields: Vec<BodyFieldMarker>,
    responses: Vec<ResponseMarker>,
    security: Vec<SecurityMarker>,
    extra_security: Vec<SecurityMarker>,
}

impl MethodRegistration {
    /// Registers `operation` under the fully-qualified `identity` (used only
    /// for diagnostics).
    pub fn new(identity: impl Into<String>, operation: OperationMarker) -> Self {
        Self {
            identity: identity.into(),
            operation,
            parameters: Vec::new(),
            body_fields: Vec::new(),
            responses: Vec::new(),
            security: Vec::new(),
            extra_security: Vec::new(),
        }
    }

    /// Appends a parameter declaration, in declaration order.
    pub fn parameter(mut self, declaration: ParamDeclaration) -> Self {
        self.parameters.push(declaration);
        self
    }

    /// Appends a method-level body-field marker.
    pub fn body_field(mut self, marker: BodyFieldMarker) -> Self {
        self.body_fields.push(marker);
        self
    }

    /// Appends a response marker.
    pub fn response(mut self, marker: ResponseMarker) -> Self {
        self.responses.push(marker);
        self
    }

    /// Appends a primary security marker.
    pub fn security(mut self, marker: SecurityMarker) -> Self {
        self.security.push(marker);
        self
    }

    /// Appends a secondary, always-additive security marker.
    pub fn extra_security(mut self, marker: SecurityMarker) -> Self {
        self.extra_security.push(marker);
        self
    }

    /// The fully-qualified identity this method was registered under.
    pub fn identity(&self) -> &str {
        &self.identity
    }
}

/// One registered API: its API-level marker plus its methods in registration
/// order. Implements [`MetadataProvider`] so the assembler can introspect it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiRegistration {
    marker: ApiMarker,
    methods: Vec<MethodRegistration>,
}

impl ApiRegistration {
    /// Creates a registration for the API described by `marker`.
    pub fn new(marker: ApiMarker) -> Self {
        Self {
            marker,
            methods: Vec::new(),
        }
    }

    /// Registers a method.
    pub fn method(mut self, method: MethodRegistration) -> Self {
        self.methods.push(method);
        self
    }

    /// The API-level marker.
    pub fn marker(&self) -> &ApiMarker {
        &self.marker
    }

    /// Handles for every registered method, in registration order.
    pub fn handles(&self) -> impl Iterator<Item = MethodHandle> + '_ {
        (0..self.methods.len()).map(MethodHandle::new)
    }

    /// Number of registered methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether the API has no methods.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl MetadataProvider for ApiRegistration {
    fn identity(&self, method: MethodHandle) -> &str {
        &self.methods[method.index()].identity
    }

    fn operation(&self, method: MethodHandle) -> &OperationMarker {
        &self.methods[method.index()].operation
    }

    fn parameters(&self, method: MethodHandle) -> &[ParamDeclaration] {
        &self.methods[method.index()].parameters
    }

    fn body_fields(&self, method: MethodHandle) -> &[BodyFieldMarker] {
        &self.methods[method.index()].body_fields
    }

    fn responses(&self, method: MethodHandle) -> &[ResponseMarker] {
        &self.methods[method.index()].responses
    }

    fn security(&self, method: MethodHandle) -> &[SecurityMarker] {
        &self.methods[method.index()].security
    }

    fn extra_security(&self, method: MethodHandle) -> &[SecurityMarker] {
        &self.methods[method.index()].extra_security
    }
}

/// The ordered set of registered APIs a document is built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiRegistry {
    apis: Vec<ApiRegistration>,
}

impl ApiRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an API, after any previously registered ones.
    pub fn register(&mut self, api: ApiRegistration) {
        self.apis.push(api);
    }

    /// The registered APIs, in registration order.
    pub fn apis(&self) -> &[ApiRegistration] {
        &self.apis
    }
}
