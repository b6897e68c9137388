#![deny(missing_docs)]

//! # Metadata Provider
//!
//! The narrow introspection capability the assembler consumes. Whatever
//! mechanism declares the markers (explicit registration, generated tables),
//! the assembler only ever sees it through this trait: typed marker values
//! fetched for an opaque method handle.

use crate::markers::{
    BodyFieldMarker, OperationMarker, PathParamMarker, QueryParamMarker, ResponseMarker,
    SecurityMarker,
};

/// Opaque handle identifying one method declaration within a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodHandle(usize);

impl MethodHandle {
    /// Creates a handle for the method at `index` in declaration order.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The declaration-order index this handle wraps.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The recognized marker attached to a method parameter, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamMarker {
    /// A path parameter marker.
    Path(PathParamMarker),
    /// A query parameter marker.
    Query(QueryParamMarker),
}

/// One parameter declaration of a method: its declared name plus the
/// recognized marker attached to it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDeclaration {
    /// The name the parameter is declared under.
    pub name: String,
    /// The recognized marker, or `None` for an unmarked parameter.
    pub marker: Option<ParamMarker>,
}

impl ParamDeclaration {
    /// A parameter carrying a path marker.
    pub fn path(name: impl Into<String>, marker: PathParamMarker) -> Self {
        Self {
            name: name.into(),
            marker: Some(ParamMarker::Path(marker)),
        }
    }

    /// A parameter carrying a query marker.
    pub fn query(name: impl Into<String>, marker: QueryParamMarker) -> Self {
        Self {
            name: name.into(),
            marker: Some(ParamMarker::Query(marker)),
        }
    }

    /// A parameter without any recognized marker.
    pub fn unmarked(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: None,
        }
    }
}

/// Declaration introspection: typed marker values for a method handle.
///
/// Handles passed to these methods must have been produced for this provider;
/// out-of-range handles are a caller-contract violation.
pub trait MetadataProvider {
    /// Fully-qualified name of the method, used only for diagnostics.
    fn identity(&self, method: MethodHandle) -> &str;

    /// The operation marker attached to the method.
    fn operation(&self, method: MethodHandle) -> &OperationMarker;

    /// Parameter declarations, in declaration order.
    fn parameters(&self, method: MethodHandle) -> &[ParamDeclaration];

    /// Method-level body-field markers, in declaration order.
    fn body_fields(&self, method: MethodHandle) -> &[BodyFieldMarker];

    /// Response markers, in declaration order.
    fn responses(&self, method: MethodHandle) -> &[ResponseMarker];

    /// Primary security markers; merged against the context defaults.
    fn security(&self, method: MethodHandle) -> &[SecurityMarker];

    /// Secondary security markers; always appended, never subject to the
    /// override rules.
    fn extra_security(&self, method: MethodHandle) -> &[SecurityMarker];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_round_trip() {
        let handle = MethodHandle::new(3);
        assert_eq!(handle.index(), 3);
    }

    #[test]
    fn test_param_declaration_constructors() {
        let bare = ParamDeclaration::unmarked("ctx");
        assert_eq!(bare.name, "ctx");
        assert!(bare.marker.is_none());

        let path = ParamDeclaration::path("id", PathParamMarker::new());
        assert!(matches!(path.marker, Some(ParamMarker::Path(_))));

        let query = ParamDeclaration::query("limit", QueryParamMarker::new());
        assert!(matches!(query.marker, Some(ParamMarker::Query(_))));
    }
}
