#![deny(missing_docs)]

//! # Parameter Classification
//!
//! Turns parameter declarations and method-level body-field markers into the
//! ordered parameter list of one operation.

use indexmap::IndexMap;

use crate::markers::BodyFieldMarker;
use crate::model::{
    BodyParameter, BodySchema, ParameterDescriptor, PathParameter, PropertyDescriptor,
    QueryParameter,
};
use crate::provider::{ParamDeclaration, ParamMarker};

/// Classifies a single parameter declaration.
///
/// Returns `None` for parameters that carry no recognized marker. The
/// descriptor is named after the marker's declared name, falling back to the
/// parameter's own name.
pub fn classify_parameter(declaration: &ParamDeclaration) -> Option<ParameterDescriptor> {
    match &declaration.marker {
        Some(ParamMarker::Path(marker)) => Some(ParameterDescriptor::Path(PathParameter {
            name: marker
                .name
                .clone()
                .unwrap_or_else(|| declaration.name.clone()),
            description: marker.description.clone(),
            data_type: marker.data_type,
        })),
        Some(ParamMarker::Query(marker)) => Some(ParameterDescriptor::Query(QueryParameter {
            name: marker
                .name
                .clone()
                .unwrap_or_else(|| declaration.name.clone()),
            description: marker.description.clone(),
            data_type: marker.data_type,
            required: marker.required,
        })),
        None => None,
    }
}

/// Aggregates all body-field markers of a method into the single body
/// parameter, one schema property per marker in declaration order.
///
/// Returns `None` when the method declares no body fields.
pub fn collect_body_parameter(body_fields: &[BodyFieldMarker]) -> Option<ParameterDescriptor> {
    if body_fields.is_empty() {
        return None;
    }

    let mut properties = IndexMap::new();
    for field in body_fields {
        properties.insert(
            field.name.clone(),
            PropertyDescriptor {
                data_type: field.data_type,
                description: field.description.clone(),
                required: field.required,
            },
        );
    }

    Some(ParameterDescriptor::Body(BodyParameter {
        schema: BodySchema { properties },
    }))
}

/// Builds the full parameter list of an operation: marked parameters in
/// declaration order, then the synthesized body parameter (if any) last.
pub fn build_parameters(
    declarations: &[ParamDeclaration],
    body_fields: &[BodyFieldMarker],
) -> Vec<ParameterDescriptor> {
    let mut parameters: Vec<ParameterDescriptor> =
        declarations.iter().filter_map(classify_parameter).collect();
    parameters.extend(collect_body_parameter(body_fields));
    parameters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::{PathParamMarker, QueryParamMarker};
    use crate::model::{DataType, ParameterKind};

    #[test]
    fn test_unmarked_parameter_yields_nothing() {
        assert!(classify_parameter(&ParamDeclaration::unmarked("ctx")).is_none());
    }

    #[test]
    fn test_path_parameter_uses_marker_name() {
        let declaration = ParamDeclaration::path("raw_id", PathParamMarker::new().name("id"));
        let descriptor = classify_parameter(&declaration).unwrap();
        assert_eq!(descriptor.kind(), ParameterKind::Path);
        assert_eq!(descriptor.name(), "id");
    }

    #[test]
    fn test_path_parameter_falls_back_to_declared_name() {
        let declaration = ParamDeclaration::path("id", PathParamMarker::new());
        let descriptor = classify_parameter(&declaration).unwrap();
        assert_eq!(descriptor.name(), "id");
    }

    #[test]
    fn test_query_parameter_carries_required_flag() {
        let declaration = ParamDeclaration::query(
            "limit",
            QueryParamMarker::new()
                .data_type(DataType::Integer)
                .required(),
        );
        match classify_parameter(&declaration).unwrap() {
            ParameterDescriptor::Query(query) => {
                assert_eq!(query.name, "limit");
                assert_eq!(query.data_type, DataType::Integer);
                assert!(query.required);
            }
            other => panic!("expected query descriptor, got {:?}", other),
        }
    }

    #[test]
    fn test_no_body_fields_no_body_parameter() {
        assert!(collect_body_parameter(&[]).is_none());
    }

    #[test]
    fn test_body_fields_aggregate_in_order() {
        let fields = vec![
            BodyFieldMarker::new("name").required(),
            BodyFieldMarker::new("age").data_type(DataType::Integer),
        ];
        match collect_body_parameter(&fields).unwrap() {
            ParameterDescriptor::Body(body) => {
                let names: Vec<&String> = body.schema.properties.keys().collect();
                assert_eq!(names, vec!["name", "age"]);
                assert!(body.schema.properties["name"].required);
                assert!(!body.schema.properties["age"].required);
            }
            other => panic!("expected body descriptor, got {:?}", other),
        }
    }

    #[test]
    fn test_body_parameter_appended_last() {
        let declarations = vec![
            ParamDeclaration::path("id", PathParamMarker::new()),
            ParamDeclaration::unmarked("ctx"),
            ParamDeclaration::query("verbose", QueryParamMarker::new()),
        ];
        let fields = vec![
            BodyFieldMarker::new("name"),
            BodyFieldMarker::new("email"),
            BodyFieldMarker::new("age"),
        ];

        let parameters = build_parameters(&declarations, &fields);

        // Two marked parameters plus exactly one body descriptor.
        assert_eq!(parameters.len(), 3);
        assert_eq!(parameters[0].kind(), ParameterKind::Path);
        assert_eq!(parameters[1].kind(), ParameterKind::Query);
        assert_eq!(parameters[2].kind(), ParameterKind::Body);
        match &parameters[2] {
            ParameterDescriptor::Body(body) => {
                assert_eq!(body.schema.properties.len(), 3);
            }
            other => panic!("expected body descriptor, got {:?}", other),
        }
    }
}
