#![deny(missing_docs)]

//! # Response Collection
//!
//! Builds the status-keyed response mapping of one operation.

use indexmap::IndexMap;

use crate::markers::ResponseMarker;
use crate::model::ResponseDescriptor;

/// Collects all response markers of a method into a mapping keyed by the
/// status code's string form, insertion order preserved.
///
/// Two markers declaring the same code are not an error: the later marker
/// overwrites the earlier entry, which keeps its original position in the
/// mapping. An empty result is valid; the caller is responsible for turning
/// emptiness into a diagnostic.
pub fn collect_responses(markers: &[ResponseMarker]) -> IndexMap<String, ResponseDescriptor> {
    let mut responses = IndexMap::new();
    for marker in markers {
        responses.insert(
            marker.code.to_string(),
            ResponseDescriptor {
                code: marker.code,
                description: marker.description.clone(),
                schema: marker.schema.clone(),
            },
        );
    }
    responses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_keeps_declaration_order() {
        let markers = vec![
            ResponseMarker::new(404, "Not Found"),
            ResponseMarker::new(200, "OK"),
        ];
        let responses = collect_responses(&markers);
        let codes: Vec<&String> = responses.keys().collect();
        assert_eq!(codes, vec!["404", "200"]);
    }

    #[test]
    fn test_duplicate_code_last_wins() {
        let markers = vec![
            ResponseMarker::new(200, "first"),
            ResponseMarker::new(404, "Not Found"),
            ResponseMarker::new(200, "second"),
        ];
        let responses = collect_responses(&markers);

        assert_eq!(responses.len(), 2);
        assert_eq!(responses["200"].description, "second");
        // The overwritten entry keeps its original position.
        let codes: Vec<&String> = responses.keys().collect();
        assert_eq!(codes, vec!["200", "404"]);
    }

    #[test]
    fn test_schema_reference_carried_through() {
        let markers = vec![ResponseMarker::new(200, "OK").schema("User")];
        let responses = collect_responses(&markers);
        assert_eq!(responses["200"].schema.as_deref(), Some("User"));
        assert_eq!(responses["200"].code, 200);
    }

    #[test]
    fn test_no_markers_empty_mapping() {
        assert!(collect_responses(&[]).is_empty());
    }
}
