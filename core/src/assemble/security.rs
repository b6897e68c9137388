#![deny(missing_docs)]

//! # Security Merging
//!
//! Combines API-level default requirements with an operation's own markers.

use crate::markers::SecurityMarker;
use crate::model::SecurityRequirement;

/// Concatenates the context defaults with the operation's security markers:
/// defaults first, method-specific requirements appended, each in declaration
/// order. No de-duplication; an empty result is valid.
pub fn merge_security(
    defaults: &[SecurityRequirement],
    markers: &[SecurityMarker],
) -> Vec<SecurityRequirement> {
    let mut merged = defaults.to_vec();
    merged.extend(markers.iter().map(SecurityRequirement::from));
    merged
}
