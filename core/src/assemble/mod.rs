#![deny(missing_docs)]

//! # Operation Assembly
//!
//! The orchestrator that turns one marked method declaration plus its
//! API-level context into a fully-populated [`OperationDescriptor`].
//!
//! Assembly is a pure, terminating transformation: no I/O, no error path.
//! Structural omissions surface as warnings on the [`Diagnostics`] sink and
//! never abort the pass.

pub mod params;
pub mod responses;
pub mod security;

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::diagnostics::Diagnostics;
use crate::model::{
    normalize_path, ApiContext, OperationDescriptor, ParameterDescriptor, SecurityRequirement,
};
use crate::provider::{MetadataProvider, MethodHandle};

/// Assembles one operation from the markers of `method`.
///
/// Steps, in order: path normalization, verbatim summary/description copy,
/// all-or-nothing inheritance of tags/produces/consumes from `context`,
/// parameter classification, response collection (warning on emptiness),
/// and security merging with the always-additive secondary markers appended
/// last.
pub fn assemble_operation(
    provider: &impl MetadataProvider,
    method: MethodHandle,
    context: &ApiContext,
    diagnostics: &mut Diagnostics,
) -> OperationDescriptor {
    let marker = provider.operation(method);

    let path = normalize_path(&marker.path);

    // Presence of any explicit value suppresses the whole inherited list;
    // partial merging is deliberately unsupported.
    let tags = if marker.tags.is_empty() {
        context.tags.clone()
    } else {
        marker.tags.clone()
    };
    let produces = if marker.produces.is_empty() {
        context.produces.clone()
    } else {
        marker.produces.clone()
    };
    let consumes = if marker.consumes_nothing {
        Vec::new()
    } else if marker.consumes.is_empty() {
        context.consumes.clone()
    } else {
        marker.consumes.clone()
    };

    let parameters =
        params::build_parameters(provider.parameters(method), provider.body_fields(method));

    let responses = responses::collect_responses(provider.responses(method));
    if responses.is_empty() {
        diagnostics.warn(
            provider.identity(method),
            "operation declares no responses",
        );
    }

    let mut merged_security = security::merge_security(&context.security, provider.security(method));
    merged_security.extend(
        provider
            .extra_security(method)
            .iter()
            .map(SecurityRequirement::from),
    );

    let descriptor = OperationDescriptor {
        path,
        method: marker.method,
        summary: marker.summary.clone(),
        description: marker.description.clone(),
        tags,
        produces,
        consumes,
        parameters,
        responses,
        security: merged_security,
    };

    check_path_template(&descriptor, provider.identity(method), diagnostics);

    descriptor
}

/// Cross-checks `{var}` segments of the path template against the path-kind
/// parameters. Disagreements are advisory, not fatal.
fn check_path_template(
    descriptor: &OperationDescriptor,
    identity: &str,
    diagnostics: &mut Diagnostics,
) {
    static TEMPLATE_RE: OnceLock<Regex> = OnceLock::new();
    let template_re =
        TEMPLATE_RE.get_or_init(|| Regex::new(r"\{([^}]+)}").expect("Invalid regex constant"));

    let mut template_vars = Vec::new();
    let mut seen = HashSet::new();
    for cap in template_re.captures_iter(&descriptor.path) {
        let name = cap[1].to_string();
        if !seen.insert(name.clone()) {
            diagnostics.warn(
                identity,
                format!(
                    "path template '{}' declares duplicate parameter '{}'",
                    descriptor.path, name
                ),
            );
        }
        template_vars.push(name);
    }

    let path_params: Vec<&str> = descriptor
        .parameters
        .iter()
        .filter_map(|p| match p {
            ParameterDescriptor::Path(path) => Some(path.name.as_str()),
            _ => None,
        })
        .collect();

    for var in &template_vars {
        if !path_params.contains(&var.as_str()) {
            diagnostics.warn(
                identity,
                format!(
                    "path template '{}' has no parameter marker for '{}'",
                    descriptor.path, var
                ),
            );
        }
    }

    for name in path_params {
        if !template_vars.iter().any(|var| var == name) {
            diagnostics.warn(
                identity,
                format!(
                    "path parameter '{}' does not appear in path template '{}'",
                    name, descriptor.path
                ),
            );
        }
    }
}
