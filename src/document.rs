#![deny(missing_docs)]

//! # Document Building
//!
//! Walks every registered API, assembles each marked method into an
//! operation, and organizes the results into a document keyed by path and
//! method. Document-level metadata (info, license, contact) is validated
//! here; per-operation conditions stay advisory and accumulate on the
//! diagnostics collector.

use indexmap::IndexMap;
use markswag_core::assemble_operation;
use markswag_core::diagnostics::Diagnostics;
use markswag_core::error::{AppError, AppResult};
use markswag_core::model::{normalize_path, HttpMethod, OperationDescriptor};
use markswag_core::MetadataProvider;
use url::Url;

use crate::registry::{ApiRegistration, ApiRegistry};

/// License metadata declared at the document level.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseMarker {
    /// License name.
    pub name: String,
    /// Optional URL of the license text.
    pub url: Option<String>,
}

impl LicenseMarker {
    /// Creates a license marker named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }

    /// Sets the license URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Contact metadata declared at the document level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactMarker {
    /// Contact name.
    pub name: Option<String>,
    /// Contact URL.
    pub url: Option<String>,
    /// Contact email address.
    pub email: Option<String>,
}

impl ContactMarker {
    /// Creates an empty contact marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the contact name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the contact URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the contact email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Top-level document metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMarker {
    /// Document title.
    pub title: String,
    /// Document version.
    pub version: String,
    /// Longer description (empty if unspecified).
    pub description: String,
    /// Optional license metadata.
    pub license: Option<LicenseMarker>,
    /// Optional contact metadata.
    pub contact: Option<ContactMarker>,
}

impl InfoMarker {
    /// Creates info metadata with the required `title` and `version`.
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            description: String::new(),
            license: None,
            contact: None,
        }
    }

    /// Sets the description.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Attaches license metadata.
    pub fn license(mut self, license: LicenseMarker) -> Self {
        self.license = Some(license);
        self
    }

    /// Attaches contact metadata.
    pub fn contact(mut self, contact: ContactMarker) -> Self {
        self.contact = Some(contact);
        self
    }
}

/// Where an API key is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyLocation {
    /// In a request header.
    Header,
    /// In the query string.
    Query,
}

impl ApiKeyLocation {
    /// The wire `in` token.
    pub fn as_str(self) -> &'static str {
        match self {
            ApiKeyLocation::Header => "header",
            ApiKeyLocation::Query => "query",
        }
    }
}

/// A registered security scheme that requirements reference by name.
#[derive(Debug, Clone, PartialEq)]
pub enum SecurityScheme {
    /// An API key carried in a header or query parameter.
    ApiKey {
        /// Name of the header or query parameter.
        name: String,
        /// Where the key is carried.
        location: ApiKeyLocation,
    },
    /// HTTP basic authentication.
    Basic,
}

/// Operations of one path, keyed by method.
pub type PathItem = IndexMap<HttpMethod, OperationDescriptor>;

/// A fully assembled document, ready for projection to the wire model.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Document metadata.
    pub info: InfoMarker,
    /// Operations indexed by path, then method; both in assembly order.
    pub paths: IndexMap<String, PathItem>,
    /// Registered security schemes, keyed by the name requirements use.
    pub security_definitions: IndexMap<String, SecurityScheme>,
}

/// The result of one document build: the document plus every warning the
/// pass accumulated. The caller decides whether warnings block output.
#[derive(Debug)]
pub struct DocumentBuild {
    /// The assembled document.
    pub document: Document,
    /// Warnings accumulated across all operations.
    pub diagnostics: Diagnostics,
}

/// Builds a [`Document`] from registered APIs.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    info: Option<InfoMarker>,
    registry: ApiRegistry,
    security_definitions: IndexMap<String, SecurityScheme>,
}

impl DocumentBuilder {
    /// Creates a builder for a document described by `info`.
    pub fn new(info: InfoMarker) -> Self {
        Self {
            info: Some(info),
            registry: ApiRegistry::new(),
            security_definitions: IndexMap::new(),
        }
    }

    /// Registers an API.
    pub fn api(mut self, api: ApiRegistration) -> Self {
        self.registry.register(api);
        self
    }

    /// Registers a security scheme under `name`.
    pub fn security_definition(mut self, name: impl Into<String>, scheme: SecurityScheme) -> Self {
        self.security_definitions.insert(name.into(), scheme);
        self
    }

    /// Runs the assembly pass.
    ///
    /// Malformed document metadata (empty title, invalid license URL) is a
    /// hard error. Everything discovered while walking the registered methods
    /// is advisory and lands on the returned diagnostics instead.
    pub fn build(self) -> AppResult<DocumentBuild> {
        let info = self
            .info
            .ok_or_else(|| AppError::General("Document info is required".into()))?;
        validate_info(&info)?;

        let mut diagnostics = Diagnostics::new();
        let mut paths: IndexMap<String, PathItem> = IndexMap::new();

        for api in self.registry.apis() {
            let context = api.marker().context();
            let base_path = api
                .marker()
                .base_path
                .as_deref()
                .map(|base| normalize_path(base.trim_end_matches('/')))
                .filter(|base| base != "/");

            for handle in api.handles() {
                let mut descriptor = assemble_operation(api, handle, &context, &mut diagnostics);

                if let Some(base) = &base_path {
                    descriptor = descriptor.with_path(format!("{}{}", base, descriptor.path));
                }

                if !self.security_definitions.is_empty() {
                    for requirement in &descriptor.security {
                        if !self.security_definitions.contains_key(&requirement.name) {
                            diagnostics.warn(
                                api.identity(handle),
                                format!(
                                    "security requirement '{}' does not match a registered scheme",
                                    requirement.name
                                ),
                            );
                        }
                    }
                }

                let item = paths.entry(descriptor.path.clone()).or_default();
                if item.contains_key(&descriptor.method) {
                    diagnostics.warn(
                        api.identity(handle),
                        format!(
                            "duplicate operation for {} {}",
                            descriptor.method, descriptor.path
                        ),
                    );
                }
                item.insert(descriptor.method, descriptor);
            }
        }

        Ok(DocumentBuild {
            document: Document {
                info,
                paths,
                security_definitions: self.security_definitions,
            },
            diagnostics,
        })
    }
}

fn validate_info(info: &InfoMarker) -> AppResult<()> {
    if info.title.trim().is_empty() {
        return Err(AppError::General(
            "info.title must be a non-empty string".into(),
        ));
    }
    if info.version.trim().is_empty() {
        return Err(AppError::General(
            "info.version must be a non-empty string".into(),
        ));
    }

    if let Some(license) = &info.license {
        if license.name.trim().is_empty() {
            return Err(AppError::General(
                "info.license.name must be a non-empty string".into(),
            ));
        }
        if let Some(url) = &license.url {
            validate_uri_reference(url, "info.license.url")?;
        }
    }

    if let Some(contact) = &info.contact {
        if let Some(url) = &contact.url {
            validate_uri_reference(url, "info.contact.url")?;
        }
        if let Some(email) = &contact.email {
            if !is_valid_email(email) {
                return Err(AppError::General(format!(
                    "info.contact.email '{}' is not a valid email address",
                    email
                )));
            }
        }
    }

    Ok(())
}

fn validate_uri_reference(value: &str, context: &str) -> AppResult<()> {
    if is_valid_uri_reference(value) {
        return Ok(());
    }

    Err(AppError::General(format!(
        "{} '{}' is not a valid URI reference",
        context, value
    )))
}

fn is_valid_uri_reference(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    if value.chars().any(|c| c.is_whitespace()) {
        return false;
    }

    if Url::parse(value).is_ok() {
        return true;
    }

    // Relative references resolve against a dummy base.
    let Ok(base) = Url::parse("https://example.com") else {
        return false;
    };
    Url::options().base_url(Some(&base)).parse(value).is_ok()
}

fn is_valid_email(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains(' ') {
        return false;
    }
    let mut parts = trimmed.split('@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || parts.next().is_some() {
        return false;
    }
    domain.contains('.')
}
