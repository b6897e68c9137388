//! # Diagnostics
//!
//! Build-time warning collection. Structural omissions (an operation without
//! response markers, a path template that disagrees with its parameters) are
//! advisory: they are recorded here, tied to the offending method's identity,
//! and never abort the assembly pass. The embedding build decides whether
//! accumulated warnings block final output.

use std::fmt;

/// One recorded warning, tied to the declaration that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Fully-qualified identity of the offending method.
    pub target: String,
    /// Human-readable description of the condition.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: {} ({})", self.message, self.target)
    }
}

/// Accumulator for warnings emitted during one assembly pass.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning against `target`.
    pub fn warn(&mut self, target: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(Diagnostic {
            target: target.into(),
            message: message.into(),
        });
    }

    /// All warnings recorded so far, in emission order.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Whether any warning has been recorded.
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Number of recorded warnings.
    pub fn len(&self) -> usize {
        self.warnings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_records_in_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warn("api.Users#list", "first");
        diagnostics.warn("api.Users#get", "second");

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics.warnings()[0].message, "first");
        assert_eq!(diagnostics.warnings()[1].target, "api.Users#get");
    }

    #[test]
    fn test_display_includes_target() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warn("api.Users#list", "operation declares no responses");
        let rendered = format!("{}", diagnostics.warnings()[0]);
        assert_eq!(
            rendered,
            "warning: operation declares no responses (api.Users#list)"
        );
    }

    #[test]
    fn test_empty_by_default() {
        let diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());
        assert_eq!(diagnostics.len(), 0);
    }
}
