//! Findings recorded during a generation pass.
//!
//! Diagnostics never abort a pass; they end up in the
//! [`GenerationReport`](crate::GenerationReport) for the caller to show.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Generation went ahead but the result may not be what was wanted.
    Warning,
    /// Informational message about the pass.
    Info,
}

impl Severity {
    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message from a generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The diagnostic message.
    pub message: String,
    /// The declaration it concerns, if any.
    pub class: Option<String>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            class: None,
        }
    }

    /// Create a new info diagnostic.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            class: None,
        }
    }

    /// Attach the declaration this diagnostic is about.
    pub fn at(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(class) = &self.class {
            write!(f, " (in {})", class)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_with_class() {
        let diag = Diagnostic::warning("no fields").at("Empty");
        assert!(diag.severity.is_warning());
        assert_eq!(diag.class.as_deref(), Some("Empty"));
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::info("skipped interface").at("Shape");
        assert_eq!(diag.to_string(), "info: skipped interface (in Shape)");
        assert_eq!(Diagnostic::warning("oops").to_string(), "warning: oops");
    }
}
