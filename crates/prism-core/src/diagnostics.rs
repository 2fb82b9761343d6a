//! Validation diagnostics for Prism reports
//!
//! Validators report problems as [`Diagnostic`]s addressed by a location
//! path into the candidate document (`sections[2].chartType`, or the empty
//! string for the root). A finished run is summarized as a
//! [`ValidationReport`], the shape external callers consume.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A diagnostic message from validation
///
/// # Example
///
/// ```
/// use prism_core::diagnostics::Diagnostic;
///
/// let diag = Diagnostic::error("sections[0].chartType", "must be one of line, bar, pie, doughnut")
///     .with_code("SEC204")
///     .with_help("Pick a supported chart type");
///
/// assert!(diag.is_error());
/// assert!(diag.to_string().starts_with("error[SEC204]"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level of the diagnostic
    pub severity: Severity,

    /// Path into the document; empty for the root
    pub location: String,

    /// The diagnostic message
    pub message: String,

    /// Optional rule code (e.g., "RPT101", "SEC204")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Additional help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suspicious but renderable; does not make the document invalid
    Warning,

    /// The document does not satisfy the report schema
    Error,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(severity: Severity, location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            location: location.into(),
            message: message.into(),
            code: None,
            help: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, location, message)
    }

    /// Create a warning diagnostic
    pub fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, location, message)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Check if this is an error-level diagnostic
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Check if this is a warning-level diagnostic
    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: severity[code]: message
        write!(f, "{}", self.severity)?;
        if let Some(ref code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;

        if self.location.is_empty() {
            write!(f, "\n  --> <root>")?;
        } else {
            write!(f, "\n  --> {}", self.location)?;
        }

        if let Some(ref help) = self.help {
            write!(f, "\n  = help: {}", help)?;
        }

        Ok(())
    }
}

/// A collection of diagnostics
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create a new empty diagnostics collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add an error at a location
    pub fn error(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.push(Diagnostic::error(location, message));
    }

    /// Add a warning at a location
    pub fn warning(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.push(Diagnostic::warning(location, message));
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }

    /// Get all diagnostics
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get the count
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self {
            diagnostics: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

/// One entry of a [`ValidationReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub location: String,
    pub message: String,
}

/// Outcome of validating a candidate document
///
/// Serializes as `{"valid": bool, "errors": [{"location", "message"}]}`.
/// Warnings never affect `valid` and are only emitted when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ValidationError>,
}

impl ValidationReport {
    /// A report with no findings
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Whether any error sits at exactly `location`
    pub fn has_error_at(&self, location: &str) -> bool {
        self.errors.iter().any(|e| e.location == location)
    }
}

impl From<Diagnostics> for ValidationReport {
    fn from(diagnostics: Diagnostics) -> Self {
        let mut report = Self::ok();
        for diag in diagnostics {
            let entry = ValidationError {
                location: diag.location,
                message: diag.message,
            };
            match diag.severity {
                Severity::Error => report.errors.push(entry),
                Severity::Warning => report.warnings.push(entry),
            }
        }
        report.valid = report.errors.is_empty();
        report
    }
}
