//! prism-validate - Report validation engine
//!
//! Validation runs on the raw JSON value, before anything is loaded into the
//! typed model, so malformed input is described rather than rejected on the
//! first problem. Every registered validator runs on every document and all
//! diagnostics are returned together.
//!
//! # Architecture
//!
//! Individual validators implement the [`Validator`] trait. The
//! [`ValidationEngine`] runs them in registration order and concatenates
//! their diagnostics. The default engine registers:
//!
//! 1. [`DocumentValidator`]: the report root
//! 2. [`CatalogValidator`]: every section against the section catalog
//! 3. [`TabsNestingValidator`]: the one-level tabs rule
//!
//! # Example
//!
//! ```
//! use prism_validate::validate;
//! use serde_json::json;
//!
//! let report = validate(&json!({
//!     "title": "Launch",
//!     "sections": [{"type": "comparison", "items": [{"label": "A", "highlights": []}]}]
//! }));
//!
//! assert!(!report.valid);
//! assert_eq!(report.errors[0].location, "sections[0].items");
//! ```

pub mod catalog;
pub mod document;
pub mod nesting;
mod shape;

use prism_core::diagnostics::{Diagnostic, Diagnostics, ValidationReport};
use serde_json::Value;
use tracing::debug;

// Re-export validators
pub use catalog::CatalogValidator;
pub use document::{is_valid_slug, DocumentValidator};
pub use nesting::TabsNestingValidator;

/// Trait for report validators
///
/// Validators inspect a candidate document and return a list of
/// diagnostics for any issues found. Each validator has a unique code
/// prefix for its diagnostics. Validators must not panic on any input.
pub trait Validator: Send + Sync {
    /// Get the validator's unique code (e.g., "RPT1" for root rules)
    fn code(&self) -> &'static str;

    /// Get a human-readable name for this validator
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// Validate the candidate and return any diagnostics
    fn validate(&self, candidate: &Value) -> Vec<Diagnostic>;
}

/// Validation engine that orchestrates multiple validators
pub struct ValidationEngine {
    /// Registered validators
    validators: Vec<Box<dyn Validator>>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// Create a new empty validation engine
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Create an engine with the full report rule set
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_validator(Box::new(DocumentValidator));
        engine.add_validator(Box::new(CatalogValidator));
        engine.add_validator(Box::new(TabsNestingValidator));
        engine
    }

    /// Add a validator to the engine
    pub fn add_validator(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    /// Get the number of registered validators
    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// Get the names of all registered validators
    pub fn validator_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Run every validator and collect all diagnostics
    pub fn diagnostics(&self, candidate: &Value) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();

        for validator in &self.validators {
            let found = validator.validate(candidate);
            debug!(
                validator = validator.name(),
                count = found.len(),
                "validator finished"
            );
            diagnostics.extend(found);
        }

        diagnostics
    }

    /// Run every validator over JSON text. Text that is not JSON yields a
    /// single root error.
    pub fn diagnostics_str(&self, input: &str) -> Diagnostics {
        match serde_json::from_str::<Value>(input) {
            Ok(candidate) => self.diagnostics(&candidate),
            Err(err) => {
                let mut diagnostics = Diagnostics::new();
                diagnostics.push(
                    Diagnostic::error("", format!("input is not valid JSON: {}", err))
                        .with_code("RPT000"),
                );
                diagnostics
            }
        }
    }

    /// Validate a candidate document
    pub fn validate(&self, candidate: &Value) -> ValidationReport {
        ValidationReport::from(self.diagnostics(candidate))
    }

    /// Check if a candidate has any errors
    pub fn has_errors(&self, candidate: &Value) -> bool {
        self.diagnostics(candidate).has_errors()
    }
}

/// Validate a candidate document with the default rule set
pub fn validate(candidate: &Value) -> ValidationReport {
    ValidationEngine::with_defaults().validate(candidate)
}

/// Validate JSON text. Text that is not JSON yields a single root error.
pub fn validate_str(input: &str) -> ValidationReport {
    ValidationReport::from(ValidationEngine::with_defaults().diagnostics_str(input))
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
