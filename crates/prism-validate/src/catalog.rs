//! Catalog rules for sections
//!
//! Every entry of `sections` (and, through tabs, every nested section) is
//! checked against its [`prism_ast::catalog`] entry: known `type`, required
//! attributes, attribute types, allowed values, ranges and minimum lengths.

use prism_core::Diagnostic;
use serde_json::Value;
use tracing::debug;

use crate::shape::ShapeWalker;
use crate::Validator;

/// Validates sections against the section catalog
///
/// # Diagnostic Codes
///
/// - `SEC200`: section is not an object
/// - `SEC201`: required attribute missing
/// - `SEC202`: attribute has the wrong type
/// - `SEC203`: number out of range
/// - `SEC204`: value not in the allowed set
/// - `SEC205`: array shorter than its minimum
/// - `SEC210`: `type` missing or not a string
/// - `SEC211`: unknown `type`
pub struct CatalogValidator;

impl Validator for CatalogValidator {
    fn code(&self) -> &'static str {
        "SEC2"
    }

    fn name(&self) -> &'static str {
        "section-catalog"
    }

    fn validate(&self, candidate: &Value) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        // A missing or mistyped `sections` is reported by the document rules
        if let Some(sections) = candidate.get("sections").and_then(Value::as_array) {
            debug!(count = sections.len(), "checking sections against catalog");
            ShapeWalker::new(self.code(), &mut diagnostics).sections(sections, "sections");
        }

        diagnostics
    }
}
