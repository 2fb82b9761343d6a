//! Tabs nesting rules
//!
//! A `tabs` section may hold any variant except another `tabs`. The typed
//! model is recursive, so the depth cap is enforced here as a separate pass
//! over the raw tree.

use prism_core::Diagnostic;
use serde_json::Value;

use crate::shape::{field_path, index_path};
use crate::Validator;

fn is_tabs(section: &Value) -> bool {
    section.get("type").and_then(Value::as_str) == Some("tabs")
}

/// Validates that tabs are only one level deep
///
/// # Diagnostic Codes
///
/// - `TAB301`: a tab contains another `tabs` section
/// - `TAB302`: `defaultTab` points past the last tab (warning)
pub struct TabsNestingValidator;

impl TabsNestingValidator {
    fn check_tabs(section: &Value, location: &str, diagnostics: &mut Vec<Diagnostic>) {
        let tabs = section
            .get("tabs")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for (t, tab) in tabs.iter().enumerate() {
            let tab_at = index_path(&field_path(location, "tabs"), t);
            let nested = tab
                .get("sections")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();

            for (n, inner) in nested.iter().enumerate() {
                if is_tabs(inner) {
                    let at = index_path(&field_path(&tab_at, "sections"), n);
                    diagnostics.push(
                        Diagnostic::error(at, "tabs cannot be nested inside another tabs section")
                            .with_code("TAB301")
                            .with_help("Move the inner tabs to the top level of the report"),
                    );
                }
            }
        }

        if let Some(default_tab) = section.get("defaultTab").and_then(Value::as_u64) {
            if !tabs.is_empty() && default_tab >= tabs.len() as u64 {
                diagnostics.push(
                    Diagnostic::warning(
                        field_path(location, "defaultTab"),
                        format!(
                            "defaultTab {} is out of range for {} tab{}",
                            default_tab,
                            tabs.len(),
                            if tabs.len() == 1 { "" } else { "s" }
                        ),
                    )
                    .with_code("TAB302"),
                );
            }
        }
    }
}

impl Validator for TabsNestingValidator {
    fn code(&self) -> &'static str {
        "TAB3"
    }

    fn name(&self) -> &'static str {
        "tabs-nesting"
    }

    fn validate(&self, candidate: &Value) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let Some(sections) = candidate.get("sections").and_then(Value::as_array) else {
            return diagnostics;
        };

        for (i, section) in sections.iter().enumerate() {
            if is_tabs(section) {
                Self::check_tabs(section, &index_path("sections", i), &mut diagnostics);
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tabs_report(inner: Value) -> Value {
        json!({
            "title": "T",
            "sections": [{
                "type": "tabs",
                "tabs": [
                    {"label": "A", "sections": [{"type": "text", "content": "a"}]},
                    {"label": "B", "sections": [inner]}
                ]
            }]
        })
    }

    #[test]
    fn test_flat_tabs_pass() {
        let diags = TabsNestingValidator.validate(&tabs_report(json!({"type": "code", "code": "x"})));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_nested_tabs_rejected() {
        let inner = json!({"type": "tabs", "tabs": [{"label": "Inner", "sections": []}]});
        let diags = TabsNestingValidator.validate(&tabs_report(inner));
        assert_eq!(diags.len(), 1);
        assert!(diags[0].is_error());
        assert_eq!(diags[0].location, "sections[0].tabs[1].sections[0]");
        assert_eq!(diags[0].code.as_deref(), Some("TAB301"));
    }

    #[test]
    fn test_default_tab_out_of_range_warns() {
        let report = json!({
            "title": "T",
            "sections": [{"type": "tabs", "defaultTab": 2, "tabs": [
                {"label": "A", "sections": []},
                {"label": "B", "sections": []}
            ]}]
        });
        let diags = TabsNestingValidator.validate(&report);
        assert_eq!(diags.len(), 1);
        assert!(diags[0].is_warning());
        assert_eq!(diags[0].location, "sections[0].defaultTab");
        assert_eq!(diags[0].message, "defaultTab 2 is out of range for 2 tabs");
    }

    #[test]
    fn test_malformed_tabs_are_ignored() {
        let report = json!({"title": "T", "sections": [{"type": "tabs", "tabs": "nope"}]});
        assert!(TabsNestingValidator.validate(&report).is_empty());
    }
}
