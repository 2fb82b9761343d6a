//! Document-level rules
//!
//! Checks the report root: the object itself, `title`, `slug`, `date`,
//! `author`, `metadata` and the presence of `sections`. Section contents
//! belong to [`crate::CatalogValidator`].

use std::sync::OnceLock;

use prism_ast::catalog::{FieldKind as K, FieldSpec};
use prism_core::Diagnostic;
use regex::Regex;
use serde_json::Value;

use crate::shape::ShapeWalker;
use crate::Validator;

const METADATA: &[FieldSpec] = &[
    FieldSpec::optional(
        "tags",
        K::List {
            item: &K::String,
            min_items: 0,
        },
    ),
    FieldSpec::optional("category", K::String),
];

const ROOT: &[FieldSpec] = &[
    FieldSpec::required("title", K::String),
    FieldSpec::optional("slug", K::String),
    FieldSpec::optional("date", K::String),
    FieldSpec::optional("author", K::String),
    FieldSpec::optional("metadata", K::Record(METADATA)),
    FieldSpec::required(
        "sections",
        K::List {
            item: &K::Any,
            min_items: 0,
        },
    ),
];

const SLUG_PATTERN: &str = r"^[a-z0-9-]*$";
const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

fn slug_re() -> &'static Regex {
    static SLUG_RE: OnceLock<Regex> = OnceLock::new();
    SLUG_RE.get_or_init(|| Regex::new(SLUG_PATTERN).unwrap())
}

/// Whether a slug uses only lowercase letters, digits and hyphens. The
/// empty slug matches.
pub fn is_valid_slug(slug: &str) -> bool {
    slug_re().is_match(slug)
}

fn date_re() -> &'static Regex {
    static DATE_RE: OnceLock<Regex> = OnceLock::new();
    DATE_RE.get_or_init(|| Regex::new(DATE_PATTERN).unwrap())
}

/// Validates the report root
///
/// # Diagnostic Codes
///
/// - `RPT100`: root is not an object
/// - `RPT101`: `title` or `sections` missing
/// - `RPT102`: root attribute has the wrong type
/// - `RPT110`: `slug` or `date` does not match its pattern
pub struct DocumentValidator;

impl Validator for DocumentValidator {
    fn code(&self) -> &'static str {
        "RPT1"
    }

    fn name(&self) -> &'static str {
        "document"
    }

    fn validate(&self, candidate: &Value) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        let Some(root) = candidate.as_object() else {
            diagnostics.push(
                Diagnostic::error("", "report must be a JSON object").with_code("RPT100"),
            );
            return diagnostics;
        };

        ShapeWalker::new(self.code(), &mut diagnostics).fields(ROOT, root, "");

        let patterns = [
            ("slug", slug_re(), SLUG_PATTERN, "Use lowercase letters, digits and hyphens"),
            ("date", date_re(), DATE_PATTERN, "Use the YYYY-MM-DD format"),
        ];
        for (field, re, pattern, help) in patterns {
            if let Some(Value::String(value)) = root.get(field) {
                if !re.is_match(value) {
                    diagnostics.push(
                        Diagnostic::error(field, format!("'{}' must match pattern {}", value, pattern))
                            .with_code("RPT110")
                            .with_help(help),
                    );
                }
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("my-report"));
        assert!(is_valid_slug("report123"));
        assert!(is_valid_slug(""));
        assert!(!is_valid_slug("My Report"));
        assert!(!is_valid_slug("has_underscore"));
        assert!(!is_valid_slug("a/../b"));
    }
    use serde_json::json;

    fn codes(candidate: Value) -> Vec<(String, String)> {
        DocumentValidator
            .validate(&candidate)
            .into_iter()
            .map(|d| (d.location, d.code.unwrap_or_default()))
            .collect()
    }

    #[test]
    fn test_minimal_report_passes() {
        assert!(codes(json!({"title": "T", "sections": []})).is_empty());
    }

    #[test]
    fn test_root_must_be_object() {
        assert_eq!(codes(json!([1, 2])), vec![(String::new(), "RPT100".to_string())]);
    }

    #[test]
    fn test_missing_title_and_sections() {
        let found = codes(json!({}));
        assert_eq!(
            found,
            vec![
                ("title".to_string(), "RPT101".to_string()),
                ("sections".to_string(), "RPT101".to_string()),
            ]
        );
    }

    #[test]
    fn test_wrong_types() {
        let found = codes(json!({"title": 5, "sections": {}, "author": false}));
        assert!(found.contains(&("title".to_string(), "RPT102".to_string())));
        assert!(found.contains(&("sections".to_string(), "RPT102".to_string())));
        assert!(found.contains(&("author".to_string(), "RPT102".to_string())));
    }

    #[test]
    fn test_slug_pattern() {
        for slug in ["valid-slug-123", "abc", ""] {
            assert!(codes(json!({"title": "T", "slug": slug, "sections": []})).is_empty(), "{}", slug);
        }
        for slug in ["Invalid Slug!", "UPPER", "under_score"] {
            let found = codes(json!({"title": "T", "slug": slug, "sections": []}));
            assert_eq!(found, vec![("slug".to_string(), "RPT110".to_string())], "{}", slug);
        }
    }

    #[test]
    fn test_date_pattern() {
        assert!(codes(json!({"title": "T", "date": "2025-01-15", "sections": []})).is_empty());
        for date in ["not-a-date", "2025-1-15", "15/01/2025"] {
            let found = codes(json!({"title": "T", "date": date, "sections": []}));
            assert_eq!(found, vec![("date".to_string(), "RPT110".to_string())], "{}", date);
        }
    }

    #[test]
    fn test_metadata_tags_must_be_strings() {
        let found = codes(json!({"title": "T", "sections": [], "metadata": {"tags": ["ok", 3]}}));
        assert_eq!(found, vec![("metadata.tags[1]".to_string(), "RPT102".to_string())]);
    }
}
