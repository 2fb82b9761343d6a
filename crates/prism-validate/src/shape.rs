//! Shape checking against catalog field specs
//!
//! [`ShapeWalker`] checks a JSON value against a [`FieldKind`] and records
//! one diagnostic per violation. It never stops early: every field of every
//! record is visited so a single pass reports all problems.
//!
//! Diagnostic codes are the owning validator's code followed by a fixed
//! suffix:
//!
//! | suffix | meaning |
//! |---|---|
//! | `00` | section is not an object |
//! | `01` | required attribute missing |
//! | `02` | wrong JSON type |
//! | `03` | number out of range |
//! | `04` | value not in the allowed set |
//! | `05` | array too short |
//! | `10` | section `type` missing or not a string |
//! | `11` | unknown section `type` |

use prism_ast::catalog::{self, FieldKind, FieldSpec};
use prism_core::Diagnostic;
use serde_json::{Map, Value};

/// `parent.name`, or `name` at the root
pub(crate) fn field_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

/// `parent[index]`
pub(crate) fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

fn kind_name(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Any => "any value",
        FieldKind::String | FieldKind::OneOf(_) => "a string",
        FieldKind::Number => "a number",
        FieldKind::Scalar => "a string or number",
        FieldKind::Bool => "a boolean",
        FieldKind::Integer { .. } => "an integer",
        FieldKind::Object | FieldKind::Record(_) => "an object",
        FieldKind::List { .. } => "an array",
        FieldKind::Sections => "an array of sections",
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Walks values against field specs, collecting diagnostics
pub(crate) struct ShapeWalker<'a> {
    code: &'static str,
    out: &'a mut Vec<Diagnostic>,
}

impl<'a> ShapeWalker<'a> {
    pub(crate) fn new(code: &'static str, out: &'a mut Vec<Diagnostic>) -> Self {
        Self { code, out }
    }

    fn diagnostic(&self, suffix: &str, location: &str, message: String) -> Diagnostic {
        Diagnostic::error(location, message).with_code(format!("{}{}", self.code, suffix))
    }

    fn emit(&mut self, suffix: &str, location: &str, message: String) {
        let diagnostic = self.diagnostic(suffix, location, message);
        self.out.push(diagnostic);
    }

    fn type_error(&mut self, kind: &FieldKind, value: &Value, location: &str) {
        self.emit(
            "02",
            location,
            format!("must be {}, found {}", kind_name(kind), json_type(value)),
        );
    }

    /// Check every catalogued attribute of a record. Attributes the catalog
    /// does not describe are ignored.
    pub(crate) fn fields(&mut self, fields: &[FieldSpec], record: &Map<String, Value>, location: &str) {
        for field in fields {
            let at = field_path(location, field.name);
            match record.get(field.name) {
                Some(value) => self.value(&field.kind, value, &at),
                None if field.required => {
                    self.emit(
                        "01",
                        &at,
                        format!("required property '{}' is missing", field.name),
                    );
                }
                None => {}
            }
        }
    }

    /// Check one value against a kind
    pub(crate) fn value(&mut self, kind: &FieldKind, value: &Value, location: &str) {
        match kind {
            FieldKind::Any => {}
            FieldKind::String => {
                if !value.is_string() {
                    self.type_error(kind, value, location);
                }
            }
            FieldKind::Number => {
                if !value.is_number() {
                    self.type_error(kind, value, location);
                }
            }
            FieldKind::Scalar => {
                if !(value.is_string() || value.is_number()) {
                    self.type_error(kind, value, location);
                }
            }
            FieldKind::Bool => {
                if !value.is_boolean() {
                    self.type_error(kind, value, location);
                }
            }
            FieldKind::Integer { min, max } => self.integer(*min, *max, value, location),
            FieldKind::OneOf(options) => match value.as_str() {
                Some(s) if options.contains(&s) => {}
                Some(s) => {
                    self.emit(
                        "04",
                        location,
                        format!("'{}' must be one of: {}", s, options.join(", ")),
                    );
                }
                None => self.type_error(kind, value, location),
            },
            FieldKind::Object => {
                if !value.is_object() {
                    self.type_error(kind, value, location);
                }
            }
            FieldKind::Record(fields) => match value.as_object() {
                Some(record) => self.fields(fields, record, location),
                None => self.type_error(kind, value, location),
            },
            FieldKind::List { item, min_items } => match value.as_array() {
                Some(items) => {
                    if items.len() < *min_items {
                        self.emit(
                            "05",
                            location,
                            format!(
                                "must contain at least {} item{}, found {}",
                                min_items,
                                if *min_items == 1 { "" } else { "s" },
                                items.len()
                            ),
                        );
                    }
                    for (i, element) in items.iter().enumerate() {
                        self.value(item, element, &index_path(location, i));
                    }
                }
                None => self.type_error(kind, value, location),
            },
            FieldKind::Sections => match value.as_array() {
                Some(sections) => self.sections(sections, location),
                None => self.type_error(kind, value, location),
            },
        }
    }

    fn integer(&mut self, min: Option<i64>, max: Option<i64>, value: &Value, location: &str) {
        let number = match value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_u64().map(|_| i64::MAX)),
            _ => None,
        };
        let Some(number) = number else {
            self.type_error(&FieldKind::Integer { min, max }, value, location);
            return;
        };

        let below = min.is_some_and(|min| number < min);
        let above = max.is_some_and(|max| number > max);
        if below || above {
            let bounds = match (min, max) {
                (Some(min), Some(max)) => format!("between {} and {}", min, max),
                (Some(min), None) => format!(">= {}", min),
                (None, Some(max)) => format!("<= {}", max),
                (None, None) => return,
            };
            self.emit("03", location, format!("must be {}, found {}", bounds, value));
        }
    }

    /// Check a section array; each element must be a known variant
    pub(crate) fn sections(&mut self, sections: &[Value], location: &str) {
        for (i, section) in sections.iter().enumerate() {
            self.section(section, &index_path(location, i));
        }
    }

    fn section(&mut self, value: &Value, location: &str) {
        let Some(record) = value.as_object() else {
            self.emit(
                "00",
                location,
                format!("section must be an object, found {}", json_type(value)),
            );
            return;
        };

        let type_at = field_path(location, "type");
        let tag = match record.get("type") {
            Some(Value::String(tag)) => tag,
            Some(other) => {
                self.emit(
                    "10",
                    &type_at,
                    format!("section type must be a string, found {}", json_type(other)),
                );
                return;
            }
            None => {
                self.emit("10", &type_at, "required property 'type' is missing".to_string());
                return;
            }
        };

        let Some(spec) = catalog::lookup(tag) else {
            let known: Vec<&str> = catalog::tags().collect();
            let diagnostic = self
                .diagnostic("11", &type_at, format!("unknown section type '{}'", tag))
                .with_help(format!("expected one of: {}", known.join(", ")));
            self.out.push(diagnostic);
            return;
        };

        self.fields(spec.fields, record, location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(kind: FieldKind, value: Value) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        ShapeWalker::new("T1", &mut out).value(&kind, &value, "x");
        out
    }

    #[test]
    fn test_paths() {
        assert_eq!(field_path("", "title"), "title");
        assert_eq!(field_path("sections[2]", "chartType"), "sections[2].chartType");
        assert_eq!(index_path("sections", 3), "sections[3]");
    }

    #[test]
    fn test_scalar_accepts_string_and_number() {
        assert!(check(FieldKind::Scalar, json!("a")).is_empty());
        assert!(check(FieldKind::Scalar, json!(1.5)).is_empty());
        let diags = check(FieldKind::Scalar, json!(true));
        assert_eq!(diags[0].code.as_deref(), Some("T102"));
        assert_eq!(diags[0].message, "must be a string or number, found boolean");
    }

    #[test]
    fn test_integer_range() {
        let kind = FieldKind::Integer {
            min: Some(1),
            max: Some(6),
        };
        assert!(check(kind, json!(6)).is_empty());
        let diags = check(kind, json!(7));
        assert_eq!(diags[0].code.as_deref(), Some("T103"));
        assert_eq!(diags[0].message, "must be between 1 and 6, found 7");
        assert_eq!(check(kind, json!(0)).len(), 1);
    }

    #[test]
    fn test_integer_rejects_fractions() {
        let kind = FieldKind::Integer {
            min: Some(0),
            max: None,
        };
        let diags = check(kind, json!(1.5));
        assert_eq!(diags[0].code.as_deref(), Some("T102"));
        let diags = check(kind, json!(-1));
        assert_eq!(diags[0].message, "must be >= 0, found -1");
    }

    #[test]
    fn test_one_of() {
        let kind = FieldKind::OneOf(&["a", "b"]);
        assert!(check(kind, json!("a")).is_empty());
        let diags = check(kind, json!("c"));
        assert_eq!(diags[0].message, "'c' must be one of: a, b");
        assert_eq!(diags[0].location, "x");
    }

    #[test]
    fn test_list_checks_every_item() {
        let kind = FieldKind::List {
            item: &FieldKind::String,
            min_items: 2,
        };
        let diags = check(kind, json!([1]));
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].message, "must contain at least 2 items, found 1");
        assert_eq!(diags[0].code.as_deref(), Some("T105"));
        assert_eq!(diags[1].code.as_deref(), Some("T102"));
        assert_eq!(diags[1].location, "x[0]");
    }

    #[test]
    fn test_list_too_short() {
        let kind = FieldKind::List {
            item: &FieldKind::Any,
            min_items: 1,
        };
        let diags = check(kind, json!([]));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "must contain at least 1 item, found 0");
    }

    #[test]
    fn test_unknown_section_type_has_help() {
        let mut out = Vec::new();
        ShapeWalker::new("S2", &mut out).sections(&[json!({"type": "hologram"})], "sections");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].location, "sections[0].type");
        assert_eq!(out[0].code.as_deref(), Some("S211"));
        assert!(out[0].help.as_deref().unwrap().contains("metrics-grid"));
    }

    #[test]
    fn test_unknown_attributes_are_ignored() {
        let mut out = Vec::new();
        ShapeWalker::new("S2", &mut out).sections(
            &[json!({"type": "text", "content": "x", "sparkle": true})],
            "sections",
        );
        assert!(out.is_empty());
    }
}
