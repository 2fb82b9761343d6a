//! prism-ast - Report document model
//!
//! This crate defines the report document ([`Report`]), the closed set of
//! section variants ([`Section`]) and the [`catalog`] describing their
//! shapes, defaults and MDX component names.
//!
//! # Example
//!
//! ```
//! use prism_ast::{Report, Section};
//!
//! let report: Report = serde_json::from_str(
//!     r#"{"title": "Q3", "sections": [{"type": "text", "heading": "Intro", "content": "Hi"}]}"#,
//! )
//! .unwrap();
//!
//! match &report.sections[0] {
//!     Section::Text(text) => assert_eq!(text.level, 2),
//!     _ => unreachable!(),
//! }
//! ```

pub mod catalog;
pub mod document;
pub mod section;

pub use catalog::{FieldKind, FieldSpec, SectionSpec, CATALOG};
pub use document::{Report, ReportMetadata};
pub use section::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
