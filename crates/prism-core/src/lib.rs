//! prism-core - Report loading, diagnostics and rendering
//!
//! Loads a report into its canonical typed form and renders it to the two
//! output targets.
//!
//! # Example
//!
//! ```
//! use prism_core::{load, render_markdown, render_mdx};
//!
//! let report = load::from_str(
//!     r#"{"title": "Status", "sections": [{"type": "progress", "label": "Upload", "value": 75}]}"#,
//! )
//! .unwrap();
//!
//! assert!(render_markdown(&report).contains("**Upload**: 75/100 (75%)"));
//! assert!(render_mdx(&report).contains("import Progress from"));
//! ```

pub mod diagnostics;
pub mod error;
pub mod load;
pub mod render;

// Re-export main types and functions
pub use diagnostics::{Diagnostic, Diagnostics, Severity, ValidationError, ValidationReport};
pub use error::LoadError;
pub use render::{
    render_markdown, render_mdx, renderer_for, MarkdownRenderer, MdxOptions, MdxRenderer,
    Renderer, Target,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
