//! prism CLI - Command-line interface library
//!
//! This library provides the CLI functionality for Prism, including:
//! - Validate: Check a report against the section catalog
//! - Render: Produce markdown or MDX for a report
//! - Build: Write both artifacts into an output tree
//! - Negotiate: Show how a request would be answered from that tree
//!
//! # Library Usage
//!
//! ```ignore
//! use prism_cli::{build_command, run_cli};
//!
//! // Run the full CLI
//! run_cli()?;
//!
//! // Or use individual commands programmatically
//! let built = build_command(&input, None, Some(&out_dir), None)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Check a report for issues
//! prism validate report.json --format json
//!
//! # Render MDX to stdout
//! prism render report.json --target mdx
//!
//! # Build dist/q3/index.md and dist/q3.mdx
//! prism build report.json --slug q3
//!
//! # What would curl get?
//! prism negotiate /reports/q3/ --user-agent curl/8.4.0
//! ```

pub mod app;
pub mod logging;
pub mod settings;

// Re-export main entry point and types
pub use app::{build_command, negotiate_command, render_command, validate_command};
pub use app::{run_cli, BuiltReport, OutputFormat, RenderFormat};
pub use logging::log_filter;
pub use settings::{BuildSettings, Settings};
