//! Dual-target rendering
//!
//! A loaded [`Report`] renders to two textual targets:
//!
//! - [`Target::Markdown`]: plain annotated text for agents and terminals
//!   (see [`markdown`])
//! - [`Target::Mdx`]: prose plus component invocations for the site
//!   (see [`mdx`])
//!
//! Renderers are pure: the same report always yields the same bytes, and
//! rendering cannot fail. Sections a target has no rule for are skipped.

pub mod markdown;
pub mod mdx;

use std::fmt;
use std::str::FromStr;

use prism_ast::Report;
use serde::{Deserialize, Serialize};

pub use markdown::MarkdownRenderer;
pub use mdx::{MdxOptions, MdxRenderer};

/// Output representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Target A: annotated Markdown
    Markdown,
    /// Target B: MDX with component invocations
    Mdx,
}

impl Target {
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Markdown => "markdown",
            Target::Mdx => "mdx",
        }
    }

    /// Conventional file extension for artifacts of this target
    pub fn extension(self) -> &'static str {
        match self {
            Target::Markdown => "md",
            Target::Mdx => "mdx",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Target::Markdown),
            "mdx" => Ok(Target::Mdx),
            other => Err(format!("unknown render target '{}'", other)),
        }
    }
}

/// A report renderer for one target
pub trait Renderer: Send + Sync {
    /// The target this renderer produces
    fn target(&self) -> Target;

    /// Render a report
    fn render(&self, report: &Report) -> String;
}

/// Render a report as Markdown
pub fn render_markdown(report: &Report) -> String {
    MarkdownRenderer::new().render(report)
}

/// Render a report as MDX with default options
pub fn render_mdx(report: &Report) -> String {
    MdxRenderer::new().render(report)
}

/// Build the renderer for a target
pub fn renderer_for(target: Target, options: MdxOptions) -> Box<dyn Renderer> {
    match target {
        Target::Markdown => Box::new(MarkdownRenderer::new()),
        Target::Mdx => Box::new(MdxRenderer::with_options(options)),
    }
}
