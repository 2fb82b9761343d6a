//! Target B: MDX with component invocations
//!
//! The document is a frontmatter block, one `import` per component used
//! anywhere in the report (tabs included, catalog order), and then one
//! invocation per section. Section attributes become component props in
//! field order; `tabs` keeps its nested sections as structured data.

use std::collections::HashSet;

use prism_ast::{catalog, CalloutSection, Report, Section, TextSection, CATALOG};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::markdown::quoted;
use super::{Renderer, Target};

/// Options for MDX output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MdxOptions {
    /// Directory the component imports point into
    pub components_dir: String,
    /// Page layout written to the frontmatter; empty or absent omits it
    pub layout: Option<String>,
}

impl Default for MdxOptions {
    fn default() -> Self {
        Self {
            components_dir: "../../components".to_string(),
            layout: Some("../../layouts/ReportLayout.astro".to_string()),
        }
    }
}

/// MDX renderer
#[derive(Debug, Clone, Default)]
pub struct MdxRenderer {
    options: MdxOptions,
}

impl MdxRenderer {
    /// Create a renderer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom options
    pub fn with_options(options: MdxOptions) -> Self {
        Self { options }
    }

    /// Component names used by the report, in catalog order
    pub fn components_used(report: &Report) -> Vec<&'static str> {
        let used: HashSet<&str> = report.walk().map(Section::tag).collect();
        CATALOG
            .iter()
            .filter(|spec| used.contains(spec.tag))
            .filter_map(|spec| spec.component)
            .collect()
    }
}

impl Renderer for MdxRenderer {
    fn target(&self) -> Target {
        Target::Mdx
    }

    fn render(&self, report: &Report) -> String {
        let mut lines = Vec::new();

        lines.push("---".to_string());
        lines.push(format!("title: {}", quoted(&report.title)));
        if let Some(ref author) = report.author {
            lines.push(format!("author: {}", quoted(author)));
        }
        if let Some(ref date) = report.date {
            lines.push(format!("date: {}", quoted(date)));
        }
        if let Some(layout) = self.options.layout.as_deref().filter(|l| !l.is_empty()) {
            lines.push(format!("layout: {}", layout));
        }
        lines.push("---".to_string());
        lines.push(String::new());

        let components = Self::components_used(report);
        if !components.is_empty() {
            let dir = self.options.components_dir.trim_end_matches('/');
            for component in &components {
                lines.push(format!(
                    "import {} from '{}/{}.astro'",
                    component, dir, component
                ));
            }
            lines.push(String::new());
        }

        for section in &report.sections {
            render_section(section, &mut lines);
        }

        lines.join("\n")
    }
}

fn render_section(section: &Section, lines: &mut Vec<String>) {
    debug!(tag = section.tag(), "rendering mdx section");
    match section {
        Section::Text(text) => render_prose(text, lines),
        Section::Callout(callout) => render_callout(callout, lines),
        Section::Unsupported => warn!("skipping section with unsupported type"),
        other => {
            let Some(component) = catalog::lookup(other.tag()).and_then(|spec| spec.component)
            else {
                warn!(tag = other.tag(), "no component registered, skipping");
                return;
            };
            let props = props(other, &[]);
            if props.is_empty() {
                lines.push(format!("<{} />", component));
            } else {
                lines.push(format!("<{} {} />", component, props.join(" ")));
            }
            lines.push(String::new());
        }
    }
}

fn render_prose(text: &TextSection, lines: &mut Vec<String>) {
    if let Some(ref heading) = text.heading {
        lines.push(format!("{} {}", "#".repeat(text.level as usize), heading));
        lines.push(String::new());
    }
    lines.push(text.content.clone());
    lines.push(String::new());
}

fn render_callout(callout: &CalloutSection, lines: &mut Vec<String>) {
    let section = Section::Callout(callout.clone());
    let props = props(&section, &["content"]);
    lines.push(format!("<Callout {}>", props.join(" ")));
    lines.push(callout.content.clone());
    lines.push("</Callout>".to_string());
    lines.push(String::new());
}

/// Section attributes as `name=literal` props, in field order
fn props(section: &Section, skip: &[&str]) -> Vec<String> {
    let map = match serde_json::to_value(section) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => {
            warn!(tag = section.tag(), "section did not serialize to an object");
            return Vec::new();
        }
    };

    map.iter()
        .filter(|(name, _)| name.as_str() != "type" && !skip.contains(&name.as_str()))
        .filter_map(|(name, value)| prop(name, value))
        .collect()
}

/// One prop literal; `None` for absent values
fn prop(name: &str, value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => {
            let json = quoted(s);
            if json.len() == s.len() + 2 {
                Some(format!("{}=\"{}\"", name, s))
            } else {
                Some(format!("{}={{{}}}", name, json))
            }
        }
        other => Some(format!("{}={{{}}}", name, other)),
    }
}
