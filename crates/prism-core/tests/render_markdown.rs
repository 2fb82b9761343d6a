//! Integration tests for Markdown rendering
//!
//! Renders the shared fixtures end to end and checks the agent-facing text.

use std::fs;
use std::path::PathBuf;

use prism_ast::Report;
use prism_core::{load, render_markdown};

/// Get the path to test fixtures
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture(name: &str) -> Report {
    let text = fs::read_to_string(fixture_path(name)).unwrap();
    load::from_str(&text).unwrap()
}

#[test]
fn test_frontmatter() {
    let md = render_markdown(&fixture("valid-report.json"));
    assert!(md.starts_with("---\n"));
    assert!(md.contains("title: \"Test Report\""));
    assert!(md.contains("author: \"Test Author\""));
    assert!(md.contains("date: \"2025-01-15\""));
    assert!(md.contains("tags: [\"testing\", \"automation\"]"));
}

#[test]
fn test_minimal_report_omits_optional_header_fields() {
    let md = render_markdown(&fixture("minimal-report.json"));
    assert!(md.contains("title: \"Minimal Report\""));
    assert!(!md.contains("author:"));
    assert!(!md.contains("date:"));
    assert!(!md.contains("tags:"));
    assert!(md.contains("Nothing else to say."));
}

#[test]
fn test_chart_renders_as_table() {
    let md = render_markdown(&fixture("valid-report.json"));
    assert!(md.contains("## Monthly Revenue"));
    assert!(md.contains("*Chart type: bar*"));
    assert!(md.contains("| Label | Revenue |"));
    assert!(md.contains("| Jan | 100 |"));
    assert!(md.contains("| Feb | 200 |"));
}

#[test]
fn test_progress_bar_line() {
    let md = render_markdown(&fixture("valid-report.json"));
    assert!(md.contains("**Upload**: 75/100 (75%)"));
}

#[test]
fn test_steps_states() {
    let md = render_markdown(&fixture("valid-report.json"));
    assert!(md.contains("1. [✓] Research — Gather data"));
    assert!(md.contains("2. [→] Analyze"));
    assert!(md.contains("3. [ ] Publish"));
}

#[test]
fn test_tabs_are_flattened() {
    let md = render_markdown(&fixture("valid-report.json"));
    assert!(md.contains("### Tab: Overview\n\nOverview text\n"));
    assert!(md.contains("### Tab: Numbers\n\n**Users**: 12500 ↑ +15%\n"));
    assert!(!md.contains("<Tabs"));
}

#[test]
fn test_sections_keep_document_order() {
    let md = render_markdown(&fixture("valid-report.json"));
    let summary = md.find("## Summary").unwrap();
    let chart = md.find("## Monthly Revenue").unwrap();
    let callout = md.find("> **Warning: Data lag**").unwrap();
    let sources = md.find("### Sources").unwrap();
    assert!(summary < chart && chart < callout && callout < sources);
}

#[test]
fn test_every_variant_renders() {
    let md = render_markdown(&fixture("all-sections.json"));
    let expected = [
        "# Intro",
        "| Label | A | B |",
        "| Q1 | 10 | 20 |",
        "| A |",
        "```\nhello\n```",
        "> **Success:**\n> Line 1\n> Line 2",
        "**A**\n- x",
        "**B**\n- y",
        "- ✓ Research\n- ● Review\n- ○ Publish",
        "- **NPS**: 41 ↓ -2",
        "1. [ ] Only",
        "**Before:**\n\n```js\nvar a = 1;\n```",
        "**After:**\n\n```js\nconst a = 1;\n```",
        "[Demo](https://example.com/embed)",
        "![A](a.png)\n*First*",
        "1. [s1] **Blog post**",
        "**Uptime**: 99.9%\nRolling 30 days",
        "### Tab: Only\n\n> Nested\n> — Someone",
        "- **2024-01**: Kickoff — Project start",
        "![Figure](fig.png)\n*Figure 1*",
        "> — Edsger Dijkstra, Computer scientist",
        "**What?**\n\nThis.",
    ];
    for needle in expected {
        assert!(md.contains(needle), "missing {:?} in:\n{}", needle, md);
    }
}

#[test]
fn test_rendering_is_idempotent() {
    let report = fixture("all-sections.json");
    assert_eq!(render_markdown(&report), render_markdown(&report));
}
