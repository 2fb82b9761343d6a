//! Integration tests for the prism CLI
//!
//! These tests verify the publish flow end to end:
//! report JSON -> built artifacts -> negotiated response

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use prism_cli::{build_command, negotiate_command, render_command, RenderFormat};
use prism_negotiate::Decision;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("prism-core")
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn prism() -> Command {
    Command::new(env!("CARGO_BIN_EXE_prism"))
}

fn write_report(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_build_writes_both_artifacts() {
    let out = TempDir::new().unwrap();

    let built = build_command(&fixture("valid-report.json"), None, Some(out.path()), None).unwrap();

    assert_eq!(built.len(), 1);
    assert_eq!(built[0].slug, "test-report");
    assert_eq!(built[0].markdown, out.path().join("test-report").join("index.md"));
    assert_eq!(built[0].mdx, out.path().join("test-report.mdx"));

    let markdown = fs::read_to_string(&built[0].markdown).unwrap();
    assert!(markdown.starts_with("---\n"));
    assert!(markdown.contains("**Upload**: 75/100 (75%)"));

    let mdx = fs::read_to_string(&built[0].mdx).unwrap();
    assert!(mdx.contains("layout: ../../layouts/ReportLayout.astro"));
    assert!(mdx.contains("import Chart from '../../components/Chart.astro'"));
}

#[test]
fn test_build_slug_flag_overrides_report() {
    let out = TempDir::new().unwrap();

    let built =
        build_command(&fixture("valid-report.json"), Some("q3"), Some(out.path()), None).unwrap();

    assert_eq!(built[0].slug, "q3");
    assert!(out.path().join("q3").join("index.md").exists());
    assert!(out.path().join("q3.mdx").exists());
}

#[test]
fn test_build_without_slug_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_report(dir.path(), "r.json", r#"{"title": "No slug", "sections": []}"#);

    let err = build_command(&input, None, Some(&dir.path().join("out")), None).unwrap_err();
    assert!(err.to_string().contains("No slug"));
}

#[test]
fn test_build_rejects_invalid_report() {
    let dir = TempDir::new().unwrap();
    let input = write_report(dir.path(), "r.json", r#"{"slug": "x", "sections": []}"#);
    let out = dir.path().join("out");

    let err = build_command(&input, None, Some(&out), None).unwrap_err();
    assert!(err.to_string().contains("1 validation error(s)"));
    assert!(!out.exists());
}

#[test]
fn test_build_rejects_bad_slug_flag() {
    let out = TempDir::new().unwrap();
    let err = build_command(&fixture("valid-report.json"), Some("../up"), Some(out.path()), None)
        .unwrap_err();
    assert!(err.to_string().contains("Invalid slug"));
}

#[test]
fn test_build_directory() {
    let dir = TempDir::new().unwrap();
    let reports = dir.path().join("reports");
    fs::create_dir_all(&reports).unwrap();
    write_report(&reports, "a.json", r#"{"title": "A", "slug": "alpha", "sections": []}"#);
    write_report(&reports, "b.json", r#"{"title": "B", "slug": "beta", "sections": []}"#);
    let out = dir.path().join("out");

    let built = build_command(&reports, None, Some(&out), None).unwrap();

    let slugs: Vec<&str> = built.iter().map(|b| b.slug.as_str()).collect();
    assert_eq!(slugs, vec!["alpha", "beta"]);
    assert!(out.join("beta").join("index.md").exists());

    assert!(build_command(&reports, Some("x"), Some(&out), None).is_err());
}

#[test]
fn test_build_uses_config_render_options() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("prism.toml");
    fs::write(
        &config,
        "[render]\ncomponents_dir = \"@/components\"\nlayout = \"\"\n",
    )
    .unwrap();
    let out = dir.path().join("out");

    let built =
        build_command(&fixture("valid-report.json"), None, Some(&out), Some(&config)).unwrap();

    let mdx = fs::read_to_string(&built[0].mdx).unwrap();
    assert!(mdx.contains("import Chart from '@/components/Chart.astro'"));
    assert!(!mdx.contains("layout:"));
}

#[test]
fn test_render_to_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("nested").join("report.mdx");

    render_command(&fixture("minimal-report.json"), RenderFormat::Mdx, Some(&output), None)
        .unwrap();

    let mdx = fs::read_to_string(&output).unwrap();
    assert!(mdx.starts_with("---\ntitle: "));
}

#[test]
fn test_render_missing_input() {
    let err = render_command(
        Path::new("/nonexistent/report.json"),
        RenderFormat::Markdown,
        None,
        None,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Input file not found"));
}

#[test]
fn test_negotiate_against_build_output() {
    let out = TempDir::new().unwrap();
    build_command(&fixture("valid-report.json"), None, Some(out.path()), None).unwrap();
    let expected = fs::read_to_string(out.path().join("test-report").join("index.md")).unwrap();

    let served = negotiate_command(
        "/reports/test-report/",
        None,
        Some("curl/8.4.0"),
        Some(out.path()),
        None,
    )
    .unwrap();
    assert_eq!(served.response().map(|r| r.body.as_str()), Some(expected.as_str()));

    let browser = negotiate_command(
        "/reports/test-report/",
        Some("text/html"),
        Some("Mozilla/5.0"),
        Some(out.path()),
        None,
    )
    .unwrap();
    assert_eq!(browser, Decision::Defer);

    let missing = negotiate_command(
        "/reports/other",
        Some("text/markdown"),
        None,
        Some(out.path()),
        None,
    )
    .unwrap();
    assert_eq!(missing, Decision::Defer);
}

#[test]
fn test_validate_binary_exit_codes() {
    let ok = prism()
        .args(["validate"])
        .arg(fixture("valid-report.json"))
        .output()
        .unwrap();
    assert!(ok.status.success());
    assert!(String::from_utf8_lossy(&ok.stdout).contains("No issues found"));

    let dir = TempDir::new().unwrap();
    let bad = write_report(
        dir.path(),
        "bad.json",
        r#"{"title": "T", "sections": [{"type": "tabs", "tabs": [{"label": "A", "sections": [{"type": "tabs", "tabs": []}]}]}]}"#,
    );
    let failed = prism()
        .args(["validate", "--format", "json"])
        .arg(&bad)
        .output()
        .unwrap();
    assert_eq!(failed.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&failed.stdout).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(
        report["errors"][0]["location"],
        "sections[0].tabs[0].sections[0]"
    );
}
