//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::glob;
use tracing::{debug, info, warn};

use prism_ast::Report;
use prism_core::diagnostics::{Diagnostics, ValidationReport};
use prism_core::{load, render_markdown, MdxRenderer, Renderer, Target};
use prism_negotiate::{Decision, DirectorySource, Negotiator, RequestInfo};
use prism_validate::ValidationEngine;

use crate::settings::Settings;

/// Output format for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// Validation report JSON for tools and CI
    Json,
}

/// Render target selectable on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Plain markdown (Target A)
    #[default]
    Markdown,
    /// MDX with component invocations (Target B)
    Mdx,
}

impl From<RenderFormat> for Target {
    fn from(format: RenderFormat) -> Self {
        match format {
            RenderFormat::Markdown => Target::Markdown,
            RenderFormat::Mdx => Target::Mdx,
        }
    }
}

#[derive(Parser)]
#[command(name = "prism")]
#[command(author, version, about = "Structured reports, rendered twice", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a report document against the section catalog
    Validate {
        /// Input report JSON file
        input: PathBuf,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Render a report to markdown or MDX
    Render {
        /// Input report JSON file
        input: PathBuf,

        /// Render target
        #[arg(short, long, value_enum, default_value = "markdown")]
        target: RenderFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate and write both artifacts for one report or a directory of reports
    Build {
        /// Report JSON file, or a directory of them
        input: PathBuf,

        /// Slug to publish under (defaults to the report's own slug)
        #[arg(short, long)]
        slug: Option<String>,

        /// Output directory (defaults to build.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show how a request would be answered by the built artifacts
    Negotiate {
        /// Request path, e.g. /reports/q3/
        path: String,

        /// Accept header value
        #[arg(long)]
        accept: Option<String>,

        /// User-Agent header value
        #[arg(long)]
        user_agent: Option<String>,

        /// Directory holding built artifacts (defaults to build.output_dir)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { input, format } => {
            validate_command(&input, format)?;
        }
        Commands::Render {
            input,
            target,
            output,
            config,
        } => {
            render_command(&input, target, output.as_deref(), config.as_deref())?;
        }
        Commands::Build {
            input,
            slug,
            output,
            config,
        } => {
            build_command(&input, slug.as_deref(), output.as_deref(), config.as_deref())?;
        }
        Commands::Negotiate {
            path,
            accept,
            user_agent,
            root,
            config,
        } => {
            negotiate_command(
                &path,
                accept.as_deref(),
                user_agent.as_deref(),
                root.as_deref(),
                config.as_deref(),
            )?;
        }
    }

    Ok(())
}

/// Execute the validate command
pub fn validate_command(input: &Path, format: OutputFormat) -> Result<()> {
    let diagnostics = check_file(input)?;

    match format {
        OutputFormat::Json => {
            let report = ValidationReport::from(diagnostics.clone());
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize validation report to JSON")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            if diagnostics.is_empty() {
                println!("✓ No issues found in {}", input.display());
            } else {
                print_diagnostics(&diagnostics);
                println!(
                    "Found {} error(s) and {} warning(s)",
                    diagnostics.error_count(),
                    diagnostics.warning_count()
                );
            }
        }
    }

    // Exit with error code if there are errors
    if diagnostics.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Execute the render command
///
/// Rendering is lenient: sections the catalog does not know are skipped
/// with a warning rather than failing the command.
pub fn render_command(
    input: &Path,
    target: RenderFormat,
    output: Option<&Path>,
    config: Option<&Path>,
) -> Result<()> {
    let settings = load_settings(config)?;
    let report = read_report(input)?;

    let renderer: Box<dyn Renderer> = prism_core::renderer_for(target.into(), settings.render);
    let rendered = renderer.render(&report);

    match output {
        Some(path) => {
            write_artifact(path, &rendered)?;
            println!("✓ Rendered {} to {}", renderer.target(), path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Paths written for one report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltReport {
    pub slug: String,
    pub markdown: PathBuf,
    pub mdx: PathBuf,
}

/// Execute the build command
pub fn build_command(
    input: &Path,
    slug: Option<&str>,
    output: Option<&Path>,
    config: Option<&Path>,
) -> Result<Vec<BuiltReport>> {
    let settings = load_settings(config)?;
    let out_dir = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| settings.build.output_dir.clone());

    let inputs = if input.is_dir() {
        if slug.is_some() {
            anyhow::bail!("--slug cannot be used when building a directory of reports");
        }
        collect_reports(input)?
    } else {
        vec![input.to_path_buf()]
    };

    if inputs.is_empty() {
        anyhow::bail!("No report files found in {}", input.display());
    }

    let renderer = MdxRenderer::with_options(settings.render.clone());
    let mut built = Vec::with_capacity(inputs.len());
    for path in &inputs {
        let report = build_report(path, slug, &out_dir, &renderer)?;
        println!(
            "✓ Built {}: {}, {}",
            report.slug,
            report.markdown.display(),
            report.mdx.display()
        );
        built.push(report);
    }

    info!(count = built.len(), out_dir = %out_dir.display(), "build finished");
    Ok(built)
}

/// Validate one report and write `<out>/<slug>/index.md` and `<out>/<slug>.mdx`
fn build_report(
    input: &Path,
    slug: Option<&str>,
    out_dir: &Path,
    renderer: &MdxRenderer,
) -> Result<BuiltReport> {
    let diagnostics = check_file(input)?;
    if diagnostics.has_errors() {
        for diag in diagnostics.iter() {
            eprintln!("{}", diag);
            eprintln!();
        }
        anyhow::bail!(
            "{} has {} validation error(s)",
            input.display(),
            diagnostics.error_count()
        );
    }

    let report = read_report(input)?;
    let slug = match slug.or(report.slug.as_deref()) {
        Some(slug) => slug.to_string(),
        None => anyhow::bail!(
            "No slug for {}: pass --slug or set \"slug\" in the report",
            input.display()
        ),
    };
    if !is_publishable_slug(&slug) {
        anyhow::bail!(
            "Invalid slug '{}': use lowercase letters, digits and hyphens",
            slug
        );
    }

    let markdown = out_dir.join(&slug).join("index.md");
    let mdx = out_dir.join(format!("{}.{}", slug, Target::Mdx.extension()));

    write_artifact(&markdown, &render_markdown(&report))?;
    write_artifact(&mdx, &renderer.render(&report))?;
    debug!(slug = %slug, "artifacts written");

    Ok(BuiltReport {
        slug,
        markdown,
        mdx,
    })
}

/// Execute the negotiate command
pub fn negotiate_command(
    path: &str,
    accept: Option<&str>,
    user_agent: Option<&str>,
    root: Option<&Path>,
    config: Option<&Path>,
) -> Result<Decision> {
    let settings = load_settings(config)?;
    let root = root
        .map(Path::to_path_buf)
        .unwrap_or_else(|| settings.build.output_dir.clone());

    let mut request = RequestInfo::new(path);
    request.accept = accept.map(str::to_string);
    request.user_agent = user_agent.map(str::to_string);

    let source = DirectorySource::new(root).mount_at(settings.negotiation.namespace.clone());
    let negotiator = Negotiator::with_config(settings.negotiation);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let decision = runtime.block_on(negotiator.decide(&request, &source));

    match &decision {
        Decision::Serve(response) => {
            println!("Decision: serve");
            for (name, value) in &response.headers {
                println!("{}: {}", name, value);
            }
            println!();
            println!("{}", response.body);
        }
        Decision::Defer => println!("Decision: defer"),
    }

    Ok(decision)
}

/// Read and validate a report file
fn check_file(input: &Path) -> Result<Diagnostics> {
    let content = read_input(input)?;
    Ok(ValidationEngine::with_defaults().diagnostics_str(&content))
}

/// Read and load a report file into the typed model
fn read_report(input: &Path) -> Result<Report> {
    let content = read_input(input)?;
    load::from_str(&content).with_context(|| format!("Failed to load report: {}", input.display()))
}

fn read_input(input: &Path) -> Result<String> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))
}

fn write_artifact(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write: {}", path.display()))
}

fn print_diagnostics(diagnostics: &Diagnostics) {
    for diag in diagnostics.iter() {
        println!("{}", diag);
        println!();
    }
}

/// Slugs name a directory, so the empty slug the report rules allow is refused
fn is_publishable_slug(slug: &str) -> bool {
    !slug.is_empty() && prism_validate::is_valid_slug(slug)
}

/// Find all report JSON files directly inside a directory, sorted by path
fn collect_reports(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join("*.json").display().to_string();
    let mut reports = Vec::new();

    for entry in glob(&pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))? {
        match entry {
            Ok(path) => reports.push(path),
            Err(e) => {
                eprintln!("Warning: Could not read {}", e);
            }
        }
    }

    reports.sort();
    Ok(reports)
}

/// Load settings from a config file or use defaults
fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    let settings = match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            Settings::from_toml_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))?
        }
        None => find_settings()?,
    };

    settings
        .negotiation
        .check()
        .context("Invalid [negotiation] settings")?;
    Ok(settings)
}

/// Try `prism.toml` in the working directory, falling back to defaults
fn find_settings() -> Result<Settings> {
    find_settings_in(Path::new("."))
}

/// Try the settings candidates inside `dir`. A malformed file is skipped
/// with a warning.
fn find_settings_in(dir: &Path) -> Result<Settings> {
    let candidates = ["prism.toml", ".prism.toml"];
    for candidate in candidates {
        let path = dir.join(candidate);
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            match Settings::from_toml_str(&content) {
                Ok(settings) => {
                    debug!(path = %path.display(), "loaded settings");
                    return Ok(settings);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "ignoring malformed settings file");
                }
            }
        }
    }
    Ok(Settings::default())
}
