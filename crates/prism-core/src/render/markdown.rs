//! Target A: annotated Markdown
//!
//! Output is a frontmatter header followed by one block per section. Every
//! block ends with a blank line and the whole document is its lines joined
//! by `\n`. Tabs are flattened into `### Tab: <label>` sub-headings.
//!
//! # Example
//!
//! ```
//! use prism_ast::{Report, TextSection};
//! use prism_core::render::{MarkdownRenderer, Renderer};
//!
//! let mut report = Report::new("Q3").with_author("Ada");
//! report.push(TextSection::new("Revenue grew.").with_heading("Summary"));
//!
//! let md = MarkdownRenderer::new().render(&report);
//! assert!(md.starts_with("---\ntitle: \"Q3\"\nauthor: \"Ada\"\n---\n"));
//! assert!(md.contains("## Summary\n\nRevenue grew.\n"));
//! ```

use prism_ast::{
    format_number, AccordionSection, CalloutSection, ChartSection, CodeSection,
    ComparisonSection, DiffSection, EmbedSection, FigureSection, GallerySection, ItemVariant,
    MetricsGridSection, ProgressMode, ProgressSection, QuoteSection, Report, Section,
    SourceListSection, StatcardSection, StepState, StepsSection, TableSection, TabsSection,
    TextSection, TimelineSection, Trend,
};
use serde_json::Value;
use tracing::{debug, warn};

use super::{Renderer, Target};

const EMBED_FALLBACK_TITLE: &str = "Embedded content";

/// Markdown renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for MarkdownRenderer {
    fn target(&self) -> Target {
        Target::Markdown
    }

    fn render(&self, report: &Report) -> String {
        let mut writer = MarkdownWriter::default();
        writer.header(report);
        for section in &report.sections {
            writer.section(section);
        }
        writer.lines.join("\n")
    }
}

/// JSON string literal, used for frontmatter values
pub(crate) fn quoted(s: &str) -> String {
    Value::String(s.to_owned()).to_string()
}

fn trend_glyph(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Neutral => "→",
    }
}

/// ` ↑ +5%` when both trend and trend value are present
fn trend_suffix(trend: Option<Trend>, trend_value: Option<&str>) -> String {
    match (trend, trend_value) {
        (Some(trend), Some(value)) => format!(" {} {}", trend_glyph(trend), value),
        _ => String::new(),
    }
}

/// A chart data point as a table cell; gaps become empty cells
fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => format_number(n),
        Some(other) => other.to_string(),
    }
}

fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
    let cells: Vec<&str> = cells.iter().map(AsRef::as_ref).collect();
    format!("| {} |", cells.join(" | "))
}

fn table_rule(columns: usize) -> String {
    table_row(&vec!["---"; columns])
}

#[derive(Default)]
struct MarkdownWriter {
    lines: Vec<String>,
}

impl MarkdownWriter {
    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn header(&mut self, report: &Report) {
        self.line("---");
        self.line(format!("title: {}", quoted(&report.title)));
        if let Some(ref author) = report.author {
            self.line(format!("author: {}", quoted(author)));
        }
        if let Some(ref date) = report.date {
            self.line(format!("date: {}", quoted(date)));
        }
        let tags = report.tags();
        if !tags.is_empty() {
            let tags: Vec<String> = tags.iter().map(|t| quoted(t)).collect();
            self.line(format!("tags: [{}]", tags.join(", ")));
        }
        self.line("---");
        self.blank();
    }

    fn section(&mut self, section: &Section) {
        debug!(tag = section.tag(), "rendering markdown section");
        match section {
            Section::Text(s) => self.text(s),
            Section::Chart(s) => self.chart(s),
            Section::Table(s) => self.table(s),
            Section::Code(s) => self.code(s),
            Section::Callout(s) => self.callout(s),
            Section::Comparison(s) => self.comparison(s),
            Section::Progress(s) => self.progress(s),
            Section::MetricsGrid(s) => self.metrics_grid(s),
            Section::Steps(s) => self.steps(s),
            Section::Diff(s) => self.diff(s),
            Section::Embed(s) => self.embed(s),
            Section::Gallery(s) => self.gallery(s),
            Section::SourceList(s) => self.source_list(s),
            Section::Statcard(s) => self.statcard(s),
            Section::Tabs(s) => self.tabs(s),
            Section::Timeline(s) => self.timeline(s),
            Section::Figure(s) => self.figure(s),
            Section::Quote(s) => self.quote(s),
            Section::Accordion(s) => self.accordion(s),
            Section::Unsupported => warn!("skipping section with unsupported type"),
        }
    }

    fn text(&mut self, s: &TextSection) {
        if let Some(ref heading) = s.heading {
            self.line(format!("{} {}", "#".repeat(s.level as usize), heading));
            self.blank();
        }
        self.line(s.content.as_str());
        self.blank();
    }

    fn chart(&mut self, s: &ChartSection) {
        if let Some(ref title) = s.title {
            self.line(format!("## {}", title));
            self.blank();
        }
        self.line(format!("*Chart type: {}*", s.chart_type.as_str()));
        self.blank();

        let (Some(labels), Some(datasets)) = (&s.data.labels, &s.data.datasets) else {
            return;
        };

        let mut headers = vec!["Label".to_string()];
        headers.extend(datasets.iter().map(|ds| ds.label.clone()));
        self.line(table_row(&headers));
        self.line(table_rule(headers.len()));

        for (i, label) in labels.iter().enumerate() {
            let mut row = vec![label.to_string()];
            row.extend(datasets.iter().map(|ds| cell(ds.data.get(i))));
            self.line(table_row(&row));
        }
        self.blank();
    }

    fn table(&mut self, s: &TableSection) {
        if let Some(ref caption) = s.caption {
            self.line(format!("**{}**", caption));
            self.blank();
        }
        self.line(table_row(&s.headers));
        self.line(table_rule(s.headers.len()));
        for row in &s.rows {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            self.line(table_row(&cells));
        }
        self.blank();
    }

    fn fenced(&mut self, language: Option<&str>, body: &str) {
        self.line(format!("```{}", language.unwrap_or_default()));
        self.line(body);
        self.line("```");
    }

    fn code(&mut self, s: &CodeSection) {
        if let Some(ref filename) = s.filename {
            self.line(format!("*{}*", filename));
            self.blank();
        }
        self.fenced(s.language.as_deref(), &s.code);
        self.blank();
    }

    fn callout(&mut self, s: &CalloutSection) {
        let label = s.variant.label();
        match s.title {
            Some(ref title) => self.line(format!("> **{}: {}**", label, title)),
            None => self.line(format!("> **{}:**", label)),
        }
        for line in s.content.split('\n') {
            self.line(format!("> {}", line));
        }
        self.blank();
    }

    fn comparison(&mut self, s: &ComparisonSection) {
        if let Some(ref title) = s.title {
            self.line(format!("### {}", title));
            self.blank();
        }
        for item in &s.items {
            let suffix = match item.variant {
                Some(ItemVariant::Positive) => " (+)",
                Some(ItemVariant::Negative) => " (-)",
                Some(ItemVariant::Neutral) | None => "",
            };
            self.line(format!("**{}**{}", item.label, suffix));
            for highlight in &item.highlights {
                self.line(format!("- {}", highlight));
            }
            self.blank();
        }
    }

    fn progress(&mut self, s: &ProgressSection) {
        match s.mode {
            ProgressMode::Bar => {
                let value = s
                    .value
                    .as_ref()
                    .map(format_number)
                    .unwrap_or_else(|| "0".to_string());
                self.line(format!(
                    "**{}**: {}/{} ({}%)",
                    s.label,
                    value,
                    format_number(&s.max),
                    s.percent()
                ));
            }
            ProgressMode::Milestones => {
                self.line(format!("**{}**", s.label));
                self.blank();
                for item in &s.items {
                    let glyph = if item.completed {
                        "✓"
                    } else if item.current {
                        "●"
                    } else {
                        "○"
                    };
                    self.line(format!("- {} {}", glyph, item.label));
                }
            }
        }
        self.blank();
    }

    fn metrics_grid(&mut self, s: &MetricsGridSection) {
        for metric in &s.metrics {
            self.line(format!(
                "- **{}**: {}{}",
                metric.label,
                metric.value,
                trend_suffix(metric.trend, metric.trend_value.as_deref())
            ));
        }
        self.blank();
    }

    fn steps(&mut self, s: &StepsSection) {
        for (i, step) in s.steps.iter().enumerate() {
            let glyph = match s.state_of(i) {
                StepState::Done => "[✓]",
                StepState::Current => "[→]",
                StepState::Pending => "[ ]",
            };
            let mut line = format!("{}. {} {}", i + 1, glyph, step.title);
            if let Some(ref description) = step.description {
                line.push_str(" — ");
                line.push_str(description);
            }
            self.line(line);
        }
        self.blank();
    }

    fn diff(&mut self, s: &DiffSection) {
        if let Some(ref title) = s.title {
            self.line(format!("### {}", title));
            self.blank();
        }
        let language = s.language.as_deref();
        self.line("**Before:**");
        self.blank();
        self.fenced(language, &s.before);
        self.blank();
        self.line("**After:**");
        self.blank();
        self.fenced(language, &s.after);
        self.blank();
    }

    fn embed(&mut self, s: &EmbedSection) {
        let title = s.title.as_deref().unwrap_or(EMBED_FALLBACK_TITLE);
        self.line(format!("[{}]({})", title, s.src));
        self.blank();
    }

    fn gallery(&mut self, s: &GallerySection) {
        for image in &s.images {
            self.line(format!("![{}]({})", image.alt, image.src));
            if let Some(ref caption) = image.caption {
                self.line(format!("*{}*", caption));
            }
            self.blank();
        }
    }

    fn source_list(&mut self, s: &SourceListSection) {
        if let Some(ref title) = s.title {
            self.line(format!("### {}", title));
            self.blank();
        }
        for (i, source) in s.sources.iter().enumerate() {
            let mut line = format!("{}. [{}] **{}**", i + 1, source.id, source.title);

            let mut details = Vec::new();
            if let Some(ref author) = source.author {
                details.push(author.clone());
            }
            if let Some(ref date) = source.date {
                details.push(format!("({})", date));
            }
            if let Some(ref url) = source.url {
                details.push(url.clone());
            }
            if !details.is_empty() {
                line.push_str(" — ");
                line.push_str(&details.join(" "));
            }
            self.line(line);
        }
        self.blank();
    }

    fn statcard(&mut self, s: &StatcardSection) {
        self.line(format!(
            "**{}**: {}{}",
            s.label,
            s.value,
            trend_suffix(s.trend, s.trend_value.as_deref())
        ));
        if let Some(ref description) = s.description {
            self.line(description.as_str());
        }
        self.blank();
    }

    fn tabs(&mut self, s: &TabsSection) {
        for tab in &s.tabs {
            self.line(format!("### Tab: {}", tab.label));
            self.blank();
            for nested in &tab.sections {
                self.section(nested);
            }
        }
    }

    fn timeline(&mut self, s: &TimelineSection) {
        for event in &s.events {
            let mut line = format!("- **{}**: {}", event.date, event.title);
            if let Some(ref description) = event.description {
                line.push_str(" — ");
                line.push_str(description);
            }
            self.line(line);
        }
        self.blank();
    }

    fn figure(&mut self, s: &FigureSection) {
        self.line(format!("![{}]({})", s.alt, s.src));
        if let Some(ref caption) = s.caption {
            self.line(format!("*{}*", caption));
        }
        self.blank();
    }

    fn quote(&mut self, s: &QuoteSection) {
        for line in s.text.split('\n') {
            self.line(format!("> {}", line));
        }
        match s.role {
            Some(ref role) => self.line(format!("> — {}, {}", s.author, role)),
            None => self.line(format!("> — {}", s.author)),
        }
        self.blank();
    }

    fn accordion(&mut self, s: &AccordionSection) {
        for item in &s.items {
            self.line(format!("**{}**", item.title));
            self.blank();
            self.line(item.content.as_str());
            self.blank();
        }
    }
}
