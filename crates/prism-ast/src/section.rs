//! Section variants
//!
//! Every content block in a report is one [`Section`] variant, discriminated
//! by the `type` field on the wire. Deserializing into these types is the
//! normalization step: catalog defaults (see [`crate::catalog`]) are filled
//! in here exactly once, so every renderer sees the same canonical values.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::catalog;

/// A content section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Section {
    Text(TextSection),
    Chart(ChartSection),
    Table(TableSection),
    Code(CodeSection),
    Callout(CalloutSection),
    Comparison(ComparisonSection),
    Progress(ProgressSection),
    MetricsGrid(MetricsGridSection),
    Steps(StepsSection),
    Diff(DiffSection),
    Embed(EmbedSection),
    Gallery(GallerySection),
    SourceList(SourceListSection),
    Statcard(StatcardSection),
    Tabs(TabsSection),
    Timeline(TimelineSection),
    Figure(FigureSection),
    Quote(QuoteSection),
    Accordion(AccordionSection),
    /// Any tag outside the catalog. Only reachable when validation was
    /// skipped; renderers ignore it.
    #[serde(other)]
    Unsupported,
}

impl Section {
    /// The wire tag of this section (`"metrics-grid"`, `"tabs"`, ...)
    pub fn tag(&self) -> &'static str {
        match self {
            Section::Text(_) => "text",
            Section::Chart(_) => "chart",
            Section::Table(_) => "table",
            Section::Code(_) => "code",
            Section::Callout(_) => "callout",
            Section::Comparison(_) => "comparison",
            Section::Progress(_) => "progress",
            Section::MetricsGrid(_) => "metrics-grid",
            Section::Steps(_) => "steps",
            Section::Diff(_) => "diff",
            Section::Embed(_) => "embed",
            Section::Gallery(_) => "gallery",
            Section::SourceList(_) => "source-list",
            Section::Statcard(_) => "statcard",
            Section::Tabs(_) => "tabs",
            Section::Timeline(_) => "timeline",
            Section::Figure(_) => "figure",
            Section::Quote(_) => "quote",
            Section::Accordion(_) => "accordion",
            Section::Unsupported => "unsupported",
        }
    }

    /// Tabs nested in this section (empty for every other variant)
    pub fn nested(&self) -> &[TabItem] {
        match self {
            Section::Tabs(tabs) => &tabs.tabs,
            _ => &[],
        }
    }
}

/// Format a number for display. Whole floats such as `75.0` print as
/// integers so the output depends on the value, not on how it was written.
pub fn format_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

/// A string-or-number value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(Number),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => f.write_str(&format_number(n)),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar::Number(value.into())
    }
}

/// Trend direction for metrics and stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

// ---------------------------------------------------------------------------
// text / chart / table / code / callout
// ---------------------------------------------------------------------------

/// Prose with an optional heading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    /// Heading level (1-6)
    #[serde(default = "catalog::default_text_level")]
    pub level: u8,
    pub content: String,
}

impl TextSection {
    /// Text without a heading
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            heading: None,
            level: catalog::DEFAULT_TEXT_LEVEL,
            content: content.into(),
        }
    }

    /// Set the heading
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
    Pie,
    Doughnut,
}

impl ChartType {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Bar => "bar",
            ChartType::Pie => "pie",
            ChartType::Doughnut => "doughnut",
        }
    }
}

/// A chart, rendered client-side from `data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSection {
    pub chart_type: ChartType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub data: ChartData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

/// Chart payload. Keys Prism does not interpret are carried through.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Scalar>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasets: Option<Vec<Dataset>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One data series of a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default = "catalog::default_dataset_label")]
    pub label: String,
    /// Data points; `null` entries are gaps
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<Value>) -> Self {
        Self {
            label: label.into(),
            data,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSection {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Scalar>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutVariant {
    Info,
    Warning,
    Success,
    Error,
}

impl CalloutVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            CalloutVariant::Info => "info",
            CalloutVariant::Warning => "warning",
            CalloutVariant::Success => "success",
            CalloutVariant::Error => "error",
        }
    }

    /// Capitalized display label
    pub fn label(self) -> &'static str {
        match self {
            CalloutVariant::Info => "Info",
            CalloutVariant::Warning => "Warning",
            CalloutVariant::Success => "Success",
            CalloutVariant::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalloutSection {
    pub variant: CalloutVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
}

// ---------------------------------------------------------------------------
// comparison / progress / metrics-grid / steps
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComparisonLayout {
    SideBySide,
    Stacked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemVariant {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<ComparisonLayout>,
    pub items: Vec<ComparisonItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonItem {
    pub label: String,
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ItemVariant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressMode {
    #[default]
    Bar,
    Milestones,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressVariant {
    Default,
    Success,
    Warning,
    Error,
}

/// A progress bar or a milestone list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSection {
    #[serde(default)]
    pub mode: ProgressMode,
    #[serde(default = "catalog::default_progress_label")]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Number>,
    #[serde(default = "catalog::default_progress_max")]
    pub max: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ProgressVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_percent: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Milestone>,
}

impl Default for ProgressSection {
    fn default() -> Self {
        Self {
            mode: ProgressMode::Bar,
            label: catalog::default_progress_label(),
            value: None,
            max: catalog::default_progress_max(),
            variant: None,
            show_percent: None,
            items: Vec::new(),
        }
    }
}

impl ProgressSection {
    /// Completion percentage, rounded to the nearest integer.
    /// A zero or negative `max` yields 0.
    pub fn percent(&self) -> i64 {
        let value = self.value.as_ref().and_then(Number::as_f64).unwrap_or(0.0);
        let max = self.max.as_f64().unwrap_or(0.0);
        if max <= 0.0 {
            return 0;
        }
        (value / max * 100.0).round() as i64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub label: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsGridSection {
    pub metrics: Vec<Metric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub label: String,
    pub value: Scalar,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepsSection {
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    /// 0-based index of the step in progress
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_step: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Where a step stands relative to `currentStep`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Done,
    Current,
    Pending,
}

impl StepsSection {
    /// State of the step at `index`. Every step is pending when no
    /// `currentStep` is set.
    pub fn state_of(&self, index: usize) -> StepState {
        match self.current_step {
            Some(current) if index < current => StepState::Done,
            Some(current) if index == current => StepState::Current,
            _ => StepState::Pending,
        }
    }
}

// ---------------------------------------------------------------------------
// diff / embed / gallery / source-list / statcard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffSection {
    pub before: String,
    pub after: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedSection {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_fullscreen: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GallerySection {
    pub images: Vec<GalleryImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceListSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub sources: Vec<SourceEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub id: Scalar,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatcardSection {
    pub label: String,
    pub value: Scalar,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_value: Option<String>,
}

// ---------------------------------------------------------------------------
// tabs / timeline / figure / quote / accordion
// ---------------------------------------------------------------------------

/// Tabbed container. Nested sections may be any variant except `tabs`;
/// the depth cap is enforced by validation, not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabsSection {
    pub tabs: Vec<TabItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tab: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabItem {
    pub label: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSection {
    pub events: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub date: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureSection {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Scalar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSection {
    pub text: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionSection {
    pub items: Vec<AccordionItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_multiple: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccordionItem {
    pub title: String,
    pub content: String,
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Section {
                fn from(section: $ty) -> Self {
                    Section::$variant(section)
                }
            }
        )*
    };
}

impl_from_variant!(
    Text(TextSection),
    Chart(ChartSection),
    Table(TableSection),
    Code(CodeSection),
    Callout(CalloutSection),
    Comparison(ComparisonSection),
    Progress(ProgressSection),
    MetricsGrid(MetricsGridSection),
    Steps(StepsSection),
    Diff(DiffSection),
    Embed(EmbedSection),
    Gallery(GallerySection),
    SourceList(SourceListSection),
    Statcard(StatcardSection),
    Tabs(TabsSection),
    Timeline(TimelineSection),
    Figure(FigureSection),
    Quote(QuoteSection),
    Accordion(AccordionSection),
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Section {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_format_number() {
        let number = |v: Value| match v {
            Value::Number(n) => n,
            _ => unreachable!(),
        };
        assert_eq!(format_number(&number(json!(75))), "75");
        assert_eq!(format_number(&number(json!(75.0))), "75");
        assert_eq!(format_number(&number(json!(-3.0))), "-3");
        assert_eq!(format_number(&number(json!(2.5))), "2.5");
    }

    #[test]
    fn test_scalar_display_whole_float() {
        let scalar: Scalar = serde_json::from_value(json!(12500.0)).unwrap();
        assert_eq!(scalar.to_string(), "12500");
        assert_eq!(Scalar::from("+15%").to_string(), "+15%");
    }

    #[test]
    fn test_text_level_defaults_to_2() {
        let section = parse(json!({"type": "text", "heading": "Intro", "content": "Body"}));
        match section {
            Section::Text(text) => assert_eq!(text.level, 2),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_progress_defaults() {
        let section = parse(json!({"type": "progress", "value": 50}));
        let Section::Progress(progress) = section else {
            panic!("expected progress");
        };
        assert_eq!(progress.mode, ProgressMode::Bar);
        assert_eq!(progress.label, "Completion");
        assert_eq!(progress.max, Number::from(100));
        assert_eq!(progress.percent(), 50);
    }

    #[test]
    fn test_progress_percent_rounds() {
        let progress = ProgressSection {
            value: Some(Number::from(1)),
            max: Number::from(3),
            ..Default::default()
        };
        assert_eq!(progress.percent(), 33);
    }

    #[test]
    fn test_progress_percent_zero_max() {
        let progress = ProgressSection {
            value: Some(Number::from(5)),
            max: Number::from(0),
            ..Default::default()
        };
        assert_eq!(progress.percent(), 0);
    }

    #[test]
    fn test_dataset_label_defaults_to_value() {
        let section = parse(json!({
            "type": "chart",
            "chartType": "pie",
            "data": {"labels": ["X"], "datasets": [{"data": [5]}]}
        }));
        let Section::Chart(chart) = section else {
            panic!("expected chart");
        };
        let datasets = chart.data.datasets.unwrap();
        assert_eq!(datasets[0].label, "Value");
    }

    #[test]
    fn test_chart_data_keeps_unknown_keys() {
        let section = parse(json!({
            "type": "chart",
            "chartType": "bar",
            "data": {"labels": [], "datasets": [{"data": [], "backgroundColor": "#fff"}], "xAxisID": "x"}
        }));
        let Section::Chart(chart) = section else {
            panic!("expected chart");
        };
        assert_eq!(chart.data.extra.get("xAxisID"), Some(&json!("x")));
        let datasets = chart.data.datasets.unwrap();
        assert_eq!(datasets[0].extra.get("backgroundColor"), Some(&json!("#fff")));
    }

    #[test]
    fn test_kebab_case_tags() {
        let grid = parse(json!({"type": "metrics-grid", "metrics": [{"label": "A", "value": 1}]}));
        assert_eq!(grid.tag(), "metrics-grid");

        let sources = parse(json!({"type": "source-list", "sources": [{"id": "1", "title": "P"}]}));
        assert_eq!(sources.tag(), "source-list");
    }

    #[test]
    fn test_unknown_tag_is_unsupported() {
        let section = parse(json!({"type": "hologram", "depth": 3}));
        assert_eq!(section, Section::Unsupported);
    }

    #[test]
    fn test_serialize_puts_tag_first() {
        let section: Section = TextSection::new("Hi").into();
        let json = serde_json::to_string(&section).unwrap();
        assert!(json.starts_with(r#"{"type":"text""#), "got {}", json);
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::from(12500u64).to_string(), "12500");
        assert_eq!(Scalar::from("$50k").to_string(), "$50k");
        let fractional: Scalar = serde_json::from_value(json!(2.5)).unwrap();
        assert_eq!(fractional.to_string(), "2.5");
    }

    #[test]
    fn test_step_states() {
        let steps = StepsSection {
            steps: vec![],
            orientation: None,
            current_step: Some(1),
        };
        assert_eq!(steps.state_of(0), StepState::Done);
        assert_eq!(steps.state_of(1), StepState::Current);
        assert_eq!(steps.state_of(2), StepState::Pending);

        let unset = StepsSection {
            current_step: None,
            ..steps
        };
        assert_eq!(unset.state_of(0), StepState::Pending);
    }

    #[test]
    fn test_nested_tabs_parse() {
        let section = parse(json!({
            "type": "tabs",
            "defaultTab": 1,
            "tabs": [
                {"label": "One", "sections": [{"type": "text", "content": "a"}]},
                {"label": "Two", "sections": [{"type": "statcard", "label": "Users", "value": 100}]}
            ]
        }));
        assert_eq!(section.nested().len(), 2);
        let Section::Tabs(tabs) = section else {
            panic!("expected tabs");
        };
        assert_eq!(tabs.default_tab, Some(1));
        assert_eq!(tabs.tabs[1].sections[0].tag(), "statcard");
    }
}
