//! Section catalog
//!
//! The closed, versioned set of section variants: wire tag, MDX component
//! name, and the shape of every attribute. The validator walks these
//! shapes; the MDX renderer takes component names from here; the typed
//! model in [`crate::section`] takes its defaults from here. Adding or
//! removing a variant means touching [`CATALOG`] and the [`Section`] enum.
//!
//! [`Section`]: crate::section::Section

use serde_json::Number;

use self::FieldKind as K;

/// Default heading level for `text` sections
pub const DEFAULT_TEXT_LEVEL: u8 = 2;
/// Default `progress` label
pub const DEFAULT_PROGRESS_LABEL: &str = "Completion";
/// Default `progress` maximum
pub const DEFAULT_PROGRESS_MAX: u64 = 100;
/// Label used for chart datasets without one
pub const DEFAULT_DATASET_LABEL: &str = "Value";

pub fn default_text_level() -> u8 {
    DEFAULT_TEXT_LEVEL
}

pub fn default_progress_label() -> String {
    DEFAULT_PROGRESS_LABEL.to_string()
}

pub fn default_progress_max() -> Number {
    Number::from(DEFAULT_PROGRESS_MAX)
}

pub fn default_dataset_label() -> String {
    DEFAULT_DATASET_LABEL.to_string()
}

/// Shape of one attribute value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Any JSON value
    Any,
    String,
    Number,
    /// String or number
    Scalar,
    Bool,
    /// Whole number within an optional inclusive range
    Integer { min: Option<i64>, max: Option<i64> },
    /// String from a fixed set
    OneOf(&'static [&'static str]),
    /// Free-form object
    Object,
    /// Object with known attributes; unknown attributes are tolerated
    Record(&'static [FieldSpec]),
    /// Array of `item`, at least `min_items` long
    List {
        item: &'static FieldKind,
        min_items: usize,
    },
    /// Nested section array (only `tabs` carries one)
    Sections,
}

/// One named attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Catalog entry for one section variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpec {
    /// Wire tag (`type` value)
    pub tag: &'static str,
    /// MDX component name; `None` when the variant renders as plain prose
    pub component: Option<&'static str>,
    pub fields: &'static [FieldSpec],
}

const STRING_LIST: FieldKind = K::List {
    item: &K::String,
    min_items: 0,
};
const SCALAR_LIST: FieldKind = K::List {
    item: &K::Scalar,
    min_items: 0,
};
const HEADING_LEVEL: FieldKind = K::Integer {
    min: Some(1),
    max: Some(6),
};
const GRID_COLUMNS: FieldKind = K::Integer {
    min: Some(1),
    max: Some(6),
};
const INDEX: FieldKind = K::Integer {
    min: Some(0),
    max: None,
};
const TREND: FieldKind = K::OneOf(&["up", "down", "neutral"]);

const TEXT: &[FieldSpec] = &[
    FieldSpec::optional("heading", K::String),
    FieldSpec::optional("level", HEADING_LEVEL),
    FieldSpec::required("content", K::String),
];

const DATASET: &[FieldSpec] = &[
    FieldSpec::optional("label", K::String),
    FieldSpec::optional("data", K::List { item: &K::Any, min_items: 0 }),
];
const DATASET_RECORD: FieldKind = K::Record(DATASET);
const CHART_DATA: &[FieldSpec] = &[
    FieldSpec::optional("labels", SCALAR_LIST),
    FieldSpec::optional(
        "datasets",
        K::List {
            item: &DATASET_RECORD,
            min_items: 0,
        },
    ),
];
const CHART: &[FieldSpec] = &[
    FieldSpec::required("chartType", K::OneOf(&["line", "bar", "pie", "doughnut"])),
    FieldSpec::optional("title", K::String),
    FieldSpec::required("data", K::Record(CHART_DATA)),
    FieldSpec::optional("options", K::Object),
];

const TABLE: &[FieldSpec] = &[
    FieldSpec::required("headers", STRING_LIST),
    FieldSpec::required(
        "rows",
        K::List {
            item: &SCALAR_LIST,
            min_items: 0,
        },
    ),
    FieldSpec::optional("caption", K::String),
];

const CODE: &[FieldSpec] = &[
    FieldSpec::optional("language", K::String),
    FieldSpec::optional("filename", K::String),
    FieldSpec::required("code", K::String),
];

const CALLOUT: &[FieldSpec] = &[
    FieldSpec::required("variant", K::OneOf(&["info", "warning", "success", "error"])),
    FieldSpec::optional("title", K::String),
    FieldSpec::required("content", K::String),
];

const COMPARISON_ITEM: &[FieldSpec] = &[
    FieldSpec::required("label", K::String),
    FieldSpec::required("highlights", STRING_LIST),
    FieldSpec::optional("variant", K::OneOf(&["positive", "negative", "neutral"])),
];
const COMPARISON_ITEM_RECORD: FieldKind = K::Record(COMPARISON_ITEM);
const COMPARISON: &[FieldSpec] = &[
    FieldSpec::optional("title", K::String),
    FieldSpec::optional("layout", K::OneOf(&["side-by-side", "stacked"])),
    FieldSpec::required(
        "items",
        K::List {
            item: &COMPARISON_ITEM_RECORD,
            min_items: 2,
        },
    ),
];

const MILESTONE: &[FieldSpec] = &[
    FieldSpec::required("label", K::String),
    FieldSpec::optional("completed", K::Bool),
    FieldSpec::optional("current", K::Bool),
];
const MILESTONE_RECORD: FieldKind = K::Record(MILESTONE);
const PROGRESS: &[FieldSpec] = &[
    FieldSpec::optional("mode", K::OneOf(&["bar", "milestones"])),
    FieldSpec::optional("label", K::String),
    FieldSpec::optional("value", K::Number),
    FieldSpec::optional("max", K::Number),
    FieldSpec::optional("variant", K::OneOf(&["default", "success", "warning", "error"])),
    FieldSpec::optional("showPercent", K::Bool),
    FieldSpec::optional(
        "items",
        K::List {
            item: &MILESTONE_RECORD,
            min_items: 0,
        },
    ),
];

const METRIC: &[FieldSpec] = &[
    FieldSpec::required("label", K::String),
    FieldSpec::required("value", K::Scalar),
    FieldSpec::optional("trend", TREND),
    FieldSpec::optional("trendValue", K::String),
];
const METRIC_RECORD: FieldKind = K::Record(METRIC);
const METRICS_GRID: &[FieldSpec] = &[
    FieldSpec::required(
        "metrics",
        K::List {
            item: &METRIC_RECORD,
            min_items: 1,
        },
    ),
    FieldSpec::optional("columns", GRID_COLUMNS),
];

const STEP: &[FieldSpec] = &[
    FieldSpec::required("title", K::String),
    FieldSpec::optional("description", K::String),
];
const STEP_RECORD: FieldKind = K::Record(STEP);
const STEPS: &[FieldSpec] = &[
    FieldSpec::required(
        "steps",
        K::List {
            item: &STEP_RECORD,
            min_items: 1,
        },
    ),
    FieldSpec::optional("orientation", K::OneOf(&["horizontal", "vertical"])),
    FieldSpec::optional("currentStep", INDEX),
];

const DIFF: &[FieldSpec] = &[
    FieldSpec::required("before", K::String),
    FieldSpec::required("after", K::String),
    FieldSpec::optional("language", K::String),
    FieldSpec::optional("title", K::String),
];

const EMBED: &[FieldSpec] = &[
    FieldSpec::required("src", K::String),
    FieldSpec::optional("title", K::String),
    FieldSpec::optional("aspectRatio", K::String),
    FieldSpec::optional("allowFullscreen", K::Bool),
];

const GALLERY_IMAGE: &[FieldSpec] = &[
    FieldSpec::required("src", K::String),
    FieldSpec::required("alt", K::String),
    FieldSpec::optional("caption", K::String),
];
const GALLERY_IMAGE_RECORD: FieldKind = K::Record(GALLERY_IMAGE);
const GALLERY: &[FieldSpec] = &[
    FieldSpec::required(
        "images",
        K::List {
            item: &GALLERY_IMAGE_RECORD,
            min_items: 1,
        },
    ),
    FieldSpec::optional("columns", GRID_COLUMNS),
];

const SOURCE: &[FieldSpec] = &[
    FieldSpec::required("id", K::Scalar),
    FieldSpec::required("title", K::String),
    FieldSpec::optional("url", K::String),
    FieldSpec::optional("author", K::String),
    FieldSpec::optional("date", K::String),
];
const SOURCE_RECORD: FieldKind = K::Record(SOURCE);
const SOURCE_LIST: &[FieldSpec] = &[
    FieldSpec::optional("title", K::String),
    FieldSpec::required(
        "sources",
        K::List {
            item: &SOURCE_RECORD,
            min_items: 1,
        },
    ),
];

const STATCARD: &[FieldSpec] = &[
    FieldSpec::required("label", K::String),
    FieldSpec::required("value", K::Scalar),
    FieldSpec::optional("description", K::String),
    FieldSpec::optional("trend", TREND),
    FieldSpec::optional("trendValue", K::String),
];

const TAB: &[FieldSpec] = &[
    FieldSpec::required("label", K::String),
    FieldSpec::required("sections", K::Sections),
];
const TAB_RECORD: FieldKind = K::Record(TAB);
const TABS: &[FieldSpec] = &[
    FieldSpec::required(
        "tabs",
        K::List {
            item: &TAB_RECORD,
            min_items: 0,
        },
    ),
    FieldSpec::optional("defaultTab", INDEX),
];

const TIMELINE_EVENT: &[FieldSpec] = &[
    FieldSpec::required("date", K::String),
    FieldSpec::required("title", K::String),
    FieldSpec::optional("description", K::String),
];
const TIMELINE_EVENT_RECORD: FieldKind = K::Record(TIMELINE_EVENT);
const TIMELINE: &[FieldSpec] = &[FieldSpec::required(
    "events",
    K::List {
        item: &TIMELINE_EVENT_RECORD,
        min_items: 0,
    },
)];

const FIGURE: &[FieldSpec] = &[
    FieldSpec::required("src", K::String),
    FieldSpec::required("alt", K::String),
    FieldSpec::optional("caption", K::String),
    FieldSpec::optional("width", K::Scalar),
];

const QUOTE: &[FieldSpec] = &[
    FieldSpec::required("text", K::String),
    FieldSpec::required("author", K::String),
    FieldSpec::optional("role", K::String),
];

const ACCORDION_ITEM: &[FieldSpec] = &[
    FieldSpec::required("title", K::String),
    FieldSpec::required("content", K::String),
];
const ACCORDION_ITEM_RECORD: FieldKind = K::Record(ACCORDION_ITEM);
const ACCORDION: &[FieldSpec] = &[
    FieldSpec::required(
        "items",
        K::List {
            item: &ACCORDION_ITEM_RECORD,
            min_items: 0,
        },
    ),
    FieldSpec::optional("allowMultiple", K::Bool),
];

/// Every section variant, in declaration order. MDX component imports
/// follow this order.
#[rustfmt::skip]
pub static CATALOG: &[SectionSpec] = &[
    SectionSpec { tag: "text", component: None, fields: TEXT },
    SectionSpec { tag: "chart", component: Some("Chart"), fields: CHART },
    SectionSpec { tag: "table", component: Some("Table"), fields: TABLE },
    SectionSpec { tag: "code", component: Some("CodeBlock"), fields: CODE },
    SectionSpec { tag: "callout", component: Some("Callout"), fields: CALLOUT },
    SectionSpec { tag: "comparison", component: Some("Comparison"), fields: COMPARISON },
    SectionSpec { tag: "progress", component: Some("Progress"), fields: PROGRESS },
    SectionSpec { tag: "metrics-grid", component: Some("MetricsGrid"), fields: METRICS_GRID },
    SectionSpec { tag: "steps", component: Some("Steps"), fields: STEPS },
    SectionSpec { tag: "diff", component: Some("Diff"), fields: DIFF },
    SectionSpec { tag: "embed", component: Some("Embed"), fields: EMBED },
    SectionSpec { tag: "gallery", component: Some("Gallery"), fields: GALLERY },
    SectionSpec { tag: "source-list", component: Some("SourceList"), fields: SOURCE_LIST },
    SectionSpec { tag: "statcard", component: Some("StatCard"), fields: STATCARD },
    SectionSpec { tag: "tabs", component: Some("Tabs"), fields: TABS },
    SectionSpec { tag: "timeline", component: Some("Timeline"), fields: TIMELINE },
    SectionSpec { tag: "figure", component: Some("Figure"), fields: FIGURE },
    SectionSpec { tag: "quote", component: Some("Quote"), fields: QUOTE },
    SectionSpec { tag: "accordion", component: Some("Accordion"), fields: ACCORDION },
];

/// Look up a variant by wire tag
pub fn lookup(tag: &str) -> Option<&'static SectionSpec> {
    CATALOG.iter().find(|spec| spec.tag == tag)
}

/// All known tags, in catalog order
pub fn tags() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|spec| spec.tag)
}
