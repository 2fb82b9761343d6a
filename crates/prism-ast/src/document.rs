//! Report root and metadata definitions
//!
//! A [`Report`] is the unit every other Prism component works on: it is
//! loaded once from JSON, validated once, and then rendered any number of
//! times without mutation.

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// A complete report document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report title
    pub title: String,
    /// URL slug (lowercase letters, digits and hyphens)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Publication date as `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Report author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Tags and category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ReportMetadata>,
    /// Content sections, in display order
    pub sections: Vec<Section>,
}

/// Report metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Ordered list of tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Report category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Report {
    /// Create an empty report with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: None,
            date: None,
            author: None,
            metadata: None,
            sections: Vec::new(),
        }
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the slug
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Append a section
    pub fn push(&mut self, section: impl Into<Section>) {
        self.sections.push(section.into());
    }

    /// Tags from the metadata block, empty when there is none
    pub fn tags(&self) -> &[String] {
        self.metadata
            .as_ref()
            .map(|m| m.tags.as_slice())
            .unwrap_or_default()
    }

    /// Check if the report has no sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get the number of top-level sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Iterate over every section, descending into tabs
    pub fn walk(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().flat_map(|section| {
            std::iter::once(section).chain(section.nested().iter().flat_map(|tab| tab.sections.iter()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{TabItem, TabsSection, TextSection};

    #[test]
    fn test_empty_report() {
        let report = Report::new("Empty");
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert!(report.tags().is_empty());
    }

    #[test]
    fn test_report_builder() {
        let report = Report::new("Quarterly")
            .with_author("Ada")
            .with_date("2025-01-15")
            .with_slug("quarterly");
        assert_eq!(report.author.as_deref(), Some("Ada"));
        assert_eq!(report.date.as_deref(), Some("2025-01-15"));
        assert_eq!(report.slug.as_deref(), Some("quarterly"));
    }

    #[test]
    fn test_report_push_section() {
        let mut report = Report::new("T");
        report.push(TextSection::new("Hello"));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_walk_descends_into_tabs() {
        let mut report = Report::new("T");
        report.push(TextSection::new("top"));
        report.push(TabsSection {
            tabs: vec![TabItem {
                label: "A".to_string(),
                sections: vec![TextSection::new("inner").into()],
            }],
            default_tab: None,
        });

        let tags: Vec<&str> = report.walk().map(|s| s.tag()).collect();
        assert_eq!(tags, vec!["text", "tabs", "text"]);
    }

    #[test]
    fn test_deserialize_minimal() {
        let report: Report =
            serde_json::from_str(r#"{"title": "Minimal", "sections": []}"#).unwrap();
        assert_eq!(report.title, "Minimal");
        assert!(report.metadata.is_none());
    }

    #[test]
    fn test_metadata_tags() {
        let report: Report = serde_json::from_str(
            r#"{"title": "T", "sections": [], "metadata": {"tags": ["ai", "research"], "category": "analysis"}}"#,
        )
        .unwrap();
        assert_eq!(report.tags(), ["ai".to_string(), "research".to_string()]);
        assert_eq!(
            report.metadata.and_then(|m| m.category).as_deref(),
            Some("analysis")
        );
    }
}
