//! `prism.toml` settings
//!
//! ```toml
//! [render]
//! components_dir = "../../components"
//! layout = "../../layouts/ReportLayout.astro"
//!
//! [negotiation]
//! namespace = "/reports/"
//!
//! [build]
//! output_dir = "dist"
//! ```

use std::path::PathBuf;

use prism_core::MdxOptions;
use prism_negotiate::NegotiationConfig;
use serde::{Deserialize, Serialize};

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// MDX import and layout paths
    pub render: MdxOptions,
    /// Plain-text negotiation rules
    pub negotiation: NegotiationConfig,
    /// Artifact output
    pub build: BuildSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

/// Build output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    /// Directory artifacts are written to
    pub output_dir: PathBuf,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.render.components_dir, "../../components");
        assert_eq!(settings.negotiation.namespace, "/reports/");
        assert_eq!(settings.build.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_empty_toml() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.build.output_dir, PathBuf::from("dist"));
        assert_eq!(settings.render, MdxOptions::default());
    }

    #[test]
    fn test_full_toml() {
        let toml = r#"
[render]
components_dir = "@/components"
layout = "@/layouts/Plain.astro"

[negotiation]
namespace = "/docs/"
agents = ["curl"]

[build]
output_dir = "site/docs"
"#;
        let settings = Settings::from_toml_str(toml).unwrap();
        assert_eq!(settings.render.components_dir, "@/components");
        assert_eq!(settings.render.layout.as_deref(), Some("@/layouts/Plain.astro"));
        assert_eq!(settings.negotiation.namespace, "/docs/");
        assert_eq!(settings.negotiation.agents, vec!["curl"]);
        assert_eq!(settings.negotiation.index_file, "index.md");
        assert_eq!(settings.build.output_dir, PathBuf::from("site/docs"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Settings::from_toml_str("[build]\noutput_dir = 3").is_err());
    }
}
