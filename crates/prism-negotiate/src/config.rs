//! Negotiation settings
//!
//! Loaded from the `[negotiation]` table of `prism.toml`; every field has a
//! default so an empty table (or no file at all) gives the stock behaviour.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading negotiation settings
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML syntax or type error
    #[error("Invalid negotiation config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Settings parsed but cannot be used
    #[error("Invalid negotiation config: {0}")]
    Invalid(String),
}

/// Which requests are negotiated and how artifacts are located
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NegotiationConfig {
    /// Path prefix of negotiated requests; must start and end with `/`
    pub namespace: String,
    /// Artifact file name appended to the request path
    pub index_file: String,
    /// Accept values that ask for plain text
    pub plain_text_types: Vec<String>,
    /// User-agent substrings of plain-text clients, matched case-insensitively
    pub agents: Vec<String>,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            namespace: "/reports/".to_string(),
            index_file: "index.md".to_string(),
            plain_text_types: vec!["text/markdown".to_string(), "text/plain".to_string()],
            agents: [
                "curl",
                "wget",
                "httpie",
                "anthropic",
                "openai",
                "claudebot",
                "gptbot",
            ]
            .iter()
            .map(|agent| agent.to_string())
            .collect(),
        }
    }
}

impl NegotiationConfig {
    /// Parse settings from a TOML string holding the table's fields
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.check()?;
        Ok(config)
    }

    /// Reject settings that would make every request defer or escape the
    /// artifact tree
    pub fn check(&self) -> Result<(), ConfigError> {
        if !self.namespace.starts_with('/') || !self.namespace.ends_with('/') {
            return Err(ConfigError::Invalid(format!(
                "namespace '{}' must start and end with '/'",
                self.namespace
            )));
        }
        if self.index_file.is_empty() || self.index_file.contains('/') {
            return Err(ConfigError::Invalid(format!(
                "index_file '{}' must be a plain file name",
                self.index_file
            )));
        }
        Ok(())
    }
}
