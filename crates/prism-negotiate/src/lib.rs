//! prism-negotiate - Serve report markdown to plain-text clients
//!
//! Report pages are published twice: as an HTML page for browsers and as a
//! markdown artifact next to it. The [`Negotiator`] looks at an incoming
//! request and decides whether the markdown artifact should be returned in
//! place of the page.
//!
//! A request is served the artifact when all of the following hold:
//!
//! - its path lies under the report namespace (`/reports/` by default)
//! - it asks for plain text, through its `Accept` header or because its
//!   user agent is a known command-line tool or crawler
//! - the artifact at `<path>/index.md` can be fetched
//!
//! Anything else yields [`Decision::Defer`] and the request continues down
//! the normal pipeline.
//!
//! # Example
//!
//! ```
//! use prism_negotiate::{Decision, MemorySource, Negotiator, RequestInfo};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let source = MemorySource::new().with("/reports/q3/index.md", "# Q3");
//! let request = RequestInfo::new("/reports/q3/").with_user_agent("curl/8.4.0");
//!
//! match Negotiator::new().decide(&request, &source).await {
//!     Decision::Serve(response) => assert_eq!(response.body, "# Q3"),
//!     Decision::Defer => unreachable!(),
//! }
//! # });
//! ```

pub mod config;
pub mod source;

use tracing::{debug, warn};

pub use config::{ConfigError, NegotiationConfig};
pub use source::{ArtifactSource, DirectorySource, FetchError, MemorySource};

/// Content type of served artifacts
pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

/// Header marking a negotiated response
pub const FORMAT_HEADER: &str = "X-Content-Format";

/// The parts of a request negotiation looks at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestInfo {
    pub path: String,
    pub accept: Option<String>,
    pub user_agent: Option<String>,
}

impl RequestInfo {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// A markdown response ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainTextResponse {
    /// Artifact text, unmodified
    pub body: String,
    /// Response headers in send order
    pub headers: Vec<(String, String)>,
}

impl PlainTextResponse {
    fn markdown(body: String) -> Self {
        Self {
            body,
            headers: vec![
                ("Content-Type".to_string(), MARKDOWN_CONTENT_TYPE.to_string()),
                (FORMAT_HEADER.to_string(), "markdown".to_string()),
            ],
        }
    }

    /// Look up a header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Outcome of negotiation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Answer with the markdown artifact
    Serve(PlainTextResponse),
    /// Let the request continue to the normal handler
    Defer,
}

impl Decision {
    pub fn is_serve(&self) -> bool {
        matches!(self, Decision::Serve(_))
    }

    pub fn response(&self) -> Option<&PlainTextResponse> {
        match self {
            Decision::Serve(response) => Some(response),
            Decision::Defer => None,
        }
    }
}

/// Decides per request between the markdown artifact and the normal page
#[derive(Debug, Clone, Default)]
pub struct Negotiator {
    config: NegotiationConfig,
}

impl Negotiator {
    /// Create a negotiator with the default client list
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NegotiationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NegotiationConfig {
        &self.config
    }

    /// Whether the path is subject to negotiation at all
    pub fn in_namespace(&self, path: &str) -> bool {
        path.starts_with(&self.config.namespace)
    }

    /// Whether the client asked for, or is known to prefer, plain text
    pub fn wants_plain_text(&self, request: &RequestInfo) -> bool {
        let accepts = request.accept.as_deref().is_some_and(|accept| {
            let accept = accept.to_ascii_lowercase();
            self.config
                .plain_text_types
                .iter()
                .any(|media_type| accept.contains(&media_type.to_ascii_lowercase()))
        });
        if accepts {
            return true;
        }

        request.user_agent.as_deref().is_some_and(|agent| {
            let agent = agent.to_ascii_lowercase();
            self.config
                .agents
                .iter()
                .any(|known| agent.contains(&known.to_ascii_lowercase()))
        })
    }

    /// Artifact location for a request path: one trailing `/` dropped, then
    /// `/<index_file>` appended
    pub fn artifact_path(&self, path: &str) -> String {
        let base = path.strip_suffix('/').unwrap_or(path);
        format!("{}/{}", base, self.config.index_file)
    }

    /// Decide how to answer a request
    ///
    /// Fetch failures are never errors: the request simply falls through to
    /// the normal page.
    pub async fn decide(&self, request: &RequestInfo, source: &dyn ArtifactSource) -> Decision {
        if !self.in_namespace(&request.path) {
            debug!(path = %request.path, "outside report namespace");
            return Decision::Defer;
        }
        if !self.wants_plain_text(request) {
            debug!(path = %request.path, "client prefers html");
            return Decision::Defer;
        }

        let artifact = self.artifact_path(&request.path);
        match source.fetch(&artifact).await {
            Ok(body) => {
                debug!(artifact = %artifact, bytes = body.len(), "serving markdown");
                Decision::Serve(PlainTextResponse::markdown(body))
            }
            Err(FetchError::NotFound(_)) => {
                debug!(artifact = %artifact, "no markdown artifact");
                Decision::Defer
            }
            Err(err) => {
                warn!(artifact = %artifact, error = %err, "artifact fetch failed");
                Decision::Defer
            }
        }
    }
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
