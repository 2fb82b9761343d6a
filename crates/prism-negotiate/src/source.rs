//! Artifact sources
//!
//! The negotiator only needs one capability from the site: fetch the
//! markdown artifact at a path. [`DirectorySource`] reads a built output
//! tree; [`MemorySource`] serves from a map and is handy in tests.

use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from fetching an artifact
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Artifact not found: {0}")]
    NotFound(String),

    /// Path escapes the source root or is otherwise unusable
    #[error("Invalid artifact path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Something that can produce the markdown artifact for a site path
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    /// Fetch the artifact at an absolute site path such as
    /// `/reports/q3/index.md`
    async fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

/// Artifacts read from a directory
///
/// By default the directory mirrors the whole site. A source mounted at a
/// prefix such as `/reports/` instead holds only what lies below it, which
/// is the layout `prism build` writes.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    mount: String,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            mount: "/".to_string(),
        }
    }

    /// Serve the directory under a site path prefix
    pub fn mount_at(mut self, prefix: impl Into<String>) -> Self {
        self.mount = prefix.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a site path onto the root, refusing anything but plain segments
    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let mount = self.mount.trim_end_matches('/');
        let relative = path
            .strip_prefix(mount)
            .filter(|rest| rest.starts_with('/'))
            .ok_or_else(|| FetchError::NotFound(path.to_string()))?;
        let relative = Path::new(relative.trim_start_matches('/'));
        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(segment) => resolved.push(segment),
                Component::CurDir => {}
                _ => return Err(FetchError::InvalidPath(path.to_string())),
            }
        }
        Ok(resolved)
    }
}

#[async_trait]
impl ArtifactSource for DirectorySource {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let file = self.resolve(path)?;
        match tokio::fs::read_to_string(&file).await {
            Ok(body) => Ok(body),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(FetchError::NotFound(path.to_string()))
            }
            Err(err) => Err(FetchError::Io(err)),
        }
    }
}

/// Artifacts held in memory, keyed by site path
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    artifacts: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an artifact, builder style
    pub fn with(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(path, body);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, body: impl Into<String>) {
        self.artifacts.insert(path.into(), body.into());
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

#[async_trait]
impl ArtifactSource for MemorySource {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        self.artifacts
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_path() {
        let source = DirectorySource::new("/srv/site");
        let file = source.resolve("/reports/q3/index.md").unwrap();
        assert_eq!(file, PathBuf::from("/srv/site/reports/q3/index.md"));
    }

    #[test]
    fn test_resolve_rejects_parent_segments() {
        let source = DirectorySource::new("/srv/site");
        let err = source.resolve("/reports/../../etc/passwd").unwrap_err();
        assert!(matches!(err, FetchError::InvalidPath(_)));
    }

    #[test]
    fn test_resolve_under_mount() {
        let source = DirectorySource::new("/srv/dist").mount_at("/reports/");
        let file = source.resolve("/reports/q3/index.md").unwrap();
        assert_eq!(file, PathBuf::from("/srv/dist/q3/index.md"));
        assert!(matches!(
            source.resolve("/reportsq3/index.md"),
            Err(FetchError::NotFound(_))
        ));
        assert!(matches!(
            source.resolve("/blog/index.md"),
            Err(FetchError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_memory_source() {
        let source = MemorySource::new().with("/reports/a/index.md", "# A");
        assert_eq!(source.len(), 1);
        assert_eq!(source.fetch("/reports/a/index.md").await.unwrap(), "# A");
        assert!(matches!(
            source.fetch("/reports/b/index.md").await,
            Err(FetchError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_directory_source_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("reports/q3")).unwrap();
        std::fs::write(dir.path().join("reports/q3/index.md"), "# Q3\n").unwrap();

        let source = DirectorySource::new(dir.path());
        assert_eq!(source.fetch("/reports/q3/index.md").await.unwrap(), "# Q3\n");
        assert!(matches!(
            source.fetch("/reports/q4/index.md").await,
            Err(FetchError::NotFound(_))
        ));
    }
}
