//! Where the configuration text comes from.

use crate::error::Result;
use std::io;
use std::path::{Path, PathBuf};

/// Default UNIX resolver configuration path.
pub const DEFAULT_RESOLV_CONF: &str = "/etc/resolv.conf";

/// A readable resolver configuration.
///
/// The cache reads its source once per reload. Implement this to feed
/// configuration from somewhere other than the filesystem.
pub trait ConfSource: Send + Sync {
    /// Returns the full configuration text.
    ///
    /// # Errors
    ///
    /// Any I/O failure. The cache treats it as an empty configuration.
    fn read_to_string(&self) -> io::Result<String>;

    /// Human-readable origin, used in log fields.
    fn describe(&self) -> String;
}

/// Reads configuration from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLV_CONF)
    }
}

impl ConfSource for FileSource {
    /// Invalid UTF-8 is replaced with U+FFFD; only the affected tokens change.
    fn read_to_string(&self) -> io::Result<String> {
        let bytes = std::fs::read(&self.path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed in-memory configuration text.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    content: String,
}

impl StaticSource {
    /// Creates a source that always yields `content`.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl ConfSource for StaticSource {
    fn read_to_string(&self) -> io::Result<String> {
        Ok(self.content.clone())
    }

    fn describe(&self) -> String {
        "<static>".to_string()
    }
}

/// Reads `source`, surfacing failures instead of degrading to empty.
///
/// # Errors
///
/// Returns [`ResolverError::Io`](crate::ResolverError::Io) if the source
/// cannot be read.
pub fn load(source: &dyn ConfSource) -> Result<String> {
    Ok(source.read_to_string()?)
}

/// Reads `source`, logging and returning an empty string on failure.
pub(crate) fn load_or_empty(source: &dyn ConfSource) -> String {
    load(source).unwrap_or_else(|e| {
        tracing::debug!(
            source = %source.describe(),
            error = %e,
            "Resolver configuration unreadable, using empty configuration"
        );
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_source_reads_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resolv.conf");
        std::fs::write(&path, "nameserver 192.0.2.1\n").unwrap();

        let source = FileSource::new(&path);
        assert_eq!(source.path(), path.as_path());
        assert_eq!(load(&source).unwrap(), "nameserver 192.0.2.1\n");
    }

    #[test]
    fn invalid_utf8_keeps_valid_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resolv.conf");
        std::fs::write(&path, b"# G\xe9n\xe9r\xe9\nnameserver 192.0.2.1\n").unwrap();

        let content = load(&FileSource::new(&path)).unwrap();
        assert!(content.starts_with("# G\u{fffd}n"));
        assert!(content.ends_with("nameserver 192.0.2.1\n"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent"));
        assert!(load(&source).unwrap_err().is_not_found());
        assert_eq!(load_or_empty(&source), "");
    }

    #[test]
    fn default_path() {
        assert_eq!(FileSource::default().path(), Path::new(DEFAULT_RESOLV_CONF));
    }

    #[test]
    fn static_source() {
        let source = StaticSource::new("domain example.org\n");
        assert_eq!(load_or_empty(&source), "domain example.org\n");
        assert_eq!(source.describe(), "<static>");
    }
}
