//! Error types.

use thiserror::Error;

/// Result alias for resolver configuration operations.
pub type Result<T> = std::result::Result<T, ResolverError>;

/// Errors returned by the fallible entry points.
///
/// The cache accessors on [`ResolverConfiguration`](crate::ResolverConfiguration)
/// never surface these: an unreadable configuration degrades to an empty one.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// Reading the configuration source failed (typically `NotFound`).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid settings values.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl ResolverError {
    /// Returns `true` if the underlying I/O error is `NotFound`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
