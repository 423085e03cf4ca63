//! Cache settings.

use crate::error::{ResolverError, Result};
use crate::source::DEFAULT_RESOLV_CONF;
use std::path::PathBuf;
use std::time::Duration;

/// Default time a loaded configuration stays fresh.
pub const DEFAULT_TTL: Duration = Duration::from_millis(300_000);

/// Overrides the configuration file path.
pub const ENV_PATH: &str = "RESOLVCONF_PATH";

/// Overrides the TTL, in decimal milliseconds.
pub const ENV_TTL_MS: &str = "RESOLVCONF_TTL_MS";

/// Settings for a [`ResolverConfiguration`](crate::ResolverConfiguration).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use resolvconf_cache::ResolverSettings;
///
/// let settings = ResolverSettings::new()
///     .with_path("/run/systemd/resolve/resolv.conf")
///     .with_ttl(Duration::from_secs(30));
///
/// assert_eq!(settings.ttl, Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Configuration file to read.
    pub path: PathBuf,

    /// How long a loaded configuration is served before the next access
    /// reloads it. Zero reloads on every access.
    pub ttl: Duration,
}

impl ResolverSettings {
    /// Creates settings for `/etc/resolv.conf` with the default TTL.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_RESOLV_CONF),
            ttl: DEFAULT_TTL,
        }
    }

    /// Overrides the configuration file path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Overrides the TTL.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Defaults, overridden by `RESOLVCONF_PATH` and `RESOLVCONF_TTL_MS`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::InvalidConfig`] if `RESOLVCONF_TTL_MS` is
    /// not a non-negative integer, or a variable is not valid Unicode.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(ResolverError::InvalidConfig(format!("{key}: {e}"))),
        })
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Propagates `lookup` failures; returns [`ResolverError::InvalidConfig`]
    /// for an unparsable TTL.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        let mut settings = Self::new();

        if let Some(path) = lookup(ENV_PATH)?.filter(|p| !p.is_empty()) {
            settings.path = PathBuf::from(path);
        }

        if let Some(ms) = lookup(ENV_TTL_MS)? {
            let ms: u64 = ms.trim().parse().map_err(|_| {
                ResolverError::InvalidConfig(format!("{ENV_TTL_MS}={ms:?} is not a number of milliseconds"))
            })?;
            settings.ttl = Duration::from_millis(ms);
        }

        Ok(settings)
    }
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self::new()
    }
}
