//! TTL-gated resolver configuration cache.
//!
//! A [`ResolverConfiguration`] reloads its source lazily: the first access
//! loads it, later accesses reuse the result until the TTL has elapsed, and
//! the next access after that reloads it in place. There is no background
//! refresh.

use crate::config::{DEFAULT_TTL, ResolverSettings};
use crate::fallback::{FallbackDomainProvider, HostnameDomain};
use crate::options::ResolverOptions;
use crate::parser::{self, Limits};
use crate::search::search_list;
use crate::source::{self, ConfSource, FileSource};
use parking_lot::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Monotonic time source for staleness checks.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Cached view of the last reload. `last_refresh` is `None` until the first.
#[derive(Debug, Default)]
struct State {
    last_refresh: Option<Instant>,
    nameservers: Vec<String>,
    search_list: Vec<String>,
    options: ResolverOptions,
}

/// Name servers, search list and options from `resolv.conf`, cached for a TTL.
///
/// One instance is meant to live as long as the application and be shared
/// (e.g. behind an `Arc`). Accessors return owned copies; mutating a
/// returned list never affects the cache.
///
/// Reloads and copies happen under a single lock, and staleness is checked
/// with the lock held, so concurrent callers in a stale window cause one
/// reload and all observe its result. Unreadable configuration is treated
/// as empty.
///
/// # Example
///
/// ```
/// use resolvconf_cache::{ResolverConfiguration, StaticDomain, StaticSource};
///
/// let resolver = ResolverConfiguration::new()
///     .with_source(StaticSource::new("nameserver 192.0.2.53\n"))
///     .with_fallback(StaticDomain::new("corp.example"));
///
/// assert_eq!(resolver.nameservers(), ["192.0.2.53"]);
/// assert_eq!(resolver.searchlist(), ["corp.example"]);
/// ```
pub struct ResolverConfiguration {
    source: Box<dyn ConfSource>,
    fallback: Box<dyn FallbackDomainProvider>,
    clock: Box<dyn Clock>,
    ttl: Duration,
    state: Mutex<State>,
}

impl ResolverConfiguration {
    /// Reads `/etc/resolv.conf`, falls back to the host name's domain, and
    /// caches for [`DEFAULT_TTL`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: Box::new(FileSource::default()),
            fallback: Box::new(HostnameDomain),
            clock: Box::new(SystemClock),
            ttl: DEFAULT_TTL,
            state: Mutex::new(State::default()),
        }
    }

    /// Creates a cache for `settings.path` with `settings.ttl`.
    #[must_use]
    pub fn from_settings(settings: &ResolverSettings) -> Self {
        Self::new()
            .with_source(FileSource::new(&settings.path))
            .with_ttl(settings.ttl)
    }

    /// Replaces the configuration source.
    #[must_use]
    pub fn with_source(mut self, source: impl ConfSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Replaces the fallback domain provider.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl FallbackDomainProvider + 'static) -> Self {
        self.fallback = Box::new(fallback);
        self
    }

    /// Replaces the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Overrides the TTL.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns the TTL.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Name servers in file order, at most five. Bare IPv6 literals are
    /// bracketed.
    #[must_use]
    pub fn nameservers(&self) -> Vec<String> {
        self.loaded().nameservers.clone()
    }

    /// Search domains for unqualified host names.
    #[must_use]
    pub fn searchlist(&self) -> Vec<String> {
        self.loaded().search_list.clone()
    }

    /// Options from `options` lines.
    #[must_use]
    pub fn options(&self) -> ResolverOptions {
        self.loaded().options.clone()
    }

    /// When the cache was last reloaded, or `None` before first access.
    #[must_use]
    pub fn last_refresh(&self) -> Option<Instant> {
        self.state.lock().last_refresh
    }

    /// Locks the state, reloading it first if it is missing or stale.
    fn loaded(&self) -> MutexGuard<'_, State> {
        let mut state = self.state.lock();
        let now = self.clock.now();

        match state.last_refresh {
            Some(at) if now.saturating_duration_since(at) < self.ttl => {
                tracing::trace!(source = %self.source.describe(), "Resolver configuration fresh");
            }
            _ => self.reload(&mut state, now),
        }
        state
    }

    fn reload(&self, state: &mut State, now: Instant) {
        let content = source::load_or_empty(self.source.as_ref());

        state.nameservers = parser::resolvconf_with(&content, parser::NAMESERVER, Limits::NAMESERVER);
        state.search_list = search_list(&content, self.fallback.as_ref());
        state.options = ResolverOptions::parse(&content);
        state.last_refresh = Some(now);

        tracing::debug!(
            source = %self.source.describe(),
            nameservers = state.nameservers.len(),
            search_domains = state.search_list.len(),
            "Reloaded resolver configuration"
        );
    }
}

impl Default for ResolverConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ResolverConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverConfiguration")
            .field("source", &self.source.describe())
            .field("ttl", &self.ttl)
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}
