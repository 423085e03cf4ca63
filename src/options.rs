//! Resolver `options` line handling.

use crate::parser::{self, Limits};

/// Options from `options` lines, immutable once parsed.
///
/// Unset values are `None`; callers pick their own defaults.
///
/// # Example
///
/// ```
/// use resolvconf_cache::ResolverOptions;
///
/// let opts = ResolverOptions::parse("options timeout:2 attempts:3 rotate\n");
/// assert_eq!(opts.retrans(), Some(2));
/// assert_eq!(opts.attempts(), Some(3));
/// assert!(opts.rotate());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverOptions {
    attempts: Option<u32>,
    timeout: Option<u32>,
    ndots: Option<u32>,
    rotate: bool,
}

impl ResolverOptions {
    /// Parses every `options` line in `content`. Later values win; unknown
    /// or malformed options are ignored.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut opts = Self::default();
        for opt in parser::resolvconf_with(content, parser::OPTIONS, Limits::UNBOUNDED) {
            match opt.split_once(':') {
                Some(("attempts", n)) => set_number(&mut opts.attempts, n),
                Some(("timeout", n)) => set_number(&mut opts.timeout, n),
                Some(("ndots", n)) => set_number(&mut opts.ndots, n),
                None if opt == "rotate" => opts.rotate = true,
                _ => tracing::trace!(option = %opt, "Ignoring resolver option"),
            }
        }
        opts
    }

    /// Number of query attempts before giving up.
    #[must_use]
    pub const fn attempts(&self) -> Option<u32> {
        self.attempts
    }

    /// Initial retransmission timeout, in seconds.
    #[must_use]
    pub const fn retrans(&self) -> Option<u32> {
        self.timeout
    }

    /// Dots needed before a name is tried as absolute first.
    #[must_use]
    pub const fn ndots(&self) -> Option<u32> {
        self.ndots
    }

    /// Whether name servers are used round-robin.
    #[must_use]
    pub const fn rotate(&self) -> bool {
        self.rotate
    }
}

fn set_number(slot: &mut Option<u32>, value: &str) {
    if let Ok(n) = value.parse() {
        *slot = Some(n);
    }
}
